//! Time subsystem.
//!
//! Frame timing and the clear-color oscillation used by the render loop.
//! Intended usage:
//! - one `FrameClock` per render loop; call `tick()` once per animation frame
//! - one `ClearPulse` per loop; call `advance()` after the frame is drawn

mod frame_clock;
mod pulse;

pub use frame_clock::{FrameClock, FrameTime};
pub use pulse::ClearPulse;
