//! Core engine-facing contracts.
//!
//! This module defines the interface between the frame driver and host code:
//! the per-frame callback trait and the context it receives.

mod app;
mod ctx;

pub use app::{App, AppControl, FnApp, from_fn};
pub use ctx::FrameCtx;
