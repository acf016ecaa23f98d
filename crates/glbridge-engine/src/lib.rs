//! glbridge engine crate.
//!
//! This crate owns the GL-facing pieces used by host applications: typed handle
//! tables, the bridge operations hosts call with those handles, canvas resize
//! reconciliation and the animation-frame driver.

pub mod bridge;
pub mod core;
pub mod device;
pub mod error;
pub mod gl;
pub mod handle;
pub mod logging;
pub mod runtime;
pub mod surface;
pub mod time;

#[cfg(target_arch = "wasm32")]
pub mod host;

pub use error::{BridgeError, Result, ShaderError, ShaderStage};
