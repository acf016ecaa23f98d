//! GL context ownership.
//!
//! This module is responsible for:
//! - creating the WebGL2 context from a canvas element (wasm32)
//! - owning the GL API object together with the per-kind handle tables
//! - creating, compiling and releasing GPU objects on behalf of host code

mod context;
mod init;
#[cfg(target_arch = "wasm32")]
mod web;

pub use context::GlContext;
pub use init::{ContextInit, PowerPreference};
#[cfg(target_arch = "wasm32")]
pub use web::create_webgl2_context;
