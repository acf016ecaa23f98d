//! Canvas backing-store management.
//!
//! A canvas has two sizes: its CSS layout size and the pixel dimensions of its
//! backing store. Reconciliation derives the second from the first and the
//! device pixel ratio, writing only the dimensions that differ so the
//! framebuffer is not reallocated needlessly.

mod backing;
#[cfg(any(test, feature = "testing"))]
mod fake;
#[cfg(target_arch = "wasm32")]
mod web;

pub use backing::{
    BackingSize, CanvasSurface, ResizeOutcome, desired_backing_size, reconcile_backing_store,
};
#[cfg(any(test, feature = "testing"))]
pub use fake::FakeCanvas;
#[cfg(target_arch = "wasm32")]
pub use web::HtmlCanvasSurface;
