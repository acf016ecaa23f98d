//! Animation-frame loop.
//!
//! [`FrameDriver`] performs one frame against any [`GlApi`](crate::gl::GlApi)
//! and [`CanvasSurface`](crate::surface::CanvasSurface). [`FrameLoop`] owns
//! the context, surface and app of one loop; on wasm32, [`Runtime`] steps it
//! from `requestAnimationFrame`.

mod config;
mod driver;
#[cfg(target_arch = "wasm32")]
mod web;

pub use config::RuntimeConfig;
pub use driver::{FrameDriver, FrameLoop};
#[cfg(target_arch = "wasm32")]
pub use web::Runtime;
