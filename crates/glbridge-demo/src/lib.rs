//! Standalone WebGL2 triangle demo.
//!
//! Compiles a fixed shader pair, uploads one triangle and runs the engine's
//! animation-frame loop: the canvas is cleared to a slowly pulsing gray and
//! the host callback draws on top of it every frame.

mod shaders;
mod triangle;

pub use triangle::{DrawTriangle, TRIANGLE, TriangleDemo, Vertex};

#[cfg(target_arch = "wasm32")]
mod web {
    use anyhow::Context;
    use glbridge_engine::device::{ContextInit, create_webgl2_context};
    use glbridge_engine::logging::{LoggingConfig, init_logging};
    use glbridge_engine::runtime::{Runtime, RuntimeConfig};
    use wasm_bindgen::prelude::*;

    use crate::{DrawTriangle, TriangleDemo};

    /// Creates the context on `init.canvas_id` and starts the demo loop.
    pub fn run(init: &ContextInit, config: RuntimeConfig) -> anyhow::Result<()> {
        let (mut gl, surface) =
            create_webgl2_context(init).context("failed to create WebGL2 context")?;
        let demo = TriangleDemo::new(&mut gl, DrawTriangle)?;
        Runtime::run(gl, surface, config, demo)
    }

    /// Entry point, called when the WASM module loads.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        init_logging(LoggingConfig::default());
        log::info!("glbridge demo starting");
        run(&ContextInit::default(), RuntimeConfig::default()).map_err(|e| {
            log::error!("demo failed to start: {e:#}");
            JsValue::from_str(&format!("{e:#}"))
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::run;
