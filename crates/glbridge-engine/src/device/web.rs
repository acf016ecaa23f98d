use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext, WebGlContextAttributes, WebGlPowerPreference,
};

use super::{ContextInit, GlContext, PowerPreference};
use crate::error::{BridgeError, Result};
use crate::surface::HtmlCanvasSurface;

fn context_error(msg: impl Into<String>) -> BridgeError {
    let msg = msg.into();
    log::error!("{msg}");
    BridgeError::Context(msg)
}

fn context_attributes(init: &ContextInit) -> WebGlContextAttributes {
    let attrs = WebGlContextAttributes::new();
    attrs.set_alpha(init.alpha);
    attrs.set_depth(init.depth);
    attrs.set_stencil(init.stencil);
    attrs.set_antialias(init.antialias);
    attrs.set_premultiplied_alpha(init.premultiplied_alpha);
    attrs.set_preserve_drawing_buffer(init.preserve_drawing_buffer);
    attrs.set_fail_if_major_performance_caveat(init.fail_if_major_performance_caveat);
    attrs.set_power_preference(match init.power_preference {
        PowerPreference::Default => WebGlPowerPreference::Default,
        PowerPreference::LowPower => WebGlPowerPreference::LowPower,
        PowerPreference::HighPerformance => WebGlPowerPreference::HighPerformance,
    });
    attrs
}

/// Looks up `init.canvas_id` and creates a WebGL2 context on it.
///
/// The canvas element must exist before this is called.
pub fn create_webgl2_context(
    init: &ContextInit,
) -> Result<(GlContext<WebGl2RenderingContext>, HtmlCanvasSurface)> {
    let window = web_sys::window().ok_or_else(|| context_error("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| context_error("window has no document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(&init.canvas_id)
        .ok_or_else(|| context_error(format!("no element with id `{}`", init.canvas_id)))?
        .dyn_into()
        .map_err(|_| context_error(format!("element `{}` is not a canvas", init.canvas_id)))?;

    let attrs = context_attributes(init);
    let gl: WebGl2RenderingContext = canvas
        .get_context_with_context_options("webgl2", attrs.as_ref())
        .map_err(|e| context_error(format!("getContext(\"webgl2\") threw: {e:?}")))?
        .ok_or_else(|| context_error("WebGL2 is not available"))?
        .dyn_into()
        .map_err(|_| context_error("getContext(\"webgl2\") returned an unexpected object"))?;

    log::info!("WebGL2 context created on #{}", init.canvas_id);

    Ok((GlContext::new(gl), HtmlCanvasSurface::new(canvas, window)))
}
