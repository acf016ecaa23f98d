use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, anyhow};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::WebGl2RenderingContext;

use crate::core::{App, AppControl};
use crate::device::GlContext;
use crate::surface::HtmlCanvasSurface;

use super::{FrameLoop, RuntimeConfig};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Entry point for the browser render loop.
pub struct Runtime;

impl Runtime {
    /// Schedules `app` on every animation frame until it returns
    /// [`AppControl::Exit`].
    ///
    /// Returns once the first frame is scheduled; the loop then lives in the
    /// browser's callback queue. On exit the context is dropped and the frame
    /// callback is released from a microtask.
    pub fn run<A>(
        gl: GlContext<WebGl2RenderingContext>,
        surface: HtmlCanvasSurface,
        config: RuntimeConfig,
        app: A,
    ) -> Result<()>
    where
        A: App<WebGl2RenderingContext> + 'static,
    {
        let mut frames = FrameLoop::new(gl, surface, &config, app);

        // The closure re-schedules itself, so it has to be reachable from
        // inside its own body.
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let scheduled = callback.clone();

        *callback.borrow_mut() = Some(Closure::new(move || {
            match frames.step() {
                Some(AppControl::Continue) => {
                    if let Err(e) = request_frame(&scheduled) {
                        log::error!("failed to schedule next frame: {e:#}");
                    }
                }
                Some(AppControl::Exit) => release_after_frame(&scheduled),
                None => {}
            }
        }));

        request_frame(&callback)?;
        log::info!("render loop started");
        Ok(())
    }
}

fn request_frame(callback: &FrameCallback) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global window"))?;
    let cb = callback.borrow();
    let closure = cb
        .as_ref()
        .ok_or_else(|| anyhow!("frame callback was released"))?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("requestAnimationFrame failed: {e:?}"))?;
    Ok(())
}

/// Drops the frame callback once it has returned.
///
/// A closure cannot free itself while running, and it holds the `Rc` that
/// owns it; clearing the cell from a microtask breaks that cycle.
fn release_after_frame(callback: &FrameCallback) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cell = callback.clone();
    let release = Closure::once_into_js(move || {
        cell.borrow_mut().take();
    });
    window.queue_microtask(release.unchecked_ref());
}
