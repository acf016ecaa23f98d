use crate::gl::GlApi;
use crate::surface::BackingSize;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    /// Stop scheduling animation frames.
    Exit,
}

/// Host-side per-frame callback.
pub trait App<G: GlApi> {
    /// Called after the backing store was resized, before the frame is drawn.
    fn on_resize(&mut self, size: BackingSize) {
        let _ = size;
    }

    /// Called once per animation frame, after the clear.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, G>) -> AppControl;
}

/// [`App`] backed by a closure. See [`from_fn`].
pub struct FnApp<F>(F);

/// Wraps a per-frame closure so it can be handed to the runtime.
pub fn from_fn<G, F>(f: F) -> FnApp<F>
where
    G: GlApi,
    F: FnMut(&mut FrameCtx<'_, G>) -> AppControl,
{
    FnApp(f)
}

impl<G, F> App<G> for FnApp<F>
where
    G: GlApi,
    F: FnMut(&mut FrameCtx<'_, G>) -> AppControl,
{
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, G>) -> AppControl {
        (self.0)(ctx)
    }
}
