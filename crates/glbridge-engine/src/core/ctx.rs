use crate::device::GlContext;
use crate::gl::{GlApi, PrimitiveMode};
use crate::surface::BackingSize;
use crate::time::FrameTime;

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a, G: GlApi> {
    pub gl: &'a mut GlContext<G>,
    pub time: FrameTime,
    /// Backing-store size the viewport was set to.
    pub size: BackingSize,
    /// Gray level the color buffer was cleared to.
    pub clear_level: f32,
}

impl<'a, G: GlApi> FrameCtx<'a, G> {
    /// Draws `count` vertices from the currently bound program and vertex array.
    #[inline]
    pub fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32) {
        self.gl.gl().draw_arrays(mode, first, count);
    }
}
