use web_sys::{HtmlCanvasElement, Window};

use super::{BackingSize, CanvasSurface};

/// [`CanvasSurface`] over a DOM canvas element.
#[derive(Debug, Clone)]
pub struct HtmlCanvasSurface {
    canvas: HtmlCanvasElement,
    window: Window,
}

impl HtmlCanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, window: Window) -> Self {
        Self { canvas, window }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl CanvasSurface for HtmlCanvasSurface {
    fn css_size(&self) -> (f64, f64) {
        (self.canvas.client_width() as f64, self.canvas.client_height() as f64)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio()
    }

    fn backing_size(&self) -> BackingSize {
        BackingSize::new(self.canvas.width(), self.canvas.height())
    }

    fn set_backing_width(&mut self, width: u32) {
        self.canvas.set_width(width);
    }

    fn set_backing_height(&mut self, height: u32) {
        self.canvas.set_height(height);
    }
}
