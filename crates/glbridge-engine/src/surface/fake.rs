use super::{BackingSize, CanvasSurface};

/// In-memory canvas that counts backing-store writes.
///
/// The backing store starts at the HTML default of 300x150.
#[derive(Debug, Clone)]
pub struct FakeCanvas {
    css: (f64, f64),
    ratio: f64,
    backing: BackingSize,
    writes: usize,
}

impl FakeCanvas {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            css: (css_width, css_height),
            ratio: device_pixel_ratio,
            backing: BackingSize::new(300, 150),
            writes: 0,
        }
    }

    pub fn set_css_size(&mut self, width: f64, height: f64) {
        self.css = (width, height);
    }

    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.ratio = ratio;
    }

    /// Number of `set_backing_*` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl CanvasSurface for FakeCanvas {
    fn css_size(&self) -> (f64, f64) {
        self.css
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.ratio
    }

    fn backing_size(&self) -> BackingSize {
        self.backing
    }

    fn set_backing_width(&mut self, width: u32) {
        self.backing.width = width;
        self.writes += 1;
    }

    fn set_backing_height(&mut self, height: u32) {
        self.backing.height = height;
        self.writes += 1;
    }
}
