/// Backing-store dimensions in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

impl BackingSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Dimensions as GL viewport arguments, saturating at `i32::MAX`.
    #[inline]
    pub fn viewport_extent(self) -> (i32, i32) {
        (
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }
}

/// A canvas whose backing store can be resized.
///
/// Reads happen at call time, so layout changes are picked up on the next
/// reconciliation.
pub trait CanvasSurface {
    /// CSS layout size (client width/height).
    fn css_size(&self) -> (f64, f64);
    fn device_pixel_ratio(&self) -> f64;
    fn backing_size(&self) -> BackingSize;
    fn set_backing_width(&mut self, width: u32);
    fn set_backing_height(&mut self, height: u32);
}

/// Result of a reconciliation pass.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ResizeOutcome {
    /// Backing size after the pass.
    pub size: BackingSize,
    pub width_changed: bool,
    pub height_changed: bool,
}

impl ResizeOutcome {
    #[inline]
    pub fn changed(&self) -> bool {
        self.width_changed || self.height_changed
    }
}

/// Backing size for a CSS size at a device pixel ratio.
///
/// Each axis is `css * ratio` truncated toward zero. A ratio that is not a
/// positive finite number counts as `1`; negative or non-finite products
/// clamp to `0`.
///
/// The ratio fallback is deliberately stricter than the JS idiom
/// `devicePixelRatio || 1`, which only replaces `0` and `NaN`: negative and
/// infinite ratios fall back to `1` here as well.
pub fn desired_backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> BackingSize {
    let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };

    let axis = |css: f64| {
        let px = (css * ratio).trunc();
        if px.is_finite() && px > 0.0 {
            px.min(u32::MAX as f64) as u32
        } else {
            0
        }
    };

    BackingSize::new(axis(css_width), axis(css_height))
}

/// Brings the backing store in line with the layout size.
///
/// Width and height are written independently, and only when they differ;
/// calling this twice without a layout change writes nothing the second time.
pub fn reconcile_backing_store<S: CanvasSurface + ?Sized>(surface: &mut S) -> ResizeOutcome {
    let (css_w, css_h) = surface.css_size();
    let desired = desired_backing_size(css_w, css_h, surface.device_pixel_ratio());
    let current = surface.backing_size();

    let width_changed = current.width != desired.width;
    if width_changed {
        surface.set_backing_width(desired.width);
    }

    let height_changed = current.height != desired.height;
    if height_changed {
        surface.set_backing_height(desired.height);
    }

    if width_changed || height_changed {
        log::debug!(
            "backing store {}x{} -> {}x{}",
            current.width,
            current.height,
            desired.width,
            desired.height
        );
    }

    ResizeOutcome {
        size: desired,
        width_changed,
        height_changed,
    }
}
