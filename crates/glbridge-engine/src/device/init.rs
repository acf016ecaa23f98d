/// Adapter selection hint forwarded to the browser.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum PowerPreference {
    Default,
    LowPower,
    #[default]
    HighPerformance,
}

/// Context creation attributes.
///
/// Defaults match what the host requests at startup: an opaque canvas with
/// depth, stencil and multisampling, tuned for the discrete GPU.
#[derive(Debug, Clone)]
pub struct ContextInit {
    /// Canvas element id, without the leading `#`.
    pub canvas_id: String,

    /// Whether the drawing buffer has an alpha channel.
    pub alpha: bool,
    pub depth: bool,
    pub stencil: bool,
    pub antialias: bool,
    pub premultiplied_alpha: bool,

    /// Keep the drawing buffer contents after presentation.
    ///
    /// Costs a copy on most implementations.
    pub preserve_drawing_buffer: bool,

    pub power_preference: PowerPreference,

    /// Refuse creation when the browser would fall back to a software renderer.
    pub fail_if_major_performance_caveat: bool,
}

impl Default for ContextInit {
    fn default() -> Self {
        Self {
            canvas_id: "kanvas".to_string(),
            alpha: false,
            depth: true,
            stencil: true,
            antialias: true,
            premultiplied_alpha: true,
            preserve_drawing_buffer: false,
            power_preference: PowerPreference::HighPerformance,
            fail_if_major_performance_caveat: false,
        }
    }
}

impl ContextInit {
    pub fn with_canvas_id(mut self, id: impl Into<String>) -> Self {
        self.canvas_id = id.into();
        self
    }
}
