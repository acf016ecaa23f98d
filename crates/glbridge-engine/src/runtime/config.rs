use std::time::Duration;

use crate::time::{ClearPulse, FrameClock};

/// Render loop configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Clear-level change per frame.
    pub clear_step: f32,
    /// Lower clamp for frame delta time.
    pub dt_min: Duration,
    /// Upper clamp for frame delta time.
    pub dt_max: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            clear_step: ClearPulse::DEFAULT_STEP,
            dt_min: FrameClock::DEFAULT_DT_MIN,
            dt_max: FrameClock::DEFAULT_DT_MAX,
        }
    }
}
