use crate::core::{App, AppControl, FrameCtx};
use crate::device::GlContext;
use crate::gl::GlApi;
use crate::surface::{CanvasSurface, reconcile_backing_store};
use crate::time::{ClearPulse, FrameClock};

use super::RuntimeConfig;

/// Per-loop frame state: clear oscillation and frame timing.
///
/// Frame sequence:
/// 1) reconcile the canvas backing store
/// 2) viewport to the backing size
/// 3) clear to the current gray level
/// 4) host callback
/// 5) advance the gray level
#[derive(Debug, Clone)]
pub struct FrameDriver {
    pulse: ClearPulse,
    clock: FrameClock,
}

impl FrameDriver {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            pulse: ClearPulse::new(config.clear_step),
            clock: FrameClock::with_clamps(config.dt_min, config.dt_max),
        }
    }

    #[inline]
    pub fn pulse(&self) -> &ClearPulse {
        &self.pulse
    }

    /// Runs one frame.
    pub fn frame<G, S, A>(
        &mut self,
        gl: &mut GlContext<G>,
        surface: &mut S,
        app: &mut A,
    ) -> AppControl
    where
        G: GlApi,
        S: CanvasSurface + ?Sized,
        A: App<G> + ?Sized,
    {
        let resize = reconcile_backing_store(surface);
        if resize.changed() {
            app.on_resize(resize.size);
        }

        let (width, height) = resize.size.viewport_extent();
        gl.gl().viewport(0, 0, width, height);

        let [r, g, b, a] = self.pulse.color();
        gl.gl().clear_color(r, g, b, a);
        gl.gl().clear_color_buffer();

        let mut ctx = FrameCtx {
            gl,
            time: self.clock.tick(),
            size: resize.size,
            clear_level: self.pulse.value(),
        };
        let control = app.on_frame(&mut ctx);

        self.pulse.advance();
        control
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(&RuntimeConfig::default())
    }
}

/// Everything one render loop owns.
///
/// [`step`](Self::step) runs frames until the app returns
/// [`AppControl::Exit`]; the context, surface and app are then dropped, which
/// deletes every GPU object still registered in the context.
pub struct FrameLoop<G: GlApi, S, A> {
    state: Option<LoopState<G, S, A>>,
}

struct LoopState<G: GlApi, S, A> {
    gl: GlContext<G>,
    surface: S,
    driver: FrameDriver,
    app: A,
}

impl<G, S, A> FrameLoop<G, S, A>
where
    G: GlApi,
    S: CanvasSurface,
    A: App<G>,
{
    pub fn new(gl: GlContext<G>, surface: S, config: &RuntimeConfig, app: A) -> Self {
        Self {
            state: Some(LoopState {
                gl,
                surface,
                driver: FrameDriver::new(config),
                app,
            }),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    /// Runs one frame. Returns `None` once the loop has exited.
    pub fn step(&mut self) -> Option<AppControl> {
        let LoopState { gl, surface, driver, app } = self.state.as_mut()?;
        let control = driver.frame(gl, surface, app);
        if control == AppControl::Exit {
            self.state = None;
            log::info!("render loop exited, GPU objects released");
        }
        Some(control)
    }
}
