use wave_core::geometry::WaveMetrics;
use wave_core::{AnimationState, ConfigError, WaveConfig, WaveOutline, WaveParameters};

use crate::surface::Surface;

/// One running wave instance: its parameters plus the animation state it
/// owns exclusively.
///
/// Call [`WaveRenderer::render_frame`] once per display frame. Each call
/// advances the clock, rebuilds the outline for the surface's current size
/// and fills it; nothing but the two phases carries over between frames.
#[derive(Debug, Clone, Default)]
pub struct WaveRenderer {
    params: WaveParameters,
    state: AnimationState,
    degenerate: bool,
}

impl WaveRenderer {
    pub fn new(params: WaveParameters) -> Self {
        Self {
            params,
            state: AnimationState::new(),
            degenerate: false,
        }
    }

    pub fn from_config(config: &WaveConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.resolve()?))
    }

    pub fn params(&self) -> &WaveParameters {
        &self.params
    }

    /// Swap parameters mid-session; current phases are kept.
    pub fn set_params(&mut self, params: WaveParameters) {
        self.params = params;
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Build the outline for the frame at `now_ms` without drawing it.
    pub fn next_outline<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &S) -> WaveOutline {
        self.state.advance(now_ms, &self.params);

        let amplitude_px = surface.to_px(self.params.amplitude());
        let metrics = WaveMetrics::compute(surface.size(), amplitude_px, &self.params);

        let degenerate = metrics.is_degenerate();
        if degenerate != self.degenerate {
            log::debug!(
                "wave {} at {}x{} (scaled amplitude {:.3})",
                if degenerate { "collapsed to solid fill" } else { "restored" },
                metrics.size.width,
                metrics.size.height,
                metrics.scaled_amplitude,
            );
            self.degenerate = degenerate;
        }

        metrics.outline(self.state.phases(), self.params.color())
    }

    /// Advance, build and fill one frame.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) {
        let outline = self.next_outline(now_ms, surface);
        log::trace!("filling wave outline at {now_ms:.1}ms");
        surface.fill(&outline);
    }

    /// End the render session. The next frame starts a fresh one.
    pub fn stop(&mut self) {
        self.state.reset();
        self.degenerate = false;
    }
}
