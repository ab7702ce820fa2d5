//! Pattern engine
//!
//! Maps `(frame counter, configuration)` to a freshly computed grid. Nothing
//! carries over between frames except what the caller passes in.

use rand::RngCore;

use crate::config::Configuration;
use crate::grid::IntensityGrid;

/// Compute one frame into `grid`
///
/// The grid is reshaped to the configured counts (clamped to its capacity),
/// darkened, drawn and finally clamped to `[0, 1]`. An unset pattern leaves the
/// grid dark.
pub fn render_frame<R, const MAX_STRIPS: usize, const MAX_LEDS: usize>(
    frame: f64,
    config: &Configuration,
    grid: &mut IntensityGrid<MAX_STRIPS, MAX_LEDS>,
    rng: &mut R,
) where
    R: RngCore + ?Sized,
{
    grid.reshape(config.strip_count, config.led_count);
    if grid.shape().is_empty() {
        return;
    }

    if let Some(pattern) = config.pattern {
        pattern.render(frame, grid, rng, &config.message);
    }

    grid.clamp();
}

/// Pattern engine owning the random source for stochastic patterns
#[derive(Debug, Clone)]
pub struct PatternEngine<R> {
    rng: R,
}

impl<R: RngCore> PatternEngine<R> {
    /// Create an engine drawing randomness from `rng`
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Compute one frame into `grid`, see [`render_frame`]
    pub fn render<const MAX_STRIPS: usize, const MAX_LEDS: usize>(
        &mut self,
        frame: f64,
        config: &Configuration,
        grid: &mut IntensityGrid<MAX_STRIPS, MAX_LEDS>,
    ) {
        render_frame(frame, config, grid, &mut self.rng);
    }

    /// Replace the random source, e.g. to reseed
    pub fn set_rng(&mut self, rng: R) {
        self.rng = rng;
    }
}
