//! Static-looking textures that scroll or toggle

use super::motion::WAVE_PHASE_DIVISOR;
use crate::grid::Canvas;
use crate::math::{TAU, cell, real, step, unit_sin};

const STRIPE_STEP: f64 = 5.0;
const STRIPE_PERIOD: usize = 10;
const STRIPE_WIDTH: usize = 5;

const DOT_STEP: f64 = 10.0;
const DOT_SPACING: usize = 4;

/// On/off bands scrolling one cell every few frames
pub fn stripe(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    let offset = step(t, STRIPE_STEP, STRIPE_PERIOD);

    for strip in 0..shape.strips {
        for i in 0..shape.leds {
            if (i + offset) % STRIPE_PERIOD < STRIPE_WIDTH {
                canvas.set(strip, i, 1.0);
            }
        }
    }
}

/// Two interleaved sparse dot grids, alternating
pub fn dot(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    let first = DOT_SPACING / 2 * step(t, DOT_STEP, 2);

    for strip in 0..shape.strips {
        for i in (first..shape.leds).step_by(DOT_SPACING) {
            canvas.set(strip, i, 1.0);
        }
    }
}

/// Two sine periods along each strip, identical on all strips
pub fn gradient(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    let leds = real(shape.leds);

    for strip in 0..shape.strips {
        for i in 0..shape.leds {
            let phase = (real(i) / leds) * 2.0 * TAU - t / WAVE_PHASE_DIVISOR;
            canvas.set(strip, i, cell(unit_sin(phase)));
        }
    }
}
