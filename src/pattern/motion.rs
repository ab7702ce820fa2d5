//! Moving shapes: waves, beams, chasers and arrows

use crate::grid::Canvas;
use crate::math::{TAU, abs, cell, cell_index, real, step, unit_sin, wrap};

/// Divisor turning frames into wave phase
pub(crate) const WAVE_PHASE_DIVISOR: f64 = 20.0;
const WAVE_STRIP_PHASE: f64 = 0.5;

const SCANNER_PERIOD_DIVISOR: f64 = 30.0;
const SCANNER_RADIUS: f64 = 5.0;

const CHASE_STRIP_PHASE: f64 = 5.0;

const THEATER_STEP: f64 = 10.0;
const THEATER_SPACING: usize = 3;

const ARROW_STEP: f64 = 5.0;
const ARROW_WING: f32 = 0.5;

/// One sine period along each strip, shifted per strip
pub fn wave(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    let leds = real(shape.leds);

    for strip in 0..shape.strips {
        for i in 0..shape.leds {
            let phase = (real(i) / leds) * TAU - t / WAVE_PHASE_DIVISOR
                + real(strip) * WAVE_STRIP_PHASE;
            canvas.set(strip, i, cell(unit_sin(phase)));
        }
    }
}

/// A soft beam sweeping back and forth, the same on every strip
pub fn scanner(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    let beam = unit_sin(t / SCANNER_PERIOD_DIVISOR) * real(shape.leds);

    for strip in 0..shape.strips {
        for i in 0..shape.leds {
            let distance = abs(beam - real(i));
            canvas.set(strip, i, cell((1.0 - distance / SCANNER_RADIUS).max(0.0)));
        }
    }
}

/// A single lit cell running down each strip
pub fn chase(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    if shape.leds == 0 {
        return;
    }

    for strip in 0..shape.strips {
        let position = wrap(t + real(strip) * CHASE_STRIP_PHASE, real(shape.leds));
        canvas.set(strip, cell_index(position), 1.0);
    }
}

/// Every third cell lit, shifting by one every few frames
pub fn theater(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    let phase = step(t, THEATER_STEP, THEATER_SPACING);

    for strip in 0..shape.strips {
        for i in (phase..shape.leds).step_by(THEATER_SPACING) {
            canvas.set(strip, i, 1.0);
        }
    }
}

/// Marker moving towards the end of the strips
pub fn arrow_down(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    let head = step(t, ARROW_STEP, shape.leds);
    draw_arrow(canvas, head, head.checked_sub(1));
}

/// Marker moving towards the start of the strips
pub fn arrow_up(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    if shape.leds == 0 {
        return;
    }
    let head = shape.leds - 1 - step(t, ARROW_STEP, shape.leds);
    draw_arrow(canvas, head, Some(head + 1));
}

/// Light the marker row on all strips and the wingtips beside the middle strip
///
/// Wingtips need a strip on each side of the middle one, so curtains with fewer
/// than three strips show the marker only.
fn draw_arrow(canvas: &mut impl Canvas, head: usize, wing: Option<usize>) {
    let shape = canvas.shape();
    if shape.leds == 0 {
        return;
    }

    for strip in 0..shape.strips {
        canvas.set(strip, head, 1.0);
    }

    let middle = shape.middle_strip();
    let Some(wing) = wing.filter(|wing| *wing < shape.leds) else {
        return;
    };
    if middle == 0 || middle + 1 >= shape.strips {
        return;
    }
    canvas.set(middle - 1, wing, ARROW_WING);
    canvas.set(middle + 1, wing, ARROW_WING);
}
