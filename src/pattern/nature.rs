//! Natural phenomena: falling water, precipitation, meteors, lightning and fire

use rand::Rng;

use crate::grid::Canvas;
use crate::math::{cell, cell_index, pow, real, unit_sin, wrap};

const WATERFALL_FLOWS: usize = 8;
const WATERFALL_FLOW_SPACING: f64 = 10.0;
const WATERFALL_STRIP_PHASE: f64 = 5.0;
const WATERFALL_BAND: f64 = 8.0;
const WATERFALL_GAIN: f64 = 0.9;
/// Distance past the strip end a flow travels before wrapping
const WATERFALL_RUN_OUT: f64 = 10.0;

const REVERSE_STRIP_PHASE: f64 = 10.0;
const REVERSE_BAND: f64 = 15.0;
const REVERSE_RUN_OUT: f64 = 20.0;

const RAIN_DROPS: usize = 3;
const RAIN_DROP_PHASE: f64 = 25.0;
const RAIN_RUN_OUT: f64 = 10.0;
const RAIN_TAIL: f32 = 0.3;

const SNOW_FLAKES: usize = 4;
const SNOW_FLAKE_PHASE: f64 = 20.0;
const SNOW_SPEED: f64 = 0.4;
const SNOW_RUN_OUT: f64 = 25.0;
const SNOW_HALO: f32 = 0.3;

/// Shared strip phase of rain drops and snow flakes
const PRECIPITATION_STRIP_PHASE: f64 = 7.0;

const METEOR_SPEED: f64 = 1.2;
const METEOR_STRIP_PHASE: f64 = 50.0;
const METEOR_TAIL: f64 = 30.0;
const METEOR_FALLOFF: f64 = 1.5;
/// Meteor cycle length in strip lengths; the streak is dark for most of it
const METEOR_CYCLE: f64 = 3.0;

const LIGHTNING_CHANCE: f64 = 0.05;
const LIGHTNING_CELL_CHANCE: f64 = 0.7;

/// Several falling bands per strip, overlaid by max
pub fn waterfall(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    let leds = real(shape.leds);
    let modulus = leds + WATERFALL_RUN_OUT;

    for strip in 0..shape.strips {
        let offset = real(strip) * WATERFALL_STRIP_PHASE;
        for flow in 0..WATERFALL_FLOWS {
            let head = wrap(t + offset + real(flow) * WATERFALL_FLOW_SPACING, modulus);
            for i in 0..shape.leds {
                let distance = head - real(i);
                if (0.0..WATERFALL_BAND).contains(&distance) {
                    let intensity = (1.0 - distance / WATERFALL_BAND).max(0.0);
                    canvas.raise(strip, i, cell(intensity * WATERFALL_GAIN));
                }
            }
        }
    }
}

/// A single band rising from the end of each strip
pub fn reverse(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    let leds = real(shape.leds);

    for strip in 0..shape.strips {
        let offset = real(strip) * REVERSE_STRIP_PHASE;
        let head = leds - 1.0 - wrap(t + offset, leds + REVERSE_RUN_OUT);
        for i in 0..shape.leds {
            let distance = real(i) - head;
            if (0.0..=REVERSE_BAND).contains(&distance) {
                canvas.set(strip, i, cell((1.0 - distance / REVERSE_BAND).max(0.0)));
            }
        }
    }
}

/// Three drops per strip, each with a dim trailing cell
pub fn rain(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    let leds = real(shape.leds);

    for strip in 0..shape.strips {
        for drop in 0..RAIN_DROPS {
            let offset = real(drop) * RAIN_DROP_PHASE + real(strip) * PRECIPITATION_STRIP_PHASE;
            let position = wrap(t + offset, leds + RAIN_RUN_OUT);
            if position >= leds {
                continue;
            }
            let head = cell_index(position);
            canvas.raise(strip, head, 1.0);
            if let Some(tail) = head.checked_sub(1) {
                canvas.raise(strip, tail, RAIN_TAIL);
            }
        }
    }
}

/// Slow flakes with a soft halo on both neighbors
pub fn snow(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    let leds = real(shape.leds);

    for strip in 0..shape.strips {
        for flake in 0..SNOW_FLAKES {
            let offset = real(flake) * SNOW_FLAKE_PHASE + real(strip) * PRECIPITATION_STRIP_PHASE;
            let position = wrap(t * SNOW_SPEED + offset, leds + SNOW_RUN_OUT);
            if position >= leds {
                continue;
            }
            let center = cell_index(position);
            canvas.raise(strip, center, 1.0);
            if let Some(above) = center.checked_sub(1) {
                canvas.raise(strip, above, SNOW_HALO);
            }
            // `raise` ignores the cell past the strip end
            canvas.raise(strip, center + 1, SNOW_HALO);
        }
    }
}

/// One long-tailed streak per strip, visible for part of its cycle
pub fn meteor(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    let leds = real(shape.leds);
    if shape.leds == 0 {
        return;
    }

    for strip in 0..shape.strips {
        let offset = real(strip) * METEOR_STRIP_PHASE;
        let head = wrap(t * METEOR_SPEED + offset, leds * METEOR_CYCLE);
        if head >= leds + METEOR_TAIL {
            continue;
        }
        for i in 0..shape.leds {
            let distance = head - real(i);
            if (0.0..METEOR_TAIL).contains(&distance) {
                let intensity = 1.0 - pow(distance / METEOR_TAIL, METEOR_FALLOFF);
                canvas.set(strip, i, cell(intensity.max(0.0)));
            }
        }
    }
}

/// Rare full-curtain flashes of random cells
pub fn lightning<R: Rng + ?Sized>(canvas: &mut impl Canvas, rng: &mut R) {
    if !rng.gen_bool(LIGHTNING_CHANCE) {
        return;
    }

    let shape = canvas.shape();
    for strip in 0..shape.strips {
        for i in 0..shape.leds {
            let lit = rng.gen_bool(LIGHTNING_CELL_CHANCE);
            canvas.set(strip, i, if lit { 1.0 } else { 0.0 });
        }
    }
}

/// Flickering flame, brightest at the first cell of each strip
pub fn fire(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    let leds = real(shape.leds);

    for strip in 0..shape.strips {
        for i in 0..shape.leds {
            let flicker = unit_sin(t * 0.1 + real(i) * 0.5 + real(strip));
            let gradient = (leds - real(i)) / leds;
            canvas.set(strip, i, cell(gradient * flicker));
        }
    }
}
