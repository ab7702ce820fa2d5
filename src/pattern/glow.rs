//! Whole-curtain light effects

use rand::Rng;

use crate::grid::Canvas;
use crate::math::{cell, real, sin, step, unit_sin};

const SPARKLE_CHANCE: f64 = 0.05;

const TWINKLE_PHASE_DIVISOR: f64 = 20.0;
const TWINKLE_THRESHOLD: f64 = 0.7;

const FLASH_STEP: f64 = 10.0;

const HEARTBEAT_PHASE_DIVISOR: f64 = 15.0;

/// Random single-frame glints
pub fn sparkle<R: Rng + ?Sized>(canvas: &mut impl Canvas, rng: &mut R) {
    let shape = canvas.shape();
    for strip in 0..shape.strips {
        for i in 0..shape.leds {
            if rng.gen_bool(SPARKLE_CHANCE) {
                canvas.set(strip, i, 1.0);
            }
        }
    }
}

/// Only the crests of a slow sine field are shown
pub fn twinkle(t: f64, canvas: &mut impl Canvas) {
    let shape = canvas.shape();
    for strip in 0..shape.strips {
        for i in 0..shape.leds {
            let value = unit_sin(t / TWINKLE_PHASE_DIVISOR + real(i) * 0.5 + real(strip) * 0.3);
            if value > TWINKLE_THRESHOLD {
                canvas.set(strip, i, cell(value));
            }
        }
    }
}

/// Whole curtain on and off in a square wave
pub fn flash(t: f64, canvas: &mut impl Canvas) {
    if step(t, FLASH_STEP, 2) == 1 {
        canvas.fill(1.0);
    }
}

/// Whole curtain pulsing with `sin²`
pub fn heartbeat(t: f64, canvas: &mut impl Canvas) {
    let beat = sin(t / HEARTBEAT_PHASE_DIVISOR);
    canvas.fill(cell(beat * beat));
}
