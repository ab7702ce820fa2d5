//! Float helpers for pattern generators.
//!
//! `core` has no transcendental functions, so everything goes through `libm`.
//! Frame positions are computed in `f64` to keep long-running counters stable;
//! cells are stored as `f32`.

use core::f64::consts::PI;

/// One full turn in radians.
pub const TAU: f64 = 2.0 * PI;

#[inline]
pub fn sin(x: f64) -> f64 {
    libm::sin(x)
}

#[inline]
pub fn floor(x: f64) -> f64 {
    libm::floor(x)
}

#[inline]
pub fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

#[inline]
pub fn pow(x: f64, y: f64) -> f64 {
    libm::pow(x, y)
}

/// Floating remainder with the sign of the dividend.
///
/// Matches the `%` semantics the patterns were tuned with; frame positions are
/// never negative, so results stay in `[0, modulus)`.
#[inline]
pub fn wrap(x: f64, modulus: f64) -> f64 {
    libm::fmod(x, modulus)
}

/// Map a sine sample from `[-1, 1]` into `[0, 1]`.
#[inline]
pub fn unit_sin(x: f64) -> f64 {
    sin(x) * 0.5 + 0.5
}

/// `floor(t / period) mod cycle` for stepped patterns.
///
/// Returns 0 for a zero cycle.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn step(t: f64, period: f64, cycle: usize) -> usize {
    if cycle == 0 {
        return 0;
    }
    let steps = floor(t / period).max(0.0) as u64;
    (steps % cycle as u64) as usize
}

/// Clamp an intensity into `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Convert an intensity into an 8-bit scale factor.
///
/// Zero maps to exactly zero so dark cells never glow.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn intensity8(intensity: f32) -> u8 {
    let clamped = clamp_unit(intensity);
    if clamped <= 0.0 {
        return 0;
    }
    libm::roundf(clamped * 255.0) as u8
}

/// Convert a cell index into a float coordinate
#[inline]
#[allow(clippy::cast_precision_loss)]
pub const fn real(index: usize) -> f64 {
    index as f64
}

/// Convert a non-negative float position into a cell index
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cell_index(position: f64) -> usize {
    floor(position).max(0.0) as usize
}

/// Narrow a computed intensity into cell storage
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn cell(value: f64) -> f32 {
    value as f32
}
