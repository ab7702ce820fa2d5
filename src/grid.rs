//! Fixed-capacity intensity grid.
//!
//! The grid owns a `[strip][led]` buffer sized by const generics and an active
//! shape inside it, the same way a frame buffer is bounded by the rendering area
//! of a single strip. Cells outside the active shape are kept at zero.

use crate::color::{Rgb, shade};
use crate::math::clamp_unit;

/// Active shape of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridShape {
    pub strips: usize,
    pub leds: usize,
}

impl GridShape {
    pub const fn new(strips: usize, leds: usize) -> Self {
        Self { strips, leds }
    }

    /// Total number of cells
    pub const fn cells(self) -> usize {
        self.strips * self.leds
    }

    pub const fn is_empty(self) -> bool {
        self.strips == 0 || self.leds == 0
    }

    /// Index of the middle strip (rounded down)
    pub const fn middle_strip(self) -> usize {
        self.strips / 2
    }
}

/// Drawing surface for pattern generators
///
/// Writes outside the active shape must be ignored.
pub trait Canvas {
    /// Active shape
    fn shape(&self) -> GridShape;

    /// Overwrite a cell
    fn set(&mut self, strip: usize, led: usize, value: f32);

    /// Max-combine a value into a cell
    fn raise(&mut self, strip: usize, led: usize, value: f32);

    /// Overwrite every active cell
    fn fill(&mut self, value: f32) {
        let shape = self.shape();
        for strip in 0..shape.strips {
            for led in 0..shape.leds {
                self.set(strip, led, value);
            }
        }
    }
}

/// 2D grid of normalized intensities indexed `[strip][led]`
#[derive(Debug, Clone)]
pub struct IntensityGrid<const MAX_STRIPS: usize, const MAX_LEDS: usize> {
    cells: [[f32; MAX_LEDS]; MAX_STRIPS],
    shape: GridShape,
}

impl<const MAX_STRIPS: usize, const MAX_LEDS: usize> Default
    for IntensityGrid<MAX_STRIPS, MAX_LEDS>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_STRIPS: usize, const MAX_LEDS: usize> IntensityGrid<MAX_STRIPS, MAX_LEDS> {
    /// Create an empty (0x0) grid
    pub const fn new() -> Self {
        Self {
            cells: [[0.0; MAX_LEDS]; MAX_STRIPS],
            shape: GridShape::new(0, 0),
        }
    }

    /// Create a dark grid with the given shape
    pub fn with_shape(strips: usize, leds: usize) -> Self {
        let mut grid = Self::new();
        grid.reshape(strips, leds);
        grid
    }

    /// Capacity of the underlying buffer
    pub const fn capacity() -> GridShape {
        GridShape::new(MAX_STRIPS, MAX_LEDS)
    }

    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    pub const fn strip_count(&self) -> usize {
        self.shape.strips
    }

    pub const fn led_count(&self) -> usize {
        self.shape.leds
    }

    /// Change the active shape and darken every cell
    ///
    /// Dimensions larger than the capacity are clamped to it.
    pub fn reshape(&mut self, strips: usize, leds: usize) {
        self.shape = GridShape::new(strips.min(MAX_STRIPS), leds.min(MAX_LEDS));
        self.clear();
    }

    /// Set every cell (active or not) to zero
    pub fn clear(&mut self) {
        for strip in &mut self.cells {
            strip.fill(0.0);
        }
    }

    /// Read a cell; out-of-shape positions read as dark
    pub fn get(&self, strip: usize, led: usize) -> f32 {
        if strip >= self.shape.strips || led >= self.shape.leds {
            return 0.0;
        }
        self.cells[strip][led]
    }

    /// Write a cell; out-of-shape writes are ignored
    pub fn set(&mut self, strip: usize, led: usize, value: f32) {
        if strip >= self.shape.strips || led >= self.shape.leds {
            return;
        }
        self.cells[strip][led] = value;
    }

    /// Raise a cell to `value` if it is currently dimmer
    ///
    /// Overlapping emitters combine through this so brightness never sums.
    pub fn raise(&mut self, strip: usize, led: usize, value: f32) {
        if strip >= self.shape.strips || led >= self.shape.leds {
            return;
        }
        let cell = &mut self.cells[strip][led];
        if value > *cell {
            *cell = value;
        }
    }

    /// Fill the active area with one value
    pub fn fill(&mut self, value: f32) {
        let leds = self.shape.leds;
        for strip in self.strips_mut() {
            strip[..leds].fill(value);
        }
    }

    /// Active cells of one strip
    pub fn strip(&self, strip: usize) -> &[f32] {
        if strip >= self.shape.strips {
            return &[];
        }
        &self.cells[strip][..self.shape.leds]
    }

    /// Iterate over the active strips
    pub fn strips(&self) -> impl Iterator<Item = &[f32]> {
        let leds = self.shape.leds;
        self.cells[..self.shape.strips]
            .iter()
            .map(move |strip| &strip[..leds])
    }

    fn strips_mut(&mut self) -> impl Iterator<Item = &mut [f32; MAX_LEDS]> {
        self.cells[..self.shape.strips].iter_mut()
    }

    /// Iterate `(strip, led, value)` over the active area
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.strips().enumerate().flat_map(|(strip, leds)| {
            leds.iter()
                .enumerate()
                .map(move |(led, value)| (strip, led, *value))
        })
    }

    /// Clamp every active cell into `[0, 1]`
    pub fn clamp(&mut self) {
        let leds = self.shape.leds;
        for strip in self.strips_mut() {
            for cell in &mut strip[..leds] {
                *cell = clamp_unit(*cell);
            }
        }
    }

    /// Number of active cells with a non-zero intensity
    pub fn lit_count(&self) -> usize {
        self.cells().filter(|(_, _, value)| *value > 0.0).count()
    }

    /// Flatten the active area into colors, strip after strip
    ///
    /// Returns the number of colors written; output that does not fit is dropped.
    pub fn shade_into(&self, color: Rgb, out: &mut [Rgb]) -> usize {
        let mut written = 0;
        for ((_, _, value), slot) in self.cells().zip(out.iter_mut()) {
            *slot = shade(color, value);
            written += 1;
        }
        written
    }
}

impl<const MAX_STRIPS: usize, const MAX_LEDS: usize> Canvas
    for IntensityGrid<MAX_STRIPS, MAX_LEDS>
{
    fn shape(&self) -> GridShape {
        self.shape
    }

    fn set(&mut self, strip: usize, led: usize, value: f32) {
        IntensityGrid::set(self, strip, led, value);
    }

    fn raise(&mut self, strip: usize, led: usize, value: f32) {
        IntensityGrid::raise(self, strip, led, value);
    }

    fn fill(&mut self, value: f32) {
        IntensityGrid::fill(self, value);
    }
}
