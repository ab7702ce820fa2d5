//! Scrolling bitmap text
//!
//! Glyphs are stacked along the strips, one glyph row per LED, and glyph
//! columns map onto strips centered on the curtain. The message enters from the
//! first LED and scrolls towards the end of the strips.

use heapless::{String, Vec};

use super::font::{GLYPH_HEIGHT, GLYPH_WIDTH, Glyph, glyph, is_set};
use crate::grid::Canvas;
use crate::math::step;

/// Maximum message length in bytes
pub const MAX_MESSAGE_LEN: usize = 16;

/// Message shown by the text pattern
pub type Message = String<MAX_MESSAGE_LEN>;

/// Message used when none is configured
pub const DEFAULT_MESSAGE: &str = "LED";

/// Blank rows after each glyph
pub const GLYPH_GAP: usize = 3;

/// Rows one glyph occupies including its gap
pub const GLYPH_PITCH: usize = GLYPH_HEIGHT + GLYPH_GAP;

/// Frames per one-row scroll step
const SCROLL_STEP: f64 = 3.0;

/// Build a message, truncating at a character boundary if it is too long
pub fn message(text: &str) -> Message {
    let mut message = Message::new();
    for c in text.chars() {
        if message.push(c).is_err() {
            break;
        }
    }
    message
}

/// Height of the rendered message in rows
pub fn message_height(message: &str) -> usize {
    message.chars().take(MAX_MESSAGE_LEN).count() * GLYPH_PITCH
}

/// Draw the scrolling message
pub fn text(t: f64, canvas: &mut impl Canvas, message: &str) {
    let shape = canvas.shape();
    if shape.is_empty() {
        return;
    }

    let glyphs: Vec<Glyph, MAX_MESSAGE_LEN> =
        message.chars().take(MAX_MESSAGE_LEN).map(glyph).collect();
    let height = glyphs.len() * GLYPH_PITCH;
    if height == 0 {
        return;
    }

    let period = shape.leds + height;
    let scroll = step(t, SCROLL_STEP, period);

    for strip in 0..shape.strips {
        let Some(column) = glyph_column(strip, shape.strips) else {
            continue;
        };
        for i in 0..shape.leds {
            // Row of the virtual tape under this LED; the message starts just
            // above the first LED when the scroll is zero.
            let row = (i + height + period - scroll) % period;
            if row >= height {
                continue;
            }
            let glyph = &glyphs[row / GLYPH_PITCH];
            if is_set(glyph, column, row % GLYPH_PITCH) {
                canvas.set(strip, i, 1.0);
            }
        }
    }
}

/// Glyph column shown on a strip, centering the glyph on the curtain
fn glyph_column(strip: usize, strips: usize) -> Option<usize> {
    let column = if strips >= GLYPH_WIDTH {
        strip.checked_sub((strips - GLYPH_WIDTH) / 2)?
    } else {
        strip + (GLYPH_WIDTH - strips) / 2
    };
    (column < GLYPH_WIDTH).then_some(column)
}
