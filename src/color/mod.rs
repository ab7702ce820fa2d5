mod hex;

pub use hex::{ColorParseError, color_or_default, parse_hex_color};
use smart_leds::RGB8;

use crate::math::{intensity8, scale8};

pub type Rgb = RGB8;

/// Color used when a color string cannot be parsed
pub const DEFAULT_COLOR: Rgb = rgb_from_u32(0x00_FF_FF);

/// Named color shown in the control surface palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetColor {
    pub name: &'static str,
    pub value: Rgb,
}

/// Create a palette from a list of `(name, 0xRRGGBB)` pairs
macro_rules! preset_palette {
    ($(($name:expr, $color:expr)),* $(,)?) => {
        [
            $(PresetColor { name: $name, value: rgb_from_u32($color) }),*
        ]
    };
}

#[allow(clippy::unreadable_literal)]
pub const PRESET_COLORS: [PresetColor; 7] = preset_palette![
    ("white", 0xFFFFFF),
    ("cyan", 0x00FFFF),
    ("magenta", 0xFF0080),
    ("green", 0x00FF00),
    ("yellow", 0xFFFF00),
    ("orange", 0xFF8800),
    ("purple", 0x8800FF),
];

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Scale a color by a cell intensity
///
/// Intensity is clamped to `[0, 1]`; an intensity of zero is always black.
#[inline]
pub fn shade(color: Rgb, intensity: f32) -> Rgb {
    let scale = intensity8(intensity);
    if scale == 0 {
        return Rgb::default();
    }
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}
