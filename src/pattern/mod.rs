//! Pattern generators with compile-time known identifiers
//!
//! Every pattern is a pure function of the frame counter and the canvas shape.
//! The two stochastic patterns also draw from an injected random source.
//! Dispatch is an exhaustive match over [`PatternId`].

mod font;
mod glow;
mod motion;
mod nature;
mod text;
mod texture;

pub use glow::{flash, heartbeat, sparkle, twinkle};
pub use motion::{arrow_down, arrow_up, chase, scanner, theater, wave};
pub use nature::{fire, lightning, meteor, rain, reverse, snow, waterfall};
pub use text::{
    DEFAULT_MESSAGE, GLYPH_GAP, GLYPH_PITCH, MAX_MESSAGE_LEN, Message, message, message_height,
    text,
};
pub use texture::{dot, gradient, stripe};

use rand::RngCore;

use crate::grid::Canvas;

const PATTERN_NAME_WATERFALL: &str = "waterfall";
const PATTERN_NAME_REVERSE: &str = "reverse";
const PATTERN_NAME_RAIN: &str = "rain";
const PATTERN_NAME_SNOW: &str = "snow";
const PATTERN_NAME_METEOR: &str = "meteor";
const PATTERN_NAME_LIGHTNING: &str = "lightning";
const PATTERN_NAME_FIRE: &str = "fire";
const PATTERN_NAME_WAVE: &str = "wave";
const PATTERN_NAME_SCANNER: &str = "scanner";
const PATTERN_NAME_CHASE: &str = "chase";
const PATTERN_NAME_THEATER: &str = "theater";
const PATTERN_NAME_ARROW_DOWN: &str = "arrow_down";
const PATTERN_NAME_ARROW_UP: &str = "arrow_up";
const PATTERN_NAME_STRIPE: &str = "stripe";
const PATTERN_NAME_DOT: &str = "dot";
const PATTERN_NAME_GRADIENT: &str = "gradient";
const PATTERN_NAME_SPARKLE: &str = "sparkle";
const PATTERN_NAME_TWINKLE: &str = "twinkle";
const PATTERN_NAME_FLASH: &str = "flash";
const PATTERN_NAME_HEARTBEAT: &str = "heartbeat";
const PATTERN_NAME_TEXT: &str = "text";

const PATTERN_ID_WATERFALL: u8 = 0;
const PATTERN_ID_REVERSE: u8 = 1;
const PATTERN_ID_RAIN: u8 = 2;
const PATTERN_ID_SNOW: u8 = 3;
const PATTERN_ID_METEOR: u8 = 4;
const PATTERN_ID_LIGHTNING: u8 = 5;
const PATTERN_ID_FIRE: u8 = 6;
const PATTERN_ID_WAVE: u8 = 7;
const PATTERN_ID_SCANNER: u8 = 8;
const PATTERN_ID_CHASE: u8 = 9;
const PATTERN_ID_THEATER: u8 = 10;
const PATTERN_ID_ARROW_DOWN: u8 = 11;
const PATTERN_ID_ARROW_UP: u8 = 12;
const PATTERN_ID_STRIPE: u8 = 13;
const PATTERN_ID_DOT: u8 = 14;
const PATTERN_ID_GRADIENT: u8 = 15;
const PATTERN_ID_SPARKLE: u8 = 16;
const PATTERN_ID_TWINKLE: u8 = 17;
const PATTERN_ID_FLASH: u8 = 18;
const PATTERN_ID_HEARTBEAT: u8 = 19;
const PATTERN_ID_TEXT: u8 = 20;

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PatternId {
    Waterfall = PATTERN_ID_WATERFALL,
    Reverse = PATTERN_ID_REVERSE,
    Rain = PATTERN_ID_RAIN,
    Snow = PATTERN_ID_SNOW,
    Meteor = PATTERN_ID_METEOR,
    Lightning = PATTERN_ID_LIGHTNING,
    Fire = PATTERN_ID_FIRE,
    Wave = PATTERN_ID_WAVE,
    Scanner = PATTERN_ID_SCANNER,
    Chase = PATTERN_ID_CHASE,
    Theater = PATTERN_ID_THEATER,
    ArrowDown = PATTERN_ID_ARROW_DOWN,
    ArrowUp = PATTERN_ID_ARROW_UP,
    Stripe = PATTERN_ID_STRIPE,
    Dot = PATTERN_ID_DOT,
    Gradient = PATTERN_ID_GRADIENT,
    Sparkle = PATTERN_ID_SPARKLE,
    Twinkle = PATTERN_ID_TWINKLE,
    Flash = PATTERN_ID_FLASH,
    Heartbeat = PATTERN_ID_HEARTBEAT,
    Text = PATTERN_ID_TEXT,
}

/// Grouping used by the control surface menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternGroup {
    /// Water, weather and fire
    Nature,
    /// Waves and moving markers
    Motion,
    /// Stripes, dots and gradients
    Texture,
    /// Whole-curtain light effects
    Glow,
    /// Bitmap text
    Text,
}

impl PatternGroup {
    pub const ALL: [Self; 5] = [
        Self::Nature,
        Self::Motion,
        Self::Texture,
        Self::Glow,
        Self::Text,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Motion => "motion",
            Self::Texture => "texture",
            Self::Glow => "glow",
            Self::Text => "text",
        }
    }
}

impl PatternId {
    /// Every pattern, in menu order
    pub const ALL: [Self; 21] = [
        Self::Waterfall,
        Self::Reverse,
        Self::Rain,
        Self::Snow,
        Self::Meteor,
        Self::Lightning,
        Self::Fire,
        Self::Wave,
        Self::Scanner,
        Self::Chase,
        Self::Theater,
        Self::ArrowDown,
        Self::ArrowUp,
        Self::Stripe,
        Self::Dot,
        Self::Gradient,
        Self::Sparkle,
        Self::Twinkle,
        Self::Flash,
        Self::Heartbeat,
        Self::Text,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_WATERFALL => Self::Waterfall,
            PATTERN_ID_REVERSE => Self::Reverse,
            PATTERN_ID_RAIN => Self::Rain,
            PATTERN_ID_SNOW => Self::Snow,
            PATTERN_ID_METEOR => Self::Meteor,
            PATTERN_ID_LIGHTNING => Self::Lightning,
            PATTERN_ID_FIRE => Self::Fire,
            PATTERN_ID_WAVE => Self::Wave,
            PATTERN_ID_SCANNER => Self::Scanner,
            PATTERN_ID_CHASE => Self::Chase,
            PATTERN_ID_THEATER => Self::Theater,
            PATTERN_ID_ARROW_DOWN => Self::ArrowDown,
            PATTERN_ID_ARROW_UP => Self::ArrowUp,
            PATTERN_ID_STRIPE => Self::Stripe,
            PATTERN_ID_DOT => Self::Dot,
            PATTERN_ID_GRADIENT => Self::Gradient,
            PATTERN_ID_SPARKLE => Self::Sparkle,
            PATTERN_ID_TWINKLE => Self::Twinkle,
            PATTERN_ID_FLASH => Self::Flash,
            PATTERN_ID_HEARTBEAT => Self::Heartbeat,
            PATTERN_ID_TEXT => Self::Text,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waterfall => PATTERN_NAME_WATERFALL,
            Self::Reverse => PATTERN_NAME_REVERSE,
            Self::Rain => PATTERN_NAME_RAIN,
            Self::Snow => PATTERN_NAME_SNOW,
            Self::Meteor => PATTERN_NAME_METEOR,
            Self::Lightning => PATTERN_NAME_LIGHTNING,
            Self::Fire => PATTERN_NAME_FIRE,
            Self::Wave => PATTERN_NAME_WAVE,
            Self::Scanner => PATTERN_NAME_SCANNER,
            Self::Chase => PATTERN_NAME_CHASE,
            Self::Theater => PATTERN_NAME_THEATER,
            Self::ArrowDown => PATTERN_NAME_ARROW_DOWN,
            Self::ArrowUp => PATTERN_NAME_ARROW_UP,
            Self::Stripe => PATTERN_NAME_STRIPE,
            Self::Dot => PATTERN_NAME_DOT,
            Self::Gradient => PATTERN_NAME_GRADIENT,
            Self::Sparkle => PATTERN_NAME_SPARKLE,
            Self::Twinkle => PATTERN_NAME_TWINKLE,
            Self::Flash => PATTERN_NAME_FLASH,
            Self::Heartbeat => PATTERN_NAME_HEARTBEAT,
            Self::Text => PATTERN_NAME_TEXT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    pub const fn group(self) -> PatternGroup {
        match self {
            Self::Waterfall
            | Self::Reverse
            | Self::Rain
            | Self::Snow
            | Self::Meteor
            | Self::Lightning
            | Self::Fire => PatternGroup::Nature,
            Self::Wave
            | Self::Scanner
            | Self::Chase
            | Self::Theater
            | Self::ArrowDown
            | Self::ArrowUp => PatternGroup::Motion,
            Self::Stripe | Self::Dot | Self::Gradient => PatternGroup::Texture,
            Self::Sparkle | Self::Twinkle | Self::Flash | Self::Heartbeat => PatternGroup::Glow,
            Self::Text => PatternGroup::Text,
        }
    }

    /// Returns if the pattern draws from the random source
    pub const fn is_stochastic(self) -> bool {
        matches!(self, Self::Lightning | Self::Sparkle)
    }

    /// Draw the pattern onto a dark canvas
    pub fn render<C, R>(self, t: f64, canvas: &mut C, rng: &mut R, message: &str)
    where
        C: Canvas,
        R: RngCore + ?Sized,
    {
        match self {
            Self::Waterfall => waterfall(t, canvas),
            Self::Reverse => reverse(t, canvas),
            Self::Rain => rain(t, canvas),
            Self::Snow => snow(t, canvas),
            Self::Meteor => meteor(t, canvas),
            Self::Lightning => lightning(canvas, rng),
            Self::Fire => fire(t, canvas),
            Self::Wave => wave(t, canvas),
            Self::Scanner => scanner(t, canvas),
            Self::Chase => chase(t, canvas),
            Self::Theater => theater(t, canvas),
            Self::ArrowDown => arrow_down(t, canvas),
            Self::ArrowUp => arrow_up(t, canvas),
            Self::Stripe => stripe(t, canvas),
            Self::Dot => dot(t, canvas),
            Self::Gradient => gradient(t, canvas),
            Self::Sparkle => sparkle(canvas, rng),
            Self::Twinkle => twinkle(t, canvas),
            Self::Flash => flash(t, canvas),
            Self::Heartbeat => heartbeat(t, canvas),
            Self::Text => text(t, canvas, message),
        }
    }
}
