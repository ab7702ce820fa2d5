#![no_std]

pub mod color;
pub mod config;
pub mod engine;
pub mod frame_clock;
pub mod grid;
pub mod intent;
pub mod math;
pub mod pattern;

pub use color::{
    ColorParseError, DEFAULT_COLOR, PRESET_COLORS, PresetColor, Rgb, color_or_default,
    parse_hex_color, shade,
};
pub use config::{ConfigChange, Configuration, PROFILE_A, PROFILE_B, Profile};
pub use engine::{PatternEngine, render_frame};
pub use frame_clock::{ClockState, FrameClock, FrameResult, TickToken};
pub use grid::{Canvas, GridShape, IntensityGrid};
pub use intent::{
    ControlIntent, IntentChannel, IntentEffects, IntentProcessor, IntentReceiver, IntentSender,
};
pub use pattern::{PatternGroup, PatternId};

pub use embassy_time::{Duration, Instant};

/// Consumer of computed frames
///
/// Implement this trait to display or transmit the curtain. The clock calls it
/// once per running tick with the fresh grid and the configured color. A cell
/// with intensity zero must show as fully off; see [`shade`].
pub trait GridSink<const MAX_STRIPS: usize, const MAX_LEDS: usize> {
    /// Receive the grid computed for the current tick
    fn publish(&mut self, grid: &IntensityGrid<MAX_STRIPS, MAX_LEDS>, color: Rgb);
}
