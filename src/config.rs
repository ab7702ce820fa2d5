//! Curtain configuration and deployment profiles

use crate::color::{Rgb, rgb_from_u32};
use crate::math::{cell_index, real};
use crate::pattern::{DEFAULT_MESSAGE, Message, PatternId, message};

/// Deployment constants that differ between installations
///
/// Each profile pairs an LED count with a speed scale. A profile's default speed
/// is chosen so the frame counter advances by the same amount per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    /// LEDs per strip
    pub led_count: usize,
    /// Divisor applied to `speed` on every tick
    pub speed_divisor: f32,
    /// Speed selected at startup
    pub default_speed: f32,
    /// Upper bound offered by the control surface
    pub max_speed: f32,
    /// Restart the animation from frame zero when the strip count changes
    pub reset_on_reshape: bool,
}

/// 2 m strips with 5 cm LED pitch, slider speed 0-30
pub const PROFILE_A: Profile = Profile {
    led_count: 40,
    speed_divisor: 100.0,
    default_speed: 15.0,
    max_speed: 30.0,
    reset_on_reshape: false,
};

/// 60 LED strips, slider speed 0-3
pub const PROFILE_B: Profile = Profile {
    led_count: 60,
    speed_divisor: 10.0,
    default_speed: 1.5,
    max_speed: 3.0,
    reset_on_reshape: true,
};

impl Default for Profile {
    fn default() -> Self {
        PROFILE_A
    }
}

impl Profile {
    /// Frame counter advance for one tick at `speed`
    ///
    /// Negative and non-finite speeds freeze the counter.
    pub fn frame_step(&self, speed: f32) -> f64 {
        if !speed.is_finite() || speed <= 0.0 || self.speed_divisor <= 0.0 {
            return 0.0;
        }
        f64::from(speed) / f64::from(self.speed_divisor)
    }
}

/// Default strip count of a new curtain
pub const DEFAULT_STRIP_COUNT: usize = 5;

/// Upper bound offered by the control surface
pub const MAX_STRIP_COUNT: usize = 15;

/// Default curtain color (white)
pub const DEFAULT_CURTAIN_COLOR: Rgb = rgb_from_u32(0xFF_FF_FF);

/// Default hanging height in meters
pub const DEFAULT_HEIGHT_M: f32 = 2.0;

/// Height range offered by the control surface, in meters
pub const MIN_HEIGHT_M: f32 = 1.0;
pub const MAX_HEIGHT_M: f32 = 10.0;

/// Snapshot of everything a frame computation reads
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub strip_count: usize,
    pub led_count: usize,
    /// Selected pattern; `None` renders a dark curtain
    pub pattern: Option<PatternId>,
    pub speed: f32,
    pub color: Rgb,
    /// Message for [`PatternId::Text`]
    pub message: Message,
    /// Hanging height of the strips; informational, patterns ignore it
    pub height_m: f32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::from_profile(&PROFILE_A)
    }
}

impl Configuration {
    /// Startup configuration for a profile
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            strip_count: DEFAULT_STRIP_COUNT,
            led_count: profile.led_count,
            pattern: Some(PatternId::Waterfall),
            speed: profile.default_speed,
            color: DEFAULT_CURTAIN_COLOR,
            message: message(DEFAULT_MESSAGE),
            height_m: DEFAULT_HEIGHT_M,
        }
    }

    /// Select a pattern by name; unknown names select the dark pattern
    pub fn set_pattern_name(&mut self, name: &str) {
        self.pattern = PatternId::parse_from_str(name);
    }

    /// Total LEDs across the curtain
    pub const fn total_led_count(&self) -> usize {
        self.strip_count * self.led_count
    }

    /// Whole LEDs per meter along one strip
    ///
    /// A zero, negative or non-finite height gives 0.
    pub fn leds_per_meter(&self) -> usize {
        if !self.height_m.is_finite() || self.height_m <= 0.0 {
            return 0;
        }
        cell_index(real(self.led_count) / f64::from(self.height_m))
    }

    /// Apply a change and report what it affected
    pub fn apply(&mut self, change: &ConfigChange) -> AppliedChange {
        let mut applied = AppliedChange::default();

        if let Some(strip_count) = change.strip_count {
            applied.strips_changed = strip_count != self.strip_count;
            applied.reshaped |= applied.strips_changed;
            self.strip_count = strip_count;
        }
        if let Some(led_count) = change.led_count {
            applied.reshaped |= led_count != self.led_count;
            self.led_count = led_count;
        }
        if let Some(pattern) = change.pattern {
            applied.pattern_changed = pattern != self.pattern;
            self.pattern = pattern;
        }
        if let Some(speed) = change.speed {
            self.speed = speed;
        }
        if let Some(color) = change.color {
            self.color = color;
        }
        if let Some(message) = &change.message {
            self.message.clone_from(message);
        }
        if let Some(height_m) = change.height_m {
            self.height_m = height_m;
        }

        applied
    }
}

/// What a [`ConfigChange`] actually changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedChange {
    /// Strip count differs from before
    pub strips_changed: bool,
    /// Strip or LED count differs from before
    pub reshaped: bool,
    /// Selected pattern differs from before
    pub pattern_changed: bool,
}

/// Partial update of a [`Configuration`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigChange {
    pub strip_count: Option<usize>,
    pub led_count: Option<usize>,
    /// `Some(None)` selects the dark pattern
    pub pattern: Option<Option<PatternId>>,
    pub speed: Option<f32>,
    pub color: Option<Rgb>,
    pub message: Option<Message>,
    pub height_m: Option<f32>,
}

impl ConfigChange {
    #[must_use]
    pub fn with_strip_count(mut self, strip_count: usize) -> Self {
        self.strip_count = Some(strip_count);
        self
    }

    #[must_use]
    pub fn with_led_count(mut self, led_count: usize) -> Self {
        self.led_count = Some(led_count);
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: Option<PatternId>) -> Self {
        self.pattern = Some(pattern);
        self
    }

    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the text message, truncated to the message capacity
    #[must_use]
    pub fn with_message(mut self, text: &str) -> Self {
        self.message = Some(message(text));
        self
    }

    #[must_use]
    pub fn with_height(mut self, height_m: f32) -> Self {
        self.height_m = Some(height_m);
        self
    }

    /// Check if the change carries any field
    pub const fn is_empty(&self) -> bool {
        self.strip_count.is_none()
            && self.led_count.is_none()
            && self.pattern.is_none()
            && self.speed.is_none()
            && self.color.is_none()
            && self.message.is_none()
            && self.height_m.is_none()
    }

    /// Fold a later change into this one; later fields win
    pub fn merge(&mut self, later: ConfigChange) {
        if later.strip_count.is_some() {
            self.strip_count = later.strip_count;
        }
        if later.led_count.is_some() {
            self.led_count = later.led_count;
        }
        if later.pattern.is_some() {
            self.pattern = later.pattern;
        }
        if later.speed.is_some() {
            self.speed = later.speed;
        }
        if later.color.is_some() {
            self.color = later.color;
        }
        if later.message.is_some() {
            self.message = later.message;
        }
        if later.height_m.is_some() {
            self.height_m = later.height_m;
        }
    }
}
