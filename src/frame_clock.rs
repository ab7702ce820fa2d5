//! Frame clock and playback control.
//!
//! The clock owns the frame counter and drives the pattern engine. It does not
//! sleep: every tick returns the deadline for the next one and the caller waits
//! however its platform waits (display callback, timer, `Timer::at`).
//!
//! Ticks are authorized by a [`TickToken`]. `stop()` invalidates the live token,
//! so a tick scheduled before the clock was stopped never computes or publishes
//! anything, even if the platform still fires it.

use embassy_time::{Duration, Instant};
#[cfg(feature = "esp32-log")]
use esp_println::println;
use rand::RngCore;

use crate::GridSink;
use crate::config::{ConfigChange, Configuration, Profile};
use crate::engine::PatternEngine;
use crate::grid::IntensityGrid;
use crate::intent::{IntentProcessor, IntentReceiver};

/// Default target frame rate (one tick per display refresh).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Playback state of the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Stopped,
    Running,
}

/// Permission to run one scheduled tick
///
/// Tokens stay valid for the whole running session they were issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken {
    generation: u32,
}

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Token for the next tick.
    pub next: TickToken,
    /// Frame counter the published grid was computed for.
    pub frame: f64,
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Cooperative animation loop around the pattern engine
///
/// # Usage
///
/// ```ignore
/// let mut clock = FrameClock::new(sink, INTENTS.receiver(), PROFILE_A, rng);
/// let mut token = clock.start(Instant::from_millis(now_ms()));
///
/// loop {
///     match clock.tick(token, Instant::from_millis(now_ms())) {
///         Some(result) => {
///             token = result.next;
///             sleep_ms(result.sleep_duration.as_millis());
///         }
///         // Paused: wait for a play intent
///         None => token = wait_for_play(&mut clock),
///     }
/// }
/// ```
pub struct FrameClock<
    'a,
    K,
    R,
    const MAX_STRIPS: usize,
    const MAX_LEDS: usize,
    const INTENT_CHANNEL_SIZE: usize,
> {
    // External dependencies and configuration
    sink: K,
    intents: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
    profile: Profile,
    frame_duration: Duration,

    // Internal state
    config: Configuration,
    frame: f64,
    state: ClockState,
    generation: u32,
    next_frame: Instant,
    grid: IntensityGrid<MAX_STRIPS, MAX_LEDS>,

    // Internal dependencies
    engine: PatternEngine<R>,
}

impl<
    'a,
    K: GridSink<MAX_STRIPS, MAX_LEDS>,
    R: RngCore,
    const MAX_STRIPS: usize,
    const MAX_LEDS: usize,
    const INTENT_CHANNEL_SIZE: usize,
> FrameClock<'a, K, R, MAX_STRIPS, MAX_LEDS, INTENT_CHANNEL_SIZE>
{
    /// Create a stopped clock with the profile's startup configuration.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(
        sink: K,
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        profile: Profile,
        rng: R,
    ) -> Self {
        Self {
            sink,
            intents: IntentProcessor::new(intents),
            profile,
            frame_duration: DEFAULT_FRAME_DURATION,
            config: Configuration::from_profile(&profile),
            frame: 0.0,
            state: ClockState::Stopped,
            generation: 0,
            next_frame: Instant::from_millis(0),
            grid: IntensityGrid::new(),
            engine: PatternEngine::new(rng),
        }
    }

    /// Replace the startup configuration
    #[must_use]
    pub fn with_configuration(mut self, config: Configuration) -> Self {
        self.config = config;
        self
    }

    /// Use a custom frame duration
    #[must_use]
    pub fn with_frame_duration(mut self, frame_duration: Duration) -> Self {
        self.frame_duration = frame_duration;
        self
    }

    /// Begin scheduling ticks
    ///
    /// Returns the live token unchanged if the clock is already running.
    pub fn start(&mut self, now: Instant) -> TickToken {
        if self.state == ClockState::Running {
            return self.live_token();
        }

        self.generation = self.generation.wrapping_add(1);
        self.state = ClockState::Running;
        self.next_frame = now;

        #[cfg(feature = "esp32-log")]
        println!("[clock] start at frame {}", self.frame);

        self.live_token()
    }

    /// Cancel the pending tick
    ///
    /// The frame counter keeps its value; `start` resumes from it.
    pub fn stop(&mut self) {
        if self.state == ClockState::Stopped {
            return;
        }
        self.state = ClockState::Stopped;

        #[cfg(feature = "esp32-log")]
        println!("[clock] stop at frame {}", self.frame);
    }

    pub fn play(&mut self, now: Instant) -> TickToken {
        self.start(now)
    }

    pub fn pause(&mut self) {
        self.stop();
    }

    /// Flip the playback state, returning the token if now running
    pub fn toggle(&mut self, now: Instant) -> Option<TickToken> {
        match self.state {
            ClockState::Running => {
                self.stop();
                None
            }
            ClockState::Stopped => Some(self.start(now)),
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Token of the current running session
    pub fn token(&self) -> Option<TickToken> {
        self.is_running().then(|| self.live_token())
    }

    /// Check whether a tick scheduled with `token` may still run
    pub fn accepts(&self, token: TickToken) -> bool {
        self.is_running() && token.generation == self.generation
    }

    pub fn frame_counter(&self) -> f64 {
        self.frame
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Grid published by the last tick
    pub fn grid(&self) -> &IntensityGrid<MAX_STRIPS, MAX_LEDS> {
        &self.grid
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    /// Apply a configuration change for the next tick
    ///
    /// A strip count change restarts the animation from frame zero when the
    /// profile asks for it.
    pub fn configure(&mut self, change: &ConfigChange) {
        if change.is_empty() {
            return;
        }
        let applied = self.config.apply(change);

        if applied.strips_changed && self.profile.reset_on_reshape {
            self.frame = 0.0;
        }

        #[cfg(feature = "esp32-log")]
        {
            if applied.reshaped {
                println!(
                    "[clock] reshape to {}x{}, frame {}",
                    self.config.strip_count, self.config.led_count, self.frame
                );
            }
            if applied.pattern_changed {
                println!(
                    "[clock] pattern {}",
                    self.config.pattern.map_or("none", |pattern| pattern.as_str())
                );
            }
        }
    }

    /// Drain pending intents without rendering
    ///
    /// Call this while stopped to pick up a play intent. Returns the live token
    /// if the clock is running afterwards.
    pub fn poll(&mut self, now: Instant) -> Option<TickToken> {
        self.process_intents(now);
        self.token()
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Rejects stale tokens and stopped clocks
    /// 2. Applies pending intents (a pause ends here)
    /// 3. Advances the frame counter by `speed / speed_divisor`
    /// 4. Renders the grid and publishes it with the current color
    /// 5. Returns the deadline for the next frame
    pub fn tick(&mut self, token: TickToken, now: Instant) -> Option<FrameResult> {
        if !self.accepts(token) {
            return None;
        }

        self.process_intents(now);
        if !self.accepts(token) {
            return None;
        }

        // Drift correction: if we've fallen too far behind, reset to now
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        self.frame += self.profile.frame_step(self.config.speed);
        self.engine.render(self.frame, &self.config, &mut self.grid);
        self.sink.publish(&self.grid, self.config.color);

        self.next_frame += self.frame_duration;
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Some(FrameResult {
            next: token,
            frame: self.frame,
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    fn live_token(&self) -> TickToken {
        TickToken {
            generation: self.generation,
        }
    }

    fn process_intents(&mut self, now: Instant) {
        let effects = self.intents.process_pending(self.is_running());
        if !effects.has_effects() {
            return;
        }

        self.configure(&effects.change);
        match effects.playback {
            Some(true) => {
                self.start(now);
            }
            Some(false) => self.stop(),
            None => {}
        }
    }
}
