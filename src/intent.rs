//! Control intents
//!
//! The control surface never touches the clock directly. It queues intents on
//! a bounded channel built on `critical-section` and `heapless::Deque`, and the
//! clock drains them at the start of the next tick.

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;
use heapless::Deque;

use crate::config::ConfigChange;

/// Request from the control surface
#[derive(Debug, Clone, PartialEq)]
pub enum ControlIntent {
    /// Start or resume the animation
    Play,
    /// Freeze the animation
    Pause,
    /// Flip between playing and paused
    Toggle,
    /// Change the configuration from the next tick on
    Configure(ConfigChange),
}

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, PartialEq)]
pub struct TrySendError(pub ControlIntent);

impl fmt::Display for TrySendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "intent channel is full, dropped {:?}", self.0)
    }
}

impl core::error::Error for TrySendError {}

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

impl fmt::Display for TryReceiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("intent channel is empty")
    }
}

impl core::error::Error for TryReceiveError {}

/// Bounded intent queue shared between the control surface and the clock
pub struct IntentChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<ControlIntent, SIZE>>>,
}

impl<const SIZE: usize> Default for IntentChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> IntentChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { channel: self }
    }

    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { channel: self }
    }

    /// Queue an intent, handing it back if the queue is full
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .push_back(intent)
                .map_err(TrySendError)
        })
    }

    /// Take the oldest queued intent
    pub fn try_receive(&self) -> Result<ControlIntent, TryReceiveError> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .pop_front()
                .ok_or(TryReceiveError)
        })
    }

    /// Number of queued intents
    pub fn pending(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }
}

/// Sending half handed to the control surface
#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError> {
        self.channel.try_send(intent)
    }

    pub fn play(&self) -> Result<(), TrySendError> {
        self.try_send(ControlIntent::Play)
    }

    pub fn pause(&self) -> Result<(), TrySendError> {
        self.try_send(ControlIntent::Pause)
    }

    pub fn toggle(&self) -> Result<(), TrySendError> {
        self.try_send(ControlIntent::Toggle)
    }

    pub fn configure(&self, change: ConfigChange) -> Result<(), TrySendError> {
        self.try_send(ControlIntent::Configure(change))
    }
}

/// Receiving half owned by the clock
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<ControlIntent, TryReceiveError> {
        self.channel.try_receive()
    }
}

/// Net result of draining the channel once
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntentEffects {
    /// Requested running state, if any playback intent arrived
    pub playback: Option<bool>,
    /// All configuration changes folded together
    pub change: ConfigChange,
}

impl IntentEffects {
    /// Check if anything needs to be applied
    pub const fn has_effects(&self) -> bool {
        self.playback.is_some() || !self.change.is_empty()
    }
}

/// Folds queued intents into a single set of effects
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Drain all pending intents (non-blocking)
    ///
    /// Playback intents are resolved in order against `running`, so
    /// `Toggle, Toggle` is a no-op. Configuration changes are merged; later
    /// fields win.
    pub fn process_pending(&mut self, running: bool) -> IntentEffects {
        let mut effects = IntentEffects::default();
        let mut desired = running;

        while let Ok(intent) = self.intents.try_receive() {
            match intent {
                ControlIntent::Play => {
                    desired = true;
                    effects.playback = Some(desired);
                }
                ControlIntent::Pause => {
                    desired = false;
                    effects.playback = Some(desired);
                }
                ControlIntent::Toggle => {
                    desired = !desired;
                    effects.playback = Some(desired);
                }
                ControlIntent::Configure(change) => effects.change.merge(change),
            }
        }

        effects
    }
}
