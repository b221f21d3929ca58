//! Held-key tracking for terminal environments.
//!
//! Terminals report a held key as a press followed by auto-repeat presses, and
//! many never report the release at all. The tracker turns that stream into one
//! key-down per hold and, until a real release has been seen, synthesizes the
//! key-up once a key stops repeating.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use tracing::debug;

use crate::types::{InputEvent, Key};

/// Most keys tracked at once; further simultaneous keys pass through untracked.
pub const MAX_HELD_KEYS: usize = 8;

#[derive(Debug, Clone)]
pub struct KeyHoldTracker {
    held: ArrayVec<(Key, Instant), MAX_HELD_KEYS>,
    release_timeout: Duration,
    saw_release: bool,
}

impl KeyHoldTracker {
    pub fn new(release_timeout: Duration) -> Self {
        Self {
            held: ArrayVec::new(),
            release_timeout,
            saw_release: false,
        }
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    /// `true` until the terminal delivers its first real key release.
    pub fn emulating_release(&self) -> bool {
        !self.saw_release
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.iter().any(|(k, _)| *k == key)
    }

    /// Filter one event. Returns `None` for repeats of an already-held key.
    pub fn filter(&mut self, event: InputEvent, now: Instant) -> Option<InputEvent> {
        match event {
            InputEvent::KeyDown(key) => {
                if let Some(entry) = self.held.iter_mut().find(|(k, _)| *k == key) {
                    entry.1 = now;
                    return None;
                }
                if self.held.try_push((key, now)).is_err() {
                    debug!(?key, held = self.held.len(), "held-key set full; key not tracked");
                }
                Some(event)
            }
            InputEvent::KeyUp(key) => {
                self.saw_release = true;
                self.held.retain(|(k, _)| *k != key);
                Some(event)
            }
            InputEvent::Quit | InputEvent::Other => Some(event),
        }
    }

    /// Synthesized key-ups for keys that stopped repeating.
    ///
    /// Always empty once the terminal has proven it reports releases.
    pub fn expire(&mut self, now: Instant) -> ArrayVec<InputEvent, MAX_HELD_KEYS> {
        let mut released = ArrayVec::new();
        if self.saw_release {
            return released;
        }

        let timeout = self.release_timeout;
        self.held.retain(|(key, last)| {
            if now.saturating_duration_since(*last) > timeout {
                released.push(InputEvent::KeyUp(*key));
                false
            } else {
                true
            }
        });
        released
    }
}
