//! Submission cool-down: one submission per fixed window.
//!
//! This is an advisory, client-side gate. Nothing on the server enforces it,
//! so a second client or a direct API call is not limited by it.

use std::time::Duration;

use crate::error::CooldownError;
use crate::ports::{Clock, CooldownStore, StoreError};

/// Default cool-down window.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Observable gate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownState {
    /// Submission allowed.
    Idle,
    /// Submission blocked for `remaining_secs` more seconds.
    CoolingDown { remaining_secs: u64 },
}

/// Pure cool-down arithmetic over epoch-millisecond timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cooldown {
    window: Duration,
    last_post_ms: Option<i64>,
}

impl Default for Cooldown {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_post_ms: None,
        }
    }

    pub fn with_last_post(mut self, last_post_ms: Option<i64>) -> Self {
        self.last_post_ms = last_post_ms;
        self
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn last_post_ms(&self) -> Option<i64> {
        self.last_post_ms
    }

    /// Mark a successful submission at `now_ms`.
    pub fn record(&mut self, now_ms: i64) {
        self.last_post_ms = Some(now_ms);
    }

    /// Time left before the next submission is allowed.
    pub fn remaining(&self, now_ms: i64) -> Duration {
        let Some(last) = self.last_post_ms else {
            return Duration::ZERO;
        };

        let elapsed = now_ms.saturating_sub(last);
        if elapsed < 0 {
            // Stored time is ahead of the clock.
            return self.window;
        }

        self.window
            .saturating_sub(Duration::from_millis(elapsed as u64))
    }

    /// Remaining time rounded up to whole seconds.
    pub fn remaining_secs(&self, now_ms: i64) -> u64 {
        self.remaining(now_ms).as_millis().div_ceil(1000) as u64
    }

    pub fn state(&self, now_ms: i64) -> CooldownState {
        match self.remaining_secs(now_ms) {
            0 => CooldownState::Idle,
            remaining_secs => CooldownState::CoolingDown { remaining_secs },
        }
    }

    pub fn check(&self, now_ms: i64) -> Result<(), CooldownError> {
        match self.state(now_ms) {
            CooldownState::Idle => Ok(()),
            CooldownState::CoolingDown { remaining_secs } => {
                Err(CooldownError::Active { remaining_secs })
            }
        }
    }
}

/// [`Cooldown`] bound to a clock and a durable store.
pub struct CooldownGate<C, S> {
    clock: C,
    store: S,
    cooldown: Cooldown,
}

impl<C: Clock, S: CooldownStore> CooldownGate<C, S> {
    pub fn new(clock: C, store: S, window: Duration) -> Self {
        Self {
            clock,
            store,
            cooldown: Cooldown::new(window),
        }
    }

    /// Reload the last submission time from the store.
    pub fn restore(&mut self) -> Result<CooldownState, StoreError> {
        self.cooldown.last_post_ms = self.store.load()?;
        Ok(self.state())
    }

    pub fn state(&self) -> CooldownState {
        self.cooldown.state(self.clock.now_ms())
    }

    pub fn remaining_secs(&self) -> u64 {
        self.cooldown.remaining_secs(self.clock.now_ms())
    }

    pub fn check(&self) -> Result<(), CooldownError> {
        self.cooldown.check(self.clock.now_ms())
    }

    /// Persist `now` as the last submission time and start a new window.
    pub fn record_success(&mut self) -> Result<(), StoreError> {
        let now = self.clock.now_ms();
        self.store.save(now)?;
        self.cooldown.record(now);
        Ok(())
    }

    pub fn cooldown(&self) -> &Cooldown {
        &self.cooldown
    }
}
