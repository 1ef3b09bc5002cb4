/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use std::time::{Duration, Instant};

/// Delay between the first edit of a burst and the auxiliary features running
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(1);

/// A single-timer debouncer driven by the caller's clock.
///
/// The first change arms it; changes while armed are ignored. [`poll`]
/// fires once the delay has passed since arming, then disarms.
///
/// [`poll`]: Debouncer::poll
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    armed_at: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            armed_at: None,
        }
    }

    /// Record a change. Returns `true` if this change armed the timer.
    pub fn notify(&mut self, now: Instant) -> bool {
        if self.armed_at.is_some() {
            return false;
        }
        self.armed_at = Some(now);
        true
    }

    /// Returns `true` exactly once per burst, when the delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.armed_at {
            Some(armed) if now.saturating_duration_since(armed) >= self.delay => {
                self.armed_at = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.armed_at.is_some()
    }

    /// When the pending run is due
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.armed_at.map(|armed| armed + self.delay)
    }
}
