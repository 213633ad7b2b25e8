// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-play stepper.
//!
//! Auto-play advances the carousel one index per interval while the user is
//! not interacting. The engine owns no clock; the host calls
//! [`AutoPlay::tick`] with elapsed time (any unit, as long as it matches the
//! interval) and executes the returned command by feeding
//! [`Carousel::next`](crate::Carousel::next) or
//! [`Carousel::prev`](crate::Carousel::prev) into its animation system.
//!
//! Pausing resets the accumulated time, so after the user lets go the next
//! step happens a full interval later, not immediately.
//!
//! ## Minimal example
//!
//! ```rust
//! use roundel_carousel::{AutoPlay, AutoPlayCommand};
//!
//! let mut autoplay = AutoPlay::new(1_000.0);
//!
//! assert_eq!(autoplay.tick(600.0), None);
//! assert_eq!(autoplay.tick(600.0), Some(AutoPlayCommand::Next));
//!
//! // A touch pauses the stepper and restarts the interval.
//! autoplay.pause();
//! assert_eq!(autoplay.tick(5_000.0), None);
//! autoplay.resume();
//! assert_eq!(autoplay.tick(999.0), None);
//! assert_eq!(autoplay.tick(1.0), Some(AutoPlayCommand::Next));
//! ```

/// What the host should do when an auto-play interval elapses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AutoPlayCommand {
    /// Advance to the next logical index.
    Next,
    /// Retreat to the previous logical index.
    Prev,
}

/// Interval-driven stepper that advances the carousel while idle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoPlay {
    interval: f64,
    reverse: bool,
    running: bool,
    elapsed: f64,
}

impl AutoPlay {
    /// Creates a running stepper with the given interval.
    ///
    /// The interval is expressed in whatever time unit the host passes to
    /// [`AutoPlay::tick`]. A non-positive interval never fires.
    #[must_use]
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            reverse: false,
            running: true,
            elapsed: 0.0,
        }
    }

    /// Sets the step direction. Reversed auto-play retreats instead of
    /// advancing.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// Returns `true` if the stepper retreats instead of advancing.
    #[must_use]
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// Pauses the stepper and discards the accumulated time.
    ///
    /// Wired to touch-begin and scroll-begin notifications.
    pub fn pause(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    /// Resumes the stepper. The next step fires a full interval later.
    ///
    /// Wired to touch-end and scroll-end notifications.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Returns `true` while the stepper is accumulating time.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the stepper's clock by `elapsed` time units.
    ///
    /// Returns at most one command per call; a tick longer than several
    /// intervals still steps once, carrying no backlog, since skipping
    /// multiple cards at once is never the desired visual result.
    pub fn tick(&mut self, elapsed: f64) -> Option<AutoPlayCommand> {
        if !self.running || !(self.interval > 0.0) || !(elapsed > 0.0) || !elapsed.is_finite() {
            return None;
        }
        self.elapsed += elapsed;
        if self.elapsed < self.interval {
            return None;
        }
        self.elapsed = 0.0;
        Some(if self.reverse {
            AutoPlayCommand::Prev
        } else {
            AutoPlayCommand::Next
        })
    }
}
