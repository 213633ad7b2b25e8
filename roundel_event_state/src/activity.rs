// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer activity tracking: touch and scroll begin/end notifications.
//!
//! The gesture collaborator reports discrete "touch begin/end" and "scroll
//! begin/end" events. [`PointerActivity`] folds them into two booleans so
//! higher layers (most importantly auto-play pausing) can ask a single
//! question: is the user interacting right now?
//!
//! The begin/end methods return `true` only on the edge, when the flag
//! actually changed. Duplicate notifications are normal (a gesture system
//! may re-enter its began phase) and collapse into no-ops.

/// Tracks whether a touch or scroll interaction is in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PointerActivity {
    touching: bool,
    scrolling: bool,
}

impl PointerActivity {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a touch-begin notification. Returns `true` if a touch newly
    /// began.
    pub fn touch_begin(&mut self) -> bool {
        let changed = !self.touching;
        self.touching = true;
        changed
    }

    /// Records a touch-end notification. Returns `true` if a touch actually
    /// ended.
    pub fn touch_end(&mut self) -> bool {
        let changed = self.touching;
        self.touching = false;
        changed
    }

    /// Records a scroll-begin notification. Returns `true` if a scroll newly
    /// began.
    pub fn scroll_begin(&mut self) -> bool {
        let changed = !self.scrolling;
        self.scrolling = true;
        changed
    }

    /// Records a scroll-end notification. Returns `true` if a scroll
    /// actually ended.
    pub fn scroll_end(&mut self) -> bool {
        let changed = self.scrolling;
        self.scrolling = false;
        changed
    }

    /// Returns `true` while a touch is down.
    #[must_use]
    pub fn is_touching(self) -> bool {
        self.touching
    }

    /// Returns `true` while a scroll gesture or animation is running.
    #[must_use]
    pub fn is_scrolling(self) -> bool {
        self.scrolling
    }

    /// Returns `true` when neither a touch nor a scroll is in progress.
    #[must_use]
    pub fn is_idle(self) -> bool {
        !self.touching && !self.scrolling
    }
}
