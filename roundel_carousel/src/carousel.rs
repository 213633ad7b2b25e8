// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller.

use roundel_cell::{SubscriberId, ValueCell};
use roundel_event_state::activity::PointerActivity;
use roundel_event_state::card::CardStackState;
use roundel_index::{
    Scalar, VisibleWindow, animation_progress, compute_visible_window, current_index,
    resolve_real_index, slot_offset, wrap_offset,
};

use crate::config::CarouselConfig;

/// The offset a scroll command wants the animation collaborator to reach.
///
/// The engine computes targets; the host owns the time-based interpolation
/// and commits the settled value back via [`Carousel::set_offset`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTarget {
    /// Raw (unwrapped) offset to animate the strip to.
    pub offset: f64,
    /// Logical index the target lands on.
    pub index: usize,
}

/// Headless controller for a looping card carousel.
///
/// `Carousel` owns the committed scroll offset (a [`ValueCell`], so
/// downstream consumers can observe every commit synchronously) plus the
/// interaction state, and derives everything else on demand: the current
/// logical index, the visibility window, and per-slot animation values. It
/// renders nothing itself; hosts query it whenever the offset or the data
/// changes.
///
/// The committed offset is the only scroll state. Gesture deltas and
/// animation frames both funnel into [`Carousel::set_offset`], and every
/// query made afterwards observes that value; there is no internal cache to
/// go stale.
#[derive(Debug)]
pub struct Carousel {
    config: CarouselConfig,
    offset: ValueCell<f64>,
    cards: CardStackState,
    activity: PointerActivity,
}

impl Carousel {
    /// Creates a carousel parked on the configured default index.
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        let offset = if config.is_renderable() {
            let start = config.default_index.min(config.data_len() - 1);
            start as f64 * config.slot_extent
        } else {
            0.0
        };
        Self {
            config,
            offset: ValueCell::new(offset),
            cards: CardStackState::new(),
            activity: PointerActivity::new(),
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Replaces the item count after the upstream collection was swapped.
    ///
    /// The committed offset is left untouched; all derived values fold it
    /// into the new strip on the next query. A shrink to zero renders
    /// nothing and exposes the degenerate window.
    pub fn set_raw_len(&mut self, raw_len: usize) {
        self.config.raw_len = raw_len;
    }

    // -------------------------------------------------------------------------
    // Offset cell
    // -------------------------------------------------------------------------

    /// Returns the committed raw offset. Unbounded while looping.
    #[must_use]
    pub fn offset(&self) -> f64 {
        *self.offset.get()
    }

    /// Returns the committed offset folded into one strip period.
    #[must_use]
    pub fn wrapped_offset(&self) -> f64 {
        wrap_offset(
            self.offset(),
            self.config.slot_extent,
            self.config.data_len(),
            self.config.looping,
        )
    }

    /// Commits a new offset and notifies offset subscribers synchronously.
    ///
    /// This is the single write path for both gesture deltas and settled
    /// animation values.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset.set(offset);
    }

    /// Returns the generation of the committed offset.
    #[must_use]
    pub fn offset_generation(&self) -> u64 {
        self.offset.generation()
    }

    /// Registers an observer invoked on every committed offset.
    pub fn subscribe_offset(&mut self, notify: impl FnMut(&f64) + 'static) -> SubscriberId {
        self.offset.subscribe(notify)
    }

    /// Removes an offset observer.
    pub fn unsubscribe_offset(&mut self, id: SubscriberId) -> bool {
        self.offset.unsubscribe(id)
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Returns the settled logical index, in `[0, raw_len)`.
    ///
    /// `0` when the carousel is not renderable.
    #[must_use]
    pub fn current_index(&self) -> usize {
        if !self.config.is_renderable() {
            return 0;
        }
        let slot = current_index(
            self.wrapped_offset(),
            self.config.slot_extent,
            self.config.data_len(),
            self.config.looping,
        );
        // The strip length is a multiple of `raw_len`, so folding the slot
        // index is exact regardless of padding.
        resolve_real_index(slot as isize, self.config.raw_len, true) as usize
    }

    /// Returns the slots currently eligible for real rendering.
    #[must_use]
    pub fn visible_window(&self) -> VisibleWindow {
        if self.config.raw_len == 0 {
            return VisibleWindow::EMPTY;
        }
        compute_visible_window(
            self.wrapped_offset(),
            self.config.slot_extent,
            self.config.data_len(),
            self.config.window_radius,
            self.config.looping,
        )
    }

    /// Returns `true` if `slot` should render real content rather than a
    /// placeholder.
    #[must_use]
    pub fn should_render(&self, slot: isize) -> bool {
        self.visible_window().contains(slot)
    }

    /// Resolves a slot index to its logical item index.
    ///
    /// Returns `None` when the collection is empty or the slot falls outside
    /// the logical range (possible only without auto-fill).
    #[must_use]
    pub fn real_index(&self, slot: isize) -> Option<usize> {
        if self.config.raw_len == 0 {
            return None;
        }
        let real = resolve_real_index(slot, self.config.raw_len, self.config.auto_fill);
        if (0..self.config.raw_len as isize).contains(&real) {
            Some(real as usize)
        } else {
            None
        }
    }

    /// Continuous scroll progress in slot units (`offset / slot_extent`).
    #[must_use]
    pub fn animation_progress(&self) -> f64 {
        animation_progress(self.wrapped_offset(), self.config.slot_extent)
    }

    /// Signed distance from `slot`'s rest position to the current offset,
    /// in host units. Looping folds the distance across the seam.
    ///
    /// `0.0` for degenerate configurations and non-finite offsets.
    #[must_use]
    pub fn slot_offset(&self, slot: isize) -> f64 {
        let extent = self.config.slot_extent;
        if !(extent > 0.0) || !extent.is_finite() || !self.wrapped_offset().is_finite() {
            return 0.0;
        }
        slot_offset(
            slot,
            self.wrapped_offset(),
            extent,
            self.config.data_len(),
            self.config.looping,
        )
    }

    /// Per-slot interpolation value: the slot's signed distance from the
    /// current offset, in slot units.
    ///
    /// `0.0` means the slot is centered; `-1.0`/`1.0` are its immediate
    /// neighbors. Looping folds the distance across the seam.
    #[must_use]
    pub fn slot_progress(&self, slot: isize) -> f64 {
        let extent = self.config.slot_extent;
        if !(extent > 0.0) || !extent.is_finite() {
            return 0.0;
        }
        self.slot_offset(slot) / extent
    }

    // -------------------------------------------------------------------------
    // Imperative scrolling
    // -------------------------------------------------------------------------

    /// Computes the target for advancing one logical index.
    ///
    /// Returns `None` when the carousel is not renderable or the strip edge
    /// blocks the move (non-looping carousels have no neighbor past the last
    /// item).
    #[must_use]
    pub fn next(&self) -> Option<ScrollTarget> {
        self.step(1)
    }

    /// Computes the target for retreating one logical index.
    ///
    /// `None` under the same conditions as [`Carousel::next`].
    #[must_use]
    pub fn prev(&self) -> Option<ScrollTarget> {
        self.step(-1)
    }

    fn step(&self, direction: isize) -> Option<ScrollTarget> {
        if !self.config.is_renderable() || !self.offset().is_finite() {
            return None;
        }
        let extent = self.config.slot_extent;
        let data_len = self.config.data_len() as isize;
        // Anchor on the wrapped offset so the step agrees with
        // `current_index` about which slot is nearest, then express the
        // target in raw offset space to keep looping scrolls unbounded.
        let wrapped = self.wrapped_offset();
        let nearest = (wrapped / extent).round_to_isize();
        let target_slot = if self.config.looping {
            nearest + direction
        } else {
            (nearest + direction).clamp(0, data_len - 1)
        };
        let snap_correction = nearest as f64 * extent - wrapped;
        let target = self.offset() + snap_correction + (target_slot - nearest) as f64 * extent;
        if target == self.offset() {
            return None;
        }
        let index = resolve_real_index(target_slot, self.config.raw_len, true).unsigned_abs();
        Some(ScrollTarget {
            offset: target,
            index,
        })
    }

    /// Computes the target for jumping to an arbitrary logical index.
    ///
    /// The index is clamped into the collection. Looping carousels take the
    /// shortest route, which may cross the wraparound seam in either
    /// direction; non-looping carousels scroll directly. Returns `None` when
    /// the carousel is not renderable.
    #[must_use]
    pub fn scroll_to(&self, index: usize) -> Option<ScrollTarget> {
        if !self.config.is_renderable() || !self.offset().is_finite() {
            return None;
        }
        let extent = self.config.slot_extent;
        let index = index.min(self.config.raw_len - 1);
        let offset = if self.config.looping {
            let n = self.config.raw_len as isize;
            let wrapped = self.wrapped_offset();
            let nearest = (wrapped / extent).round_to_isize();
            let current = nearest.rem_euclid(n);
            let forward = (index as isize - current).rem_euclid(n);
            let backward = forward - n;
            // Prefer the forward direction on ties.
            let delta = if forward <= -backward { forward } else { backward };
            let snap_correction = nearest as f64 * extent - wrapped;
            self.offset() + snap_correction + delta as f64 * extent
        } else {
            index as f64 * extent
        };
        Some(ScrollTarget { offset, index })
    }

    // -------------------------------------------------------------------------
    // Interaction state
    // -------------------------------------------------------------------------

    /// Returns the card-stack state machine.
    #[must_use]
    pub fn cards(&self) -> &CardStackState {
        &self.cards
    }

    /// Returns the card-stack state machine mutably.
    pub fn cards_mut(&mut self) -> &mut CardStackState {
        &mut self.cards
    }

    /// Returns the pointer activity tracker.
    #[must_use]
    pub fn activity(&self) -> PointerActivity {
        self.activity
    }

    /// Records a touch-begin notification. Returns `true` on the edge.
    pub fn touch_begin(&mut self) -> bool {
        self.activity.touch_begin()
    }

    /// Records a touch-end notification. Returns `true` on the edge.
    pub fn touch_end(&mut self) -> bool {
        self.activity.touch_end()
    }

    /// Records a scroll-begin notification. Returns `true` on the edge.
    pub fn scroll_begin(&mut self) -> bool {
        self.activity.scroll_begin()
    }

    /// Records a scroll-end notification. Returns `true` on the edge.
    pub fn scroll_end(&mut self) -> bool {
        self.activity.scroll_end()
    }

    /// Snapshot of the derived state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CarouselDebugInfo {
        CarouselDebugInfo {
            offset: self.offset(),
            wrapped_offset: self.wrapped_offset(),
            offset_generation: self.offset_generation(),
            current_index: self.current_index(),
            visible_window: self.visible_window(),
        }
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

/// Debug snapshot of a [`Carousel`]'s derived state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselDebugInfo {
    /// Committed raw offset.
    pub offset: f64,
    /// Offset folded into one strip period.
    pub wrapped_offset: f64,
    /// Generation of the committed offset.
    pub offset_generation: u64,
    /// Settled logical index.
    pub current_index: usize,
    /// Slots eligible for real rendering.
    pub visible_window: VisibleWindow,
}
