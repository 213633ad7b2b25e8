// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility window computation.
//!
//! A carousel materializes only the slots near the current offset; everything
//! else renders as a placeholder. The window is expressed as two closed
//! integer ranges over slot indices: one covering the slots at or below the
//! center slot, one covering the slots above it. Splitting the window this
//! way lets looping carousels hand out raw (possibly negative) slot indices
//! on the near side of the seam and leave the logical resolution to
//! [`resolve_real_index`](crate::resolve_real_index).

use crate::scalar::Scalar;

/// A closed, contiguous range of slot indices.
///
/// The range is empty when `start > end`; [`SlotRange::EMPTY`] is the
/// canonical empty value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotRange {
    /// First slot in the range.
    pub start: isize,
    /// Last slot in the range (inclusive).
    pub end: isize,
}

impl SlotRange {
    /// The canonical empty range.
    pub const EMPTY: Self = Self { start: 0, end: -1 };

    /// Returns `true` if the range contains no slots.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start > self.end
    }

    /// Returns the number of slots in the range.
    #[must_use]
    pub const fn len(self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    /// Returns `true` if `slot` lies inside the range.
    #[must_use]
    pub const fn contains(self, slot: isize) -> bool {
        self.start <= slot && slot <= self.end
    }

    /// Iterates over the slots in the range, in increasing order.
    #[must_use]
    pub const fn iter(self) -> core::ops::RangeInclusive<isize> {
        self.start..=self.end
    }

    /// Intersects the range with `[lo, hi]`, yielding [`Self::EMPTY`] when
    /// nothing remains.
    #[must_use]
    pub fn clamp_to(self, lo: isize, hi: isize) -> Self {
        let start = self.start.max(lo);
        let end = self.end.min(hi);
        if start > end { Self::EMPTY } else { Self { start, end } }
    }
}

/// The set of slots eligible for real (non-placeholder) rendering.
///
/// `negative` covers the slots at or below the center slot, `positive` the
/// slots above it. The two ranges never overlap and their union holds at
/// most `2 * window_radius + 1` slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleWindow {
    /// Slots at or below the center slot.
    pub negative: SlotRange,
    /// Slots above the center slot.
    pub positive: SlotRange,
}

impl VisibleWindow {
    /// A window containing no slots at all.
    pub const EMPTY: Self = Self {
        negative: SlotRange::EMPTY,
        positive: SlotRange::EMPTY,
    };

    /// Returns `true` if no slot is visible.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.negative.is_empty() && self.positive.is_empty()
    }

    /// Returns the total number of visible slots.
    #[must_use]
    pub const fn len(self) -> usize {
        self.negative.len() + self.positive.len()
    }

    /// Returns `true` if `slot` lies in either range.
    #[must_use]
    pub const fn contains(self, slot: isize) -> bool {
        self.negative.contains(slot) || self.positive.contains(slot)
    }

    /// Iterates over all visible slots, in increasing order.
    pub fn iter(self) -> impl Iterator<Item = isize> {
        self.negative.iter().chain(self.positive.iter())
    }
}

/// Computes which slots should be materialized for the given offset.
///
/// The center slot is the one nearest `offset / slot_extent`; the window
/// extends `window_radius` slots to each side of it. The computation is pure
/// and idempotent: identical inputs always yield identical ranges.
///
/// Edge policy:
///
/// - `looping == false`: the center is clamped into `[0, slot_count - 1]`
///   and both ranges are intersected with that interval, so the first and
///   last slots never gain phantom neighbors past the collection edges.
/// - `looping == true`: the ranges carry raw, unclamped slot indices (which
///   may be negative or exceed `slot_count`); callers resolve them through
///   [`resolve_real_index`](crate::resolve_real_index).
///
/// Degenerate input (zero count, zero extent, non-finite offset) yields
/// [`VisibleWindow::EMPTY`].
///
/// ```
/// use roundel_index::compute_visible_window;
///
/// // Non-looping strip of 5 slots, radius 1, parked at the start: only
/// // slots 0 and 1 are live.
/// let window = compute_visible_window(0.0, 100.0, 5, 1, false);
/// let live: Vec<isize> = window.iter().collect();
/// assert_eq!(live, vec![0, 1]);
/// assert!(!window.contains(4));
///
/// // The same position in a looping strip reaches backward past the seam.
/// let window = compute_visible_window(0.0, 100.0, 5, 1, true);
/// let live: Vec<isize> = window.iter().collect();
/// assert_eq!(live, vec![-1, 0, 1]);
/// ```
#[must_use]
pub fn compute_visible_window<S: Scalar>(
    offset: S,
    slot_extent: S,
    slot_count: usize,
    window_radius: usize,
    looping: bool,
) -> VisibleWindow {
    if slot_count == 0 || !(slot_extent > S::zero()) || !offset.is_finite() {
        return VisibleWindow::EMPTY;
    }
    let mut center = (offset / slot_extent).round_to_isize();
    let radius = window_radius as isize;
    if !looping {
        center = center.clamp(0, slot_count as isize - 1);
    }
    let negative = SlotRange {
        start: center - radius,
        end: center,
    };
    let positive = SlotRange {
        start: center + 1,
        end: center + radius,
    };
    if looping {
        VisibleWindow { negative, positive }
    } else {
        let hi = slot_count as isize - 1;
        VisibleWindow {
            negative: negative.clamp_to(0, hi),
            positive: positive.clamp_to(0, hi),
        }
    }
}
