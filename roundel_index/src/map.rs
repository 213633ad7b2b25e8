// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset wrapping and slot-to-logical index resolution.
//!
//! These are the core mappings of the carousel engine: a continuous scroll
//! offset runs unbounded while slot positions repeat with period
//! `slot_extent * slot_count`, and slot indices (which may be negative or
//! exceed the true item count when auto-fill padding is active) fold back
//! into the logical item range.
//!
//! All functions are pure; degenerate inputs (zero extents, zero counts,
//! non-finite offsets) short-circuit to safe defaults instead of propagating
//! NaN or dividing by zero.

use crate::scalar::Scalar;

/// Wraps a raw scroll offset into one period of the looping slot strip.
///
/// When `looping` is `false` the offset is returned unchanged: slot positions
/// do not repeat and the caller bounds the offset itself. When `looping` is
/// `true` the result is the Euclidean remainder of `offset` modulo
/// `slot_extent * slot_count`, always in `[0, period)`.
///
/// Degenerate input (zero or non-finite period, non-finite offset) yields
/// `0`. This is a defined fallback, not an error signal.
///
/// ```
/// use roundel_index::wrap_offset;
///
/// // Five 100-unit slots; scrolling backwards re-enters from the far end.
/// assert_eq!(wrap_offset(-150.0, 100.0, 5, true), 350.0);
/// assert_eq!(wrap_offset(1_250.0, 100.0, 5, true), 250.0);
///
/// // Without looping the offset passes through untouched.
/// assert_eq!(wrap_offset(-150.0, 100.0, 5, false), -150.0);
/// ```
#[must_use]
pub fn wrap_offset<S: Scalar>(offset: S, slot_extent: S, slot_count: usize, looping: bool) -> S {
    if !looping {
        return offset;
    }
    let period = slot_extent * S::from_usize(slot_count);
    if !period.is_finite() || !(period > S::zero()) {
        return S::zero();
    }
    let wrapped = offset.rem_euclid(period);
    if wrapped.is_finite() { wrapped } else { S::zero() }
}

/// Resolves a slot index to an index into the true, unpadded item collection.
///
/// When `auto_fill` is `false` the slot space equals the logical space and
/// the index is returned unchanged. When `auto_fill` is `true` the result is
/// the Euclidean remainder modulo `raw_len`, guaranteed to lie in
/// `[0, raw_len)` for every integer input whenever `raw_len > 0`.
///
/// `raw_len == 0` with auto-fill on has no valid logical index; the slot
/// index passes through unchanged and the caller must guard that case.
///
/// ```
/// use roundel_index::resolve_real_index;
///
/// assert_eq!(resolve_real_index(-1, 5, true), 4);
/// assert_eq!(resolve_real_index(7, 5, true), 2);
/// assert_eq!(resolve_real_index(7, 5, false), 7);
/// ```
#[must_use]
pub fn resolve_real_index(slot_index: isize, raw_len: usize, auto_fill: bool) -> isize {
    if !auto_fill || raw_len == 0 {
        return slot_index;
    }
    slot_index.rem_euclid(raw_len as isize)
}

/// Returns the slot index nearest the given offset.
///
/// This is `round(offset / slot_extent)`, folded modulo `slot_count` when
/// looping and clamped into `[0, slot_count - 1]` otherwise. Degenerate
/// input (zero count, zero extent, non-finite offset) yields `0`.
#[must_use]
pub fn current_index<S: Scalar>(
    offset: S,
    slot_extent: S,
    slot_count: usize,
    looping: bool,
) -> usize {
    if slot_count == 0 || !(slot_extent > S::zero()) || !offset.is_finite() {
        return 0;
    }
    let nearest = (offset / slot_extent).round_to_isize();
    let bounded = if looping {
        nearest.rem_euclid(slot_count as isize)
    } else {
        nearest.clamp(0, slot_count as isize - 1)
    };
    bounded as usize
}

/// Continuous progress of the scroll offset in slot units.
///
/// The value is `offset / slot_extent`: `1.5` means the view sits halfway
/// between slots 1 and 2. Degenerate extents and non-finite offsets yield
/// `0`.
#[must_use]
pub fn animation_progress<S: Scalar>(offset: S, slot_extent: S) -> S {
    if !(slot_extent > S::zero()) || !offset.is_finite() {
        return S::zero();
    }
    offset / slot_extent
}

/// Signed distance from a slot's rest position to the current offset.
///
/// The result is `slot * slot_extent - offset`. When `looping` is enabled it
/// is additionally folded into `[-period/2, period/2)`, so a slot just past
/// the wraparound seam reports a short distance on the near side rather than
/// almost a full period on the far side. Renderers divide this by the slot
/// extent to get the per-slot interpolation value.
///
/// ```
/// use roundel_index::slot_offset;
///
/// // Offset 450 in a five-slot loop: slot 0 sits 50 units ahead, across
/// // the seam, not 450 units behind.
/// assert_eq!(slot_offset(0, 450.0, 100.0, 5, true), -450.0 + 500.0);
/// assert_eq!(slot_offset(0, 450.0, 100.0, 5, false), -450.0);
/// ```
#[must_use]
pub fn slot_offset<S: Scalar>(
    slot: isize,
    offset: S,
    slot_extent: S,
    slot_count: usize,
    looping: bool,
) -> S {
    let x = S::from_isize(slot) * slot_extent - offset;
    if !looping {
        return x;
    }
    let period = slot_extent * S::from_usize(slot_count);
    if !period.is_finite() || !(period > S::zero()) || !x.is_finite() {
        return x;
    }
    let half = period / S::from_usize(2);
    (x + half).rem_euclid(period) - half
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_offset_stays_in_period() {
        let period = 100.0 * 5.0;
        for raw in [-1_250.0, -150.0, -1.0, 0.0, 99.9, 500.0, 1_237.5] {
            let wrapped = wrap_offset(raw, 100.0, 5, true);
            assert!(
                (0.0..period).contains(&wrapped),
                "wrap_offset({raw}) = {wrapped} escaped [0, {period})"
            );
        }
    }

    #[test]
    fn wrap_offset_matches_reference_values() {
        assert_eq!(wrap_offset(-150.0, 100.0, 5, true), 350.0);
        assert_eq!(wrap_offset(350.0, 100.0, 5, true), 350.0);
        assert_eq!(wrap_offset(500.0, 100.0, 5, true), 0.0);
    }

    #[test]
    fn wrap_offset_without_loop_is_identity() {
        assert_eq!(wrap_offset(-150.0, 100.0, 5, false), -150.0);
        assert_eq!(wrap_offset(9_999.0, 100.0, 5, false), 9_999.0);
    }

    #[test]
    fn wrap_offset_degenerate_inputs_fall_back_to_zero() {
        assert_eq!(wrap_offset(123.0, 100.0, 0, true), 0.0);
        assert_eq!(wrap_offset(123.0, 0.0, 5, true), 0.0);
        assert_eq!(wrap_offset(f64::NAN, 100.0, 5, true), 0.0);
        assert_eq!(wrap_offset(f64::INFINITY, 100.0, 5, true), 0.0);
    }

    #[test]
    fn resolve_real_index_is_always_in_range() {
        for slot in -20_isize..20 {
            let real = resolve_real_index(slot, 5, true);
            assert!((0..5).contains(&real), "slot {slot} resolved to {real}");
        }
    }

    #[test]
    fn resolve_real_index_is_periodic() {
        let n = 5_isize;
        for r in 0..n {
            for k in [-3_isize, -1, 0, 1, 4] {
                assert_eq!(
                    resolve_real_index(k * n + r, 5, true),
                    resolve_real_index(r, 5, true),
                );
            }
        }
    }

    #[test]
    fn resolve_real_index_without_auto_fill_is_identity() {
        assert_eq!(resolve_real_index(-1, 5, false), -1);
        assert_eq!(resolve_real_index(7, 5, false), 7);
    }

    #[test]
    fn current_index_rounds_to_nearest_slot() {
        assert_eq!(current_index(0.0, 100.0, 5, false), 0);
        assert_eq!(current_index(149.0, 100.0, 5, false), 1);
        assert_eq!(current_index(151.0, 100.0, 5, false), 2);
    }

    #[test]
    fn current_index_clamps_without_loop() {
        assert_eq!(current_index(-250.0, 100.0, 5, false), 0);
        assert_eq!(current_index(9_999.0, 100.0, 5, false), 4);
    }

    #[test]
    fn current_index_wraps_with_loop() {
        // Offset 475 rounds to slot 5, which folds back to slot 0.
        assert_eq!(current_index(475.0, 100.0, 5, true), 0);
        assert_eq!(current_index(-49.0, 100.0, 5, true), 0);
        assert_eq!(current_index(-51.0, 100.0, 5, true), 4);
    }

    #[test]
    fn current_index_degenerate_inputs_fall_back_to_zero() {
        assert_eq!(current_index(250.0, 100.0, 0, true), 0);
        assert_eq!(current_index(250.0, 0.0, 5, true), 0);
        assert_eq!(current_index(f64::NAN, 100.0, 5, true), 0);
    }

    #[test]
    fn animation_progress_is_offset_in_slot_units() {
        assert_eq!(animation_progress(150.0, 100.0), 1.5);
        assert_eq!(animation_progress(0.0, 100.0), 0.0);
        assert_eq!(animation_progress(150.0, 0.0), 0.0);
        assert_eq!(animation_progress(f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn slot_offset_takes_the_short_way_around_the_seam() {
        // Slot 0 viewed from offset 450: 50 units ahead, not 450 behind.
        assert_eq!(slot_offset(0, 450.0, 100.0, 5, true), 50.0);
        // Slot 4 viewed from offset 50: 150 units behind via the seam.
        assert_eq!(slot_offset(4, 50.0, 100.0, 5, true), -150.0);
    }

    #[test]
    fn slot_offset_without_loop_is_plain_distance() {
        assert_eq!(slot_offset(0, 450.0, 100.0, 5, false), -450.0);
        assert_eq!(slot_offset(4, 50.0, 100.0, 5, false), 350.0);
    }

    #[test]
    fn slot_offset_result_is_within_half_period() {
        let period = 500.0;
        for slot in -3_isize..8 {
            for offset in [0.0, 49.0, 250.0, 499.0] {
                let x = slot_offset(slot, offset, 100.0, 5, true);
                assert!(
                    (-period / 2.0..period / 2.0).contains(&x),
                    "slot {slot} at offset {offset} gave {x}"
                );
            }
        }
    }
}
