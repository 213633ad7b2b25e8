// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-fill padding policy.
//!
//! A looping carousel with very few items shows a visible seam: with one or
//! two backing slots there is not enough material on either side of the
//! center to cover the window while the strip wraps. Auto-fill pads the
//! backing sequence by repeating the items until the strip is long enough,
//! and [`resolve_real_index`](crate::resolve_real_index) folds the padded
//! slot indices back onto the true collection.

/// Returns the padded slot count for a collection of `raw_len` items.
///
/// A single item is tripled and a pair is doubled, so the strip always holds
/// at least three slots and at least one full copy of the collection fits on
/// each side of the center. Collections of three or more items are long
/// enough already and pass through unchanged. The result is always a
/// positive multiple of `raw_len` when `raw_len > 0`, which keeps real-index
/// resolution periodic over the padded strip.
///
/// With `auto_fill` off (or an empty collection) the slot space equals the
/// logical space.
///
/// ```
/// use roundel_index::fill_len;
///
/// assert_eq!(fill_len(1, true), 3);
/// assert_eq!(fill_len(2, true), 4);
/// assert_eq!(fill_len(7, true), 7);
/// assert_eq!(fill_len(2, false), 2);
/// ```
#[must_use]
pub const fn fill_len(raw_len: usize, auto_fill: bool) -> usize {
    if !auto_fill {
        return raw_len;
    }
    match raw_len {
        1 => 3,
        2 => 4,
        n => n,
    }
}

#[cfg(test)]
mod tests {
    use super::fill_len;

    #[test]
    fn short_collections_are_padded() {
        assert_eq!(fill_len(1, true), 3);
        assert_eq!(fill_len(2, true), 4);
    }

    #[test]
    fn longer_collections_pass_through() {
        assert_eq!(fill_len(3, true), 3);
        assert_eq!(fill_len(100, true), 100);
    }

    #[test]
    fn padded_len_is_a_multiple_of_raw_len() {
        for raw_len in 1..20_usize {
            let padded = fill_len(raw_len, true);
            assert!(padded >= raw_len, "padding may never shrink the strip");
            assert_eq!(padded % raw_len, 0, "raw_len {raw_len} gave {padded}");
        }
    }

    #[test]
    fn disabled_or_empty_is_identity() {
        assert_eq!(fill_len(1, false), 1);
        assert_eq!(fill_len(0, true), 0);
    }
}
