// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.

use roundel_index::fill_len;

/// Static configuration of a [`Carousel`](crate::Carousel).
///
/// The item collection itself is owned by the host; the engine only needs
/// its length. `raw_len` is the true item count, and the backing slot strip
/// is derived from it via the auto-fill policy: [`CarouselConfig::data_len`]
/// pads very short collections so a looping strip has no visible seam.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Number of items in the true, unpadded collection.
    pub raw_len: usize,
    /// Extent of one slot along the scroll axis, in host units (typically
    /// logical pixels). Must be positive for the engine to do anything.
    pub slot_extent: f64,
    /// Number of slots materialized on each side of the center slot.
    pub window_radius: usize,
    /// Whether the strip wraps around for infinite scrolling.
    pub looping: bool,
    /// Whether short collections are padded for seamless looping.
    pub auto_fill: bool,
    /// Logical index the carousel starts on.
    pub default_index: usize,
}

impl CarouselConfig {
    /// Creates a non-looping configuration with a one-slot window radius.
    #[must_use]
    pub fn new(raw_len: usize, slot_extent: f64) -> Self {
        Self {
            raw_len,
            slot_extent,
            window_radius: 1,
            looping: false,
            auto_fill: false,
            default_index: 0,
        }
    }

    /// Returns the padded slot count backing the strip.
    ///
    /// Padding only exists to hide the looping seam, so without looping the
    /// slot space always equals the logical space. With looping and
    /// auto-fill, one- and two-item collections are padded; the result is
    /// always a multiple of `raw_len` when `raw_len > 0`.
    #[must_use]
    pub fn data_len(&self) -> usize {
        fill_len(self.raw_len, self.auto_fill && self.looping)
    }

    /// Returns `true` if the configuration can produce any visible slots.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.raw_len > 0 && self.slot_extent > 0.0 && self.slot_extent.is_finite()
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new(0, 0.0)
    }
}
