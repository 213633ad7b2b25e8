// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=roundel_index --heading-base-level=0

//! Roundel Index: pure offset-to-index math for looping carousels.
//!
//! This crate is the headless core of a card-carousel engine: given a
//! continuous scroll offset, a slot extent, and a handful of flags, it
//! computes which slot is current, which logical item backs any slot, and
//! which slots are close enough to the offset to deserve real content. It is
//! renderer-agnostic and holds no state; every function is a pure mapping
//! from its arguments.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for extents and
//!   scroll offsets.
//! - [`wrap_offset`]: folds an unbounded scroll offset into one period of
//!   the looping strip, so the visual position can run forever while slot
//!   positions repeat with period `slot_extent * slot_count`.
//! - [`resolve_real_index`]: folds a raw slot index (negative or padded)
//!   back into the true item range `[0, raw_len)`.
//! - [`compute_visible_window`]: selects the slots to materialize around the
//!   current offset, as two closed ranges ([`VisibleWindow`]).
//! - [`current_index`], [`animation_progress`], [`slot_offset`]: the derived
//!   values a renderer interpolates from.
//! - [`fill_len`]: the auto-fill padding policy for seamless looping with
//!   one- or two-item collections.
//!
//! ## Minimal example
//!
//! A five-card looping carousel with 100-unit slots:
//!
//! ```rust
//! use roundel_index::{compute_visible_window, resolve_real_index, wrap_offset};
//!
//! // The user has scrolled 150 units backwards past the start.
//! let offset = wrap_offset(-150.0, 100.0, 5, true);
//! assert_eq!(offset, 350.0);
//!
//! // Only the slots around the offset get real content.
//! let window = compute_visible_window(offset, 100.0, 5, 1, true);
//! assert!(window.contains(3) && window.contains(4));
//!
//! // Raw slot indices resolve into the true item collection.
//! for slot in window.iter() {
//!     let real = resolve_real_index(slot, 5, true);
//!     assert!((0..5).contains(&real));
//! }
//! ```
//!
//! ## Degenerate inputs
//!
//! Zero slot counts, zero extents, and non-finite offsets are normal inputs
//! during data reloads, not faults. Every function short-circuits them to a
//! safe default (offset `0`, index `0`, empty window) instead of propagating
//! NaN or dividing by zero.
//!
//! This crate is `no_std`.

#![no_std]

mod fill;
mod map;
mod scalar;
mod window;

pub use fill::fill_len;
pub use map::{animation_progress, current_index, resolve_real_index, slot_offset, wrap_offset};
pub use scalar::Scalar;
pub use window::{SlotRange, VisibleWindow, compute_visible_window};
