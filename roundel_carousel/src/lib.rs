// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=roundel_carousel --heading-base-level=0

//! Roundel Carousel: headless controller for a looping card carousel.
//!
//! This crate ties the Roundel building blocks into one engine: the
//! committed scroll offset lives in a [`roundel_cell::ValueCell`], the pure
//! offset math comes from [`roundel_index`], and the interaction state
//! machines come from [`roundel_event_state`]. The result is a
//! renderer-agnostic [`Carousel`] that hosts drive from their own gesture,
//! animation, and rendering systems.
//!
//! The division of labor:
//!
//! - The **gesture collaborator** feeds pointer deltas and touch/scroll
//!   begin-end notifications in, and commits offsets via
//!   [`Carousel::set_offset`].
//! - The **animation collaborator** receives [`ScrollTarget`]s from
//!   [`Carousel::next`]/[`Carousel::prev`]/[`Carousel::scroll_to`], runs its
//!   spring or timing interpolation, and commits the settled offset back.
//!   The engine never assumes anything about in-flight animation values.
//! - The **rendering collaborator** asks, per slot, whether to materialize
//!   real content ([`Carousel::should_render`]), which item backs the slot
//!   ([`Carousel::real_index`]), and how far the slot sits from center
//!   ([`Carousel::slot_progress`]).
//!
//! ## Minimal example
//!
//! A five-card looping carousel with 100-unit slots:
//!
//! ```rust
//! use roundel_carousel::{Carousel, CarouselConfig};
//!
//! let config = CarouselConfig {
//!     looping: true,
//!     auto_fill: true,
//!     window_radius: 1,
//!     ..CarouselConfig::new(5, 100.0)
//! };
//! let mut carousel = Carousel::new(config);
//!
//! // A gesture scrolled 150 units backwards past the start.
//! carousel.set_offset(-150.0);
//! assert_eq!(carousel.current_index(), 4);
//!
//! // Only the slots near the offset render real content.
//! for slot in carousel.visible_window().iter() {
//!     let item = carousel.real_index(slot).unwrap();
//!     assert!(item < 5);
//! }
//!
//! // Imperative control: compute the target, let the animation system
//! // interpolate, then commit the settled value.
//! let target = carousel.next().unwrap();
//! carousel.set_offset(target.offset);
//! assert_eq!(carousel.current_index(), 0);
//! ```
//!
//! ## Auto-play
//!
//! [`AutoPlay`] steps the carousel while the user is idle. The host owns
//! the clock and wires pausing to the activity tracker:
//!
//! ```rust
//! use roundel_carousel::{AutoPlay, AutoPlayCommand, Carousel, CarouselConfig};
//!
//! let mut carousel = Carousel::new(CarouselConfig {
//!     looping: true,
//!     ..CarouselConfig::new(3, 100.0)
//! });
//! let mut autoplay = AutoPlay::new(2_000.0);
//!
//! // Frame loop: pause while touched, tick otherwise.
//! if carousel.touch_begin() {
//!     autoplay.pause();
//! }
//! if carousel.touch_end() {
//!     autoplay.resume();
//! }
//! if let Some(AutoPlayCommand::Next) = autoplay.tick(16.7) {
//!     if let Some(target) = carousel.next() {
//!         carousel.set_offset(target.offset);
//!     }
//! }
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod autoplay;
mod carousel;
mod config;

pub use autoplay::{AutoPlay, AutoPlayCommand};
pub use carousel::{Carousel, CarouselDebugInfo, ScrollTarget};
pub use config::CarouselConfig;
