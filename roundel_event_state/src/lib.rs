// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=roundel_event_state --heading-base-level=0

//! Roundel Event State: interaction state machines for the carousel.
//!
//! This crate provides small, focused state managers for the stateful parts
//! of the carousel interaction, each tracking just enough state across
//! events to compute transitions:
//!
//! - [`card`]: the card-stack open/close state machine, enforcing that at
//!   most one slot is ever open or animating.
//! - [`activity`]: touch and scroll begin/end tracking, the signal auto-play
//!   pauses on.
//! - [`pan`]: projects 2D pointer motion onto the carousel's scroll axis
//!   (requires the `pan` feature).
//!
//! The crate does not assume any particular UI framework, gesture
//! recognizer, or animation system. Managers accept discrete notifications
//! (activations, settles, pointer positions) and produce transition values
//! or state queries for the host to interpret; time-based interpolation
//! stays with the animation collaborator, which reports back only its
//! settled results.
//!
//! ## Card stack
//!
//! ```rust
//! use roundel_event_state::card::{CardStackState, CardTransition};
//!
//! let mut cards = CardStackState::default();
//! assert_eq!(cards.activate(2), Some(CardTransition::Opening(2)));
//!
//! // Concurrent activations on other slots are rejected until the
//! // transition settles.
//! assert_eq!(cards.activate(0), None);
//! cards.settle();
//! assert_eq!(cards.open_slot(), Some(2));
//! ```
//!
//! ## Pointer activity
//!
//! ```rust
//! use roundel_event_state::activity::PointerActivity;
//!
//! let mut activity = PointerActivity::new();
//! assert!(activity.touch_begin());
//! assert!(!activity.is_idle());
//! activity.touch_end();
//! assert!(activity.is_idle());
//! ```
//!
//! ## Features
//!
//! - `pan`: Enable the axis pan tracker (requires the `kurbo` dependency).
//!
//! This crate is `no_std`.

#![no_std]

pub mod activity;
pub mod card;

#[cfg(feature = "pan")]
pub mod pan;
