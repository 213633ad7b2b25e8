// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card-stack open/close state machine.
//!
//! In the card-stack interaction, tapping a closed card animates it open and
//! tapping the open card (or dismissing externally) animates it closed. The
//! animation itself runs elsewhere; this module only tracks which slot is in
//! which phase and enforces the exclusivity rules:
//!
//! - At most one slot is ever `Open` or `Transitioning`, system-wide.
//! - A slot can only start opening when no other slot is open or in flight.
//! - Activation requests while any transition is in flight are silently
//!   ignored. This is a normal race in interactive UI, not a fault, so there
//!   is no error signal: the request methods return `None` and nothing
//!   changes.
//! - `Transitioning` is always transient; the animation collaborator calls
//!   [`CardStackState::settle`] when its interpolation lands, which resolves
//!   the slot to `Open` or `Closed`.
//!
//! ## Minimal example
//!
//! ```rust
//! use roundel_event_state::card::{CardStackState, CardTransition, SlotPhase};
//!
//! let mut cards = CardStackState::default();
//!
//! // Tap card 2: it starts opening.
//! assert_eq!(cards.activate(2), Some(CardTransition::Opening(2)));
//! assert_eq!(cards.phase_of(2), SlotPhase::Transitioning);
//!
//! // Tapping any card mid-flight is a no-op.
//! assert_eq!(cards.activate(0), None);
//! assert_eq!(cards.activate(2), None);
//!
//! // The open animation lands; card 2 is now the open card.
//! cards.settle();
//! assert_eq!(cards.open_slot(), Some(2));
//!
//! // Tapping the open card starts closing it.
//! assert_eq!(cards.activate(2), Some(CardTransition::Closing(2)));
//! cards.settle();
//! assert_eq!(cards.open_slot(), None);
//! ```

/// Phase of a single slot in the card stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SlotPhase {
    /// The slot is at rest in the stack.
    Closed,
    /// An open or close animation for this slot is in flight.
    Transitioning,
    /// The slot is the open card.
    Open,
}

/// A transition started by an activation or dismissal.
///
/// The animation collaborator interprets this as "begin the open/close
/// interpolation for this slot" and reports back via
/// [`CardStackState::settle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CardTransition {
    /// The slot began animating from closed to open.
    Opening(usize),
    /// The slot began animating from open to closed.
    Closing(usize),
}

/// Terminal state reached when an in-flight transition settles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CardSettled {
    /// The slot finished opening and is now the open card.
    Opened(usize),
    /// The slot finished closing and returned to the stack.
    Closed(usize),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ActivePhase {
    Opening,
    Open,
    Closing,
}

/// Tracks which slot is open or transitioning in the card stack.
///
/// The single `active` record is the whole state: its absence means every
/// slot is closed, which makes the at-most-one-active invariant structural
/// rather than checked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CardStackState {
    active: Option<(usize, ActivePhase)>,
}

impl CardStackState {
    /// Creates a stack with every slot closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles user activation of `slot`.
    ///
    /// - Every slot closed: the slot starts opening.
    /// - `slot` is the open card: it starts closing.
    /// - Any transition in flight, or a different slot open: no-op.
    ///
    /// Returns the transition that began, or `None` if the request was
    /// ignored.
    pub fn activate(&mut self, slot: usize) -> Option<CardTransition> {
        match self.active {
            None => {
                self.active = Some((slot, ActivePhase::Opening));
                Some(CardTransition::Opening(slot))
            }
            Some((open, ActivePhase::Open)) if open == slot => {
                self.active = Some((slot, ActivePhase::Closing));
                Some(CardTransition::Closing(slot))
            }
            Some(_) => None,
        }
    }

    /// Dismisses the open card externally (back button, scrim tap).
    ///
    /// Only an `Open` slot can be dismissed; in-flight transitions must
    /// settle first. Returns the closing transition, or `None` if nothing
    /// was open.
    pub fn dismiss(&mut self) -> Option<CardTransition> {
        match self.active {
            Some((slot, ActivePhase::Open)) => {
                self.active = Some((slot, ActivePhase::Closing));
                Some(CardTransition::Closing(slot))
            }
            _ => None,
        }
    }

    /// Resolves the in-flight transition to its terminal state.
    ///
    /// Called by the animation collaborator when its interpolation lands.
    /// Returns what settled, or `None` if no transition was in flight.
    pub fn settle(&mut self) -> Option<CardSettled> {
        match self.active {
            Some((slot, ActivePhase::Opening)) => {
                self.active = Some((slot, ActivePhase::Open));
                Some(CardSettled::Opened(slot))
            }
            Some((slot, ActivePhase::Closing)) => {
                self.active = None;
                Some(CardSettled::Closed(slot))
            }
            _ => None,
        }
    }

    /// Returns the phase of `slot`.
    #[must_use]
    pub fn phase_of(&self, slot: usize) -> SlotPhase {
        match self.active {
            Some((active, ActivePhase::Open)) if active == slot => SlotPhase::Open,
            Some((active, _)) if active == slot => SlotPhase::Transitioning,
            _ => SlotPhase::Closed,
        }
    }

    /// Returns the open slot, if any. Transitioning slots do not count.
    #[must_use]
    pub fn open_slot(&self) -> Option<usize> {
        match self.active {
            Some((slot, ActivePhase::Open)) => Some(slot),
            _ => None,
        }
    }

    /// Returns `true` while an open or close animation is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(
            self.active,
            Some((_, ActivePhase::Opening | ActivePhase::Closing))
        )
    }

    /// Returns `true` when every slot is closed and nothing is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }
}
