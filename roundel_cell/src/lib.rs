// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=roundel_cell --heading-base-level=0

//! Roundel Cell: single-writer observable value cells.
//!
//! [`ValueCell`] is the reactive primitive the carousel engine hangs off:
//! one logical writer commits a value (typically the settled scroll offset),
//! and every subscriber is notified synchronously, before the write returns.
//! Downstream window and index computations therefore always observe the
//! most recently committed value; there is no queue and no deferred
//! delivery to go stale behind.
//!
//! The cell also carries a monotonically increasing **generation**, bumped
//! on every committed write. Consumers that cache derived state can record
//! the generation they computed against and cheaply detect staleness later.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::cell::Cell;
//! use std::rc::Rc;
//!
//! use roundel_cell::ValueCell;
//!
//! let mut offset = ValueCell::new(0.0_f64);
//! let seen = Rc::new(Cell::new(0.0_f64));
//!
//! let sink = Rc::clone(&seen);
//! let id = offset.subscribe(move |value| sink.set(*value));
//!
//! // The write notifies synchronously: `seen` is updated before `set` returns.
//! offset.set(350.0);
//! assert_eq!(seen.get(), 350.0);
//! assert_eq!(*offset.get(), 350.0);
//!
//! offset.unsubscribe(id);
//! offset.set(200.0);
//! assert_eq!(seen.get(), 350.0);
//! ```
//!
//! ## Writer discipline
//!
//! Exclusive access (`&mut`) is the writer role: the offset and the
//! selected-slot state each live in their own cell with exactly one owner,
//! and readers take `&T` snapshots plus the generation. The cell is a
//! single-threaded, cooperative primitive; it is not `Sync` and performs no
//! locking. Subscribers must not re-enter the cell (they only receive `&T`,
//! so the borrow checker enforces this for direct access).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Identifies a subscriber registered on a [`ValueCell`].
///
/// Ids are unique per cell and never reused, so a stale id held after
/// [`ValueCell::unsubscribe`] is harmless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// A single-writer, multi-reader observable value.
///
/// Writes through [`ValueCell::set`] commit the value, bump the generation,
/// and notify all subscribers synchronously in registration order.
pub struct ValueCell<T> {
    value: T,
    generation: u64,
    next_id: u64,
    subscribers: Vec<(SubscriberId, Subscriber<T>)>,
}

impl<T> ValueCell<T> {
    /// Creates a cell holding `value`, at generation `0`, with no subscribers.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            generation: 0,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Returns a snapshot of the current value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the generation of the current value.
    ///
    /// The generation starts at `0` and increases by one on every committed
    /// write. Consumers can record it alongside derived state to detect
    /// stale computations.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Commits a new value and notifies every subscriber before returning.
    ///
    /// Subscribers run synchronously in registration order. The new value is
    /// visible through [`ValueCell::get`] for the duration of every
    /// notification.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.generation += 1;
        // Detach the subscriber list while notifying so the closures can be
        // called mutably alongside the `&self.value` borrow.
        let mut subscribers = core::mem::take(&mut self.subscribers);
        for (_, notify) in &mut subscribers {
            notify(&self.value);
        }
        self.subscribers = subscribers;
    }

    /// Registers a subscriber, returning its id.
    ///
    /// The subscriber is invoked on every subsequent committed write, not
    /// for the value already in the cell.
    pub fn subscribe(&mut self, notify: impl FnMut(&T) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(notify)));
        id
    }

    /// Removes a subscriber. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Returns the number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Default> Default for ValueCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueCell")
            .field("value", &self.value)
            .field("generation", &self.generation)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
