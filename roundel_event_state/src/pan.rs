// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan state helper: project 2D pointer motion onto the carousel axis.
//!
//! The carousel scrolls along a single axis, horizontal or vertical, while
//! the pointer moves in 2D. [`PanState`] tracks a pan gesture and reports
//! per-move deltas and the cumulative offset along the configured axis; the
//! cross-axis component is discarded.
//!
//! ## Usage
//!
//! 1) Start a pan by calling [`PanState::begin`] with the initial pointer position.
//! 2) On each move event, call [`PanState::update`] to get the axis delta since the last update.
//! 3) Optionally call [`PanState::total_offset`] to get the cumulative axis offset from the start.
//! 4) End the pan with [`PanState::end`] to reset state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use roundel_event_state::pan::{PanAxis, PanState};
//!
//! let mut pan = PanState::new(PanAxis::Horizontal);
//!
//! // Finger down at (10, 20).
//! pan.begin(Point::new(10.0, 20.0));
//! assert!(pan.is_panning());
//!
//! // Move to (15, 90): the carousel only sees the 5-unit horizontal delta.
//! let delta = pan.update(Point::new(15.0, 90.0)).unwrap();
//! assert_eq!(delta, 5.0);
//!
//! let total = pan.total_offset(Point::new(15.0, 90.0)).unwrap();
//! assert_eq!(total, 5.0);
//! ```

use kurbo::Point;

/// The scroll axis of the carousel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PanAxis {
    /// Cards advance along the X axis.
    #[default]
    Horizontal,
    /// Cards advance along the Y axis.
    Vertical,
}

impl PanAxis {
    /// Extracts the on-axis component of a pointer position.
    #[must_use]
    pub fn component(self, pos: Point) -> f64 {
        match self {
            Self::Horizontal => pos.x,
            Self::Vertical => pos.y,
        }
    }
}

/// Tracks a pan gesture along one axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanState {
    axis: PanAxis,
    start: Option<f64>,
    last: Option<f64>,
}

impl PanState {
    /// Creates a tracker for the given axis, with no pan in progress.
    #[must_use]
    pub fn new(axis: PanAxis) -> Self {
        Self {
            axis,
            start: None,
            last: None,
        }
    }

    /// Returns the configured axis.
    #[must_use]
    pub fn axis(&self) -> PanAxis {
        self.axis
    }

    /// Starts tracking a pan from the given pointer position.
    pub fn begin(&mut self, pos: Point) {
        let on_axis = self.axis.component(pos);
        self.start = Some(on_axis);
        self.last = Some(on_axis);
    }

    /// Updates with a new pointer position, returning the axis delta since
    /// the last update. Returns `None` when no pan is in progress.
    pub fn update(&mut self, pos: Point) -> Option<f64> {
        self.start?;
        let on_axis = self.axis.component(pos);
        let delta = self.last.map(|last| on_axis - last);
        self.last = Some(on_axis);
        delta
    }

    /// Returns the cumulative axis offset from the pan start position, or
    /// `None` when no pan is in progress.
    #[must_use]
    pub fn total_offset(&self, current: Point) -> Option<f64> {
        self.start
            .map(|start| self.axis.component(current) - start)
    }

    /// Ends the pan and resets state.
    pub fn end(&mut self) {
        self.start = None;
        self.last = None;
    }

    /// Returns `true` while a pan is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_not_panning() {
        let mut pan = PanState::new(PanAxis::Horizontal);
        assert!(!pan.is_panning());
        assert_eq!(pan.update(Point::new(5.0, 5.0)), None);
        assert_eq!(pan.total_offset(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn horizontal_pan_ignores_vertical_motion() {
        let mut pan = PanState::new(PanAxis::Horizontal);
        pan.begin(Point::new(10.0, 20.0));

        let delta = pan.update(Point::new(15.0, 500.0));
        assert_eq!(delta, Some(5.0));
    }

    #[test]
    fn vertical_pan_ignores_horizontal_motion() {
        let mut pan = PanState::new(PanAxis::Vertical);
        pan.begin(Point::new(10.0, 20.0));

        let delta = pan.update(Point::new(500.0, 26.0));
        assert_eq!(delta, Some(6.0));
    }

    #[test]
    fn updates_track_incremental_deltas() {
        let mut pan = PanState::new(PanAxis::Horizontal);
        pan.begin(Point::new(0.0, 0.0));

        assert_eq!(pan.update(Point::new(5.0, 0.0)), Some(5.0));
        assert_eq!(pan.update(Point::new(8.0, 0.0)), Some(3.0));
        assert_eq!(pan.update(Point::new(2.0, 0.0)), Some(-6.0));
    }

    #[test]
    fn total_offset_measures_from_the_start() {
        let mut pan = PanState::new(PanAxis::Horizontal);
        pan.begin(Point::new(100.0, 0.0));
        pan.update(Point::new(130.0, 0.0));

        assert_eq!(pan.total_offset(Point::new(90.0, 0.0)), Some(-10.0));
    }

    #[test]
    fn end_resets_state() {
        let mut pan = PanState::new(PanAxis::Vertical);
        pan.begin(Point::new(0.0, 0.0));
        pan.update(Point::new(0.0, 50.0));

        pan.end();

        assert!(!pan.is_panning());
        assert_eq!(pan.update(Point::new(0.0, 60.0)), None);
    }

    #[test]
    fn begin_overwrites_a_previous_pan() {
        let mut pan = PanState::new(PanAxis::Horizontal);
        pan.begin(Point::new(0.0, 0.0));
        pan.update(Point::new(40.0, 0.0));

        pan.begin(Point::new(100.0, 0.0));
        assert_eq!(pan.total_offset(Point::new(103.0, 0.0)), Some(3.0));
        assert_eq!(pan.update(Point::new(103.0, 0.0)), Some(3.0));
    }

    #[test]
    fn zero_movement_yields_zero_delta() {
        let mut pan = PanState::new(PanAxis::Horizontal);
        let start = Point::new(50.0, 50.0);
        pan.begin(start);

        assert_eq!(pan.update(start), Some(0.0));
    }
}
