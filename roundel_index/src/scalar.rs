// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction used by the offset math.
//!
//! This trait is intentionally small and only implemented for `f32` and `f64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Rem, Sub};

/// Scalar type used for slot extents and scroll offsets.
///
/// This is currently implemented for `f32` and `f64`. The trait is deliberately
/// minimal and geared toward floating-point coordinates.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns the maximum of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Returns the minimum of `self` and `other`.
    fn min(self, other: Self) -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Returns `true` if the value is negative, including `-0.0`.
    fn is_sign_negative(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Constructs from an `isize` lossily.
    fn from_isize(value: isize) -> Self;

    /// Euclidean remainder: the result lies in `[0, rhs)` for positive `rhs`.
    ///
    /// Unlike the truncating `%` operator, negative inputs fold upward into
    /// the positive range, so `(-150.0).rem_euclid(500.0) == 350.0`. A second
    /// reduction guards against `r + rhs` rounding up to exactly `rhs` when
    /// `r` is a tiny negative value.
    fn rem_euclid(self, rhs: Self) -> Self {
        let r = self % rhs;
        if r < Self::zero() { (r + rhs) % rhs } else { r }
    }

    /// Rounds to the nearest integer and converts to `isize`.
    ///
    /// Ties round away from zero. Implementations may clamp or truncate as
    /// needed; callers are expected to clamp the result to a valid index
    /// range afterwards.
    fn round_to_isize(self) -> isize;
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn from_isize(value: isize) -> Self {
        value as Self
    }

    fn round_to_isize(self) -> isize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Used only for index approximation; result is clamped immediately after"
        )]
        {
            if self.is_sign_negative() {
                (self - 0.5) as isize
            } else {
                (self + 0.5) as isize
            }
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn from_isize(value: isize) -> Self {
        value as Self
    }

    fn round_to_isize(self) -> isize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Used only for index approximation; result is clamped immediately after"
        )]
        {
            if self.is_sign_negative() {
                (self - 0.5) as isize
            } else {
                (self + 0.5) as isize
            }
        }
    }
}
