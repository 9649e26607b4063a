// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines `Interval` and the enclosure-preserving interval arithmetic.

use super::exact_core::ExactNumber;
use crate::digits::digit::{Digit, DECIMAL_BASE};
use crate::error::RealError;
use std::fmt;
use std::fmt::Display;

/// An enclosure of an exact value: a pair of bounds with
/// `lower_bound <= upper_bound`.
///
/// Mixed-sign intervals are permitted and denote enclosures straddling
/// zero.
#[derive(Clone, Debug)]
pub struct Interval<const BASE: Digit = DECIMAL_BASE> {
    pub lower_bound: ExactNumber<BASE>,
    pub upper_bound: ExactNumber<BASE>,
}

impl<const BASE: Digit> Interval<BASE> {
    pub fn new(lower_bound: ExactNumber<BASE>, upper_bound: ExactNumber<BASE>) -> Interval<BASE> {
        debug_assert!(lower_bound <= upper_bound);

        Interval {
            lower_bound,
            upper_bound,
        }
    }

    /// Returns the degenerate interval [value, value].
    pub fn point(value: ExactNumber<BASE>) -> Interval<BASE> {
        Interval {
            lower_bound: value.clone(),
            upper_bound: value,
        }
    }

    /// Returns true if both bounds coincide.
    pub fn is_point(&self) -> bool {
        self.lower_bound == self.upper_bound
    }

    /// Returns true if `value` lies within the bounds.
    pub fn encloses(&self, value: &ExactNumber<BASE>) -> bool {
        self.lower_bound <= *value && *value <= self.upper_bound
    }

    /// Returns true if `other` lies within the bounds.
    pub fn encloses_interval(&self, other: &Interval<BASE>) -> bool {
        self.lower_bound <= other.lower_bound && other.upper_bound <= self.upper_bound
    }

    /// Exchanges the two bounds.
    ///
    /// Useful when a computation on magnitudes is mapped back to a
    /// negative number: mirroring at zero reverses the bound order.
    pub fn swap_bounds(&mut self) {
        std::mem::swap(&mut self.lower_bound, &mut self.upper_bound);
    }
}

impl<const BASE: Digit> PartialEq for Interval<BASE> {
    fn eq(&self, other: &Self) -> bool {
        self.lower_bound == other.lower_bound && self.upper_bound == other.upper_bound
    }
}

impl<const BASE: Digit> Eq for Interval<BASE> {}

impl<const BASE: Digit> Display for Interval<BASE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower_bound, self.upper_bound)
    }
}

/// Adds two intervals: bounds combine pairwise.
pub(crate) fn add_intervals<const BASE: Digit>(
    lhs: &Interval<BASE>,
    rhs: &Interval<BASE>,
) -> Interval<BASE> {
    Interval::new(
        &lhs.lower_bound + &rhs.lower_bound,
        &lhs.upper_bound + &rhs.upper_bound,
    )
}

/// Subtracts two intervals: each bound combines with the opposite bound.
pub(crate) fn sub_intervals<const BASE: Digit>(
    lhs: &Interval<BASE>,
    rhs: &Interval<BASE>,
) -> Interval<BASE> {
    Interval::new(
        &lhs.lower_bound - &rhs.upper_bound,
        &lhs.upper_bound - &rhs.lower_bound,
    )
}

/// Multiplies two intervals: the hull of the four cross products.
pub(crate) fn mul_intervals<const BASE: Digit>(
    lhs: &Interval<BASE>,
    rhs: &Interval<BASE>,
) -> Interval<BASE> {
    let products = [
        &lhs.lower_bound * &rhs.lower_bound,
        &lhs.lower_bound * &rhs.upper_bound,
        &lhs.upper_bound * &rhs.lower_bound,
        &lhs.upper_bound * &rhs.upper_bound,
    ];

    let lower = products.iter().min().unwrap().clone();
    let upper = products.iter().max().unwrap().clone();
    Interval::new(lower, upper)
}

/// Divides two intervals to `max_precision` digits.
///
/// The divisor interval must not contain zero: a degenerate [0, 0]
/// divisor raises [`RealError::DivideByZero`], and any other enclosure of
/// zero raises [`RealError::DivergentDivision`] so the caller can refine
/// the divisor and retry. Otherwise each output bound divides the
/// appropriate cross pair of bounds, rounded outward so the enclosure is
/// preserved for every sign combination.
pub(crate) fn div_intervals<const BASE: Digit>(
    lhs: &Interval<BASE>,
    rhs: &Interval<BASE>,
    max_precision: u32,
) -> Result<Interval<BASE>, RealError> {
    let zero = ExactNumber::zero();

    if rhs.lower_bound.is_zero() && rhs.upper_bound.is_zero() {
        return Err(RealError::DivideByZero);
    }
    if rhs.lower_bound <= zero && zero <= rhs.upper_bound {
        return Err(RealError::DivergentDivision);
    }

    let (lower, upper) = if rhs.lower_bound > zero {
        // Strictly positive divisor: a larger divisor magnitude pulls a
        // positive numerator down and a negative one up.
        let lower_divisor = if lhs.lower_bound >= zero {
            &rhs.upper_bound
        } else {
            &rhs.lower_bound
        };
        let upper_divisor = if lhs.upper_bound >= zero {
            &rhs.lower_bound
        } else {
            &rhs.upper_bound
        };
        (
            divide_directed(&lhs.lower_bound, lower_divisor, false, max_precision)?,
            divide_directed(&lhs.upper_bound, upper_divisor, true, max_precision)?,
        )
    } else {
        // Strictly negative divisor: the quotient order reverses.
        let lower_divisor = if lhs.upper_bound >= zero {
            &rhs.upper_bound
        } else {
            &rhs.lower_bound
        };
        let upper_divisor = if lhs.lower_bound >= zero {
            &rhs.lower_bound
        } else {
            &rhs.upper_bound
        };
        (
            divide_directed(&lhs.upper_bound, lower_divisor, false, max_precision)?,
            divide_directed(&lhs.lower_bound, upper_divisor, true, max_precision)?,
        )
    };

    Ok(Interval::new(lower, upper))
}

/// Divides with the rounding direction expressed in value order:
/// `value_upper` rounds toward +∞, otherwise toward −∞. The magnitude
/// rounding of [`ExactNumber::divide`] flips for negative quotients.
fn divide_directed<const BASE: Digit>(
    numerator: &ExactNumber<BASE>,
    divisor: &ExactNumber<BASE>,
    value_upper: bool,
    max_precision: u32,
) -> Result<ExactNumber<BASE>, RealError> {
    let negative = numerator.is_negative() != divisor.is_negative();
    let is_upper = if negative { !value_upper } else { value_upper };
    numerator.divide(divisor, is_upper, max_precision)
}
