// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements comparing operations.

use super::exact_core::{ExactNumber, Sign};
use crate::digits::cmp::cmp_aligned_digits;
use crate::digits::digit::Digit;
use std::cmp::Ordering;

impl<const BASE: Digit> ExactNumber<BASE> {
    /// Returns an `Ordering` between the magnitudes |self| and |other|.
    ///
    /// Both operands must be at least left-normalized: with the leading
    /// digit non-zero, a greater exponent means a greater magnitude, and
    /// equal exponents reduce to the aligned digit comparison.
    pub(crate) fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        debug_assert!(self.digits[0] != 0);
        debug_assert!(other.digits[0] != 0);

        match self.exponent.cmp(&other.exponent) {
            Ordering::Equal => cmp_aligned_digits(&self.digits, &other.digits),
            ordering => ordering,
        }
    }

    /// Returns an `Ordering` between the represented values.
    pub(crate) fn cmp_value(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => {
                return if other.sign == Sign::Positive {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
            (false, true) => {
                return if self.sign == Sign::Positive {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
            (false, false) => {}
        }

        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.cmp_magnitude(other),
            (Sign::Negative, Sign::Negative) => other.cmp_magnitude(self),
        }
    }
}

impl<const BASE: Digit> PartialEq for ExactNumber<BASE> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl<const BASE: Digit> Eq for ExactNumber<BASE> {}

impl<const BASE: Digit> PartialOrd for ExactNumber<BASE> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const BASE: Digit> Ord for ExactNumber<BASE> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}
