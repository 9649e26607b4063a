// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements conversions from machine integers.

use super::exact_core::{ExactNumber, Sign};
use crate::digits::digit::Digit;

impl<const BASE: Digit> ExactNumber<BASE> {
    /// Creates an `ExactNumber` from `u64`.
    pub(crate) fn from_u64(n: u64, sign: Sign) -> ExactNumber<BASE> {
        if n == 0 {
            return Self::zero();
        }

        let mut digits = Vec::new();
        let mut rest = n;
        while rest != 0 {
            digits.push(rest % BASE);
            rest /= BASE;
        }
        digits.reverse();

        let exponent = digits.len() as i32;
        Self::new(digits, exponent, sign)
    }
}

impl<const BASE: Digit> From<u64> for ExactNumber<BASE> {
    fn from(n: u64) -> Self {
        Self::from_u64(n, Sign::Positive)
    }
}

impl<const BASE: Digit> From<i64> for ExactNumber<BASE> {
    fn from(i: i64) -> Self {
        if i >= 0 {
            Self::from_u64(i as u64, Sign::Positive)
        } else {
            // `unsigned_abs` also covers `i64::MIN`, whose negation does
            // not fit an `i64`.
            Self::from_u64(i.unsigned_abs(), Sign::Negative)
        }
    }
}
