// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements fixed-point rounding by one unit in the last place.

use super::digit::Digit;
use super::digit_vec::{is_valid_digits, DigitVec};

/// Increments the least significant digit of `digits` by one,
/// propagating the carry upwards.
///
/// Returns true if the carry ran off the most significant digit:
/// the vector then holds a leading `1` followed by zeros, and the number
/// has grown by one integer position, e.g. `.999` becomes `1.000`.
/// The caller is responsible for incrementing its exponent accordingly.
pub(crate) fn round_up_digits(digits: &mut DigitVec, base: Digit) -> bool {
    debug_assert!(is_valid_digits(digits, base));

    for digit in digits.iter_mut().rev() {
        if *digit != base - 1 {
            *digit += 1;
            return false;
        }
        *digit = 0;
    }

    digits.insert(0, 1);
    true
}

/// Decrements the least significant digit of `digits` by one,
/// propagating the borrow upwards.
///
/// The represented number must not be zero; the borrow then always stops
/// at a non-zero digit. The output may carry a leading zero,
/// e.g. `100` becomes `099`.
pub(crate) fn round_down_digits(digits: &mut DigitVec, base: Digit) {
    debug_assert!(is_valid_digits(digits, base));
    debug_assert!(digits.iter().any(|&digit| digit != 0));

    for digit in digits.iter_mut().rev() {
        if *digit != 0 {
            *digit -= 1;
            return;
        }
        *digit = base - 1;
    }
}
