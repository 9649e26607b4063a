// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements addition operations.

use super::digit::{Digit, DoubleDigit};
use super::digit_vec::{aligned_digit, is_valid_digits, DigitVec};
use std::cmp;

/// Adds `a` with `b`, returning the output digits and their exponent.
///
/// The operands are magnitudes: each is the pair of a digit vector and an
/// exponent locating the radix point, `value = (0.digits)_base · base^exp`.
/// The digits are aligned on their unit weights and walked from the least
/// significant position to the most significant, propagating the resulting
/// carry upwards. A final carry grows the integer length by one.
///
/// The output covers the combined integer and fraction windows of both
/// operands and is not normalized.
pub(crate) fn add_digits(
    a: &[Digit],
    a_exponent: i32,
    b: &[Digit],
    b_exponent: i32,
    base: Digit,
) -> (DigitVec, i32) {
    debug_assert!(is_valid_digits(a, base));
    debug_assert!(is_valid_digits(b, base));

    let a_exponent = a_exponent as i64;
    let b_exponent = b_exponent as i64;
    let fractional_length = cmp::max(
        a.len() as i64 - a_exponent,
        b.len() as i64 - b_exponent,
    );
    let mut integral_length = cmp::max(a_exponent, b_exponent);

    let mut result = Vec::with_capacity((fractional_length + integral_length + 1) as usize);
    let base = base as DoubleDigit;
    let mut carry: DoubleDigit = 0;

    // Walks the aligned window from the lowest digit to the highest.
    // The window always contains at least one position:
    // `fractional_length + integral_length >= a.len() >= 1`.
    let mut i = fractional_length - 1;
    while i >= -integral_length {
        let a_digit = aligned_digit(a, a_exponent + i);
        let b_digit = aligned_digit(b, b_exponent + i);

        let mut digit = a_digit as DoubleDigit + b_digit as DoubleDigit + carry;
        if digit >= base {
            digit -= base;
            carry = 1;
        } else {
            carry = 0;
        }
        result.push(digit as Digit);

        i -= 1;
    }

    if carry == 1 {
        result.push(1);
        integral_length += 1;
    }

    // The walk collected digits from the least significant position,
    // the output is stored highest-order first.
    result.reverse();
    (result, integral_length as i32)
}
