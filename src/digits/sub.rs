// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements subtraction operations.

use super::digit::{Digit, DoubleDigit};
use super::digit_vec::{aligned_digit, is_valid_digits, DigitVec};
use std::cmp;

/// Subtracts `b` from `a`, returning the output digits and their exponent.
///
/// The operands are magnitude/exponent pairs as in
/// [`add_digits`](super::add::add_digits). The aligned window is walked
/// from the least significant position to the most significant with a
/// single borrow chain.
///
/// - `a` must be no less than `b` (a >= b).
/// - The output covers the combined integer and fraction windows of both
///   operands and is not normalized.
///
/// # Panics
///
/// Panics when `a < b`.
pub(crate) fn sub_digits(
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
    let integral_length = cmp::max(a_exponent, b_exponent);

    let mut result = Vec::with_capacity((fractional_length + integral_length) as usize);
    let base = base as DoubleDigit;
    let mut borrow: DoubleDigit = 0;

    let mut i = fractional_length - 1;
    while i >= -integral_length {
        let a_digit = aligned_digit(a, a_exponent + i) as DoubleDigit;
        let b_digit = aligned_digit(b, b_exponent + i) as DoubleDigit;

        // `b_digit + borrow <= base`, so the borrowed difference is a
        // single digit again.
        let subtrahend = b_digit + borrow;
        let digit = if a_digit < subtrahend {
            borrow = 1;
            a_digit + base - subtrahend
        } else {
            borrow = 0;
            a_digit - subtrahend
        };
        result.push(digit as Digit);

        i -= 1;
    }

    if borrow != 0 {
        panic!("attempt to subtract with overflow");
    }

    result.reverse();
    (result, integral_length as i32)
}
