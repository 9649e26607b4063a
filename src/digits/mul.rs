// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements multiplication operations.

use super::digit::{Digit, DoubleDigit};
use super::digit_vec::{is_valid_digits, DigitVec};

/// Multiplies `a` with `b`, returning the output digits and their exponent.
///
/// The operands are magnitude/exponent pairs as in
/// [`add_digits`](super::add::add_digits).
///
/// Employs the "long multiplication" algorithm:
/// multiplying each digit of the multiplier with the multiplicand,
/// and merging the result into a properly shifted output window.
///
/// A single cell accumulates `a_i · b_j + cell + carry`, which is at most
/// `base² - 1` and therefore fits a `DoubleDigit`.
pub(crate) fn mul_digits(
    a: &[Digit],
    a_exponent: i32,
    b: &[Digit],
    b_exponent: i32,
    base: Digit,
) -> (DigitVec, i32) {
    debug_assert!(is_valid_digits(a, base));
    debug_assert!(is_valid_digits(b, base));

    // The output length covers the digits of both operands plus the
    // fractional extension a negative exponent implies.
    let mut result_len = a.len() + b.len();
    if a_exponent < 0 {
        result_len += -a_exponent as usize;
    }
    if b_exponent < 0 {
        result_len += -b_exponent as usize;
    }

    let mut result: DigitVec = vec![0; result_len];
    let base = base as DoubleDigit;

    // `a_window_end` locates the least significant output cell of the
    // current `a` digit's partial product.
    let mut a_window_end = result_len - 1;
    for &a_digit in a.iter().rev() {
        let mut carry: DoubleDigit = 0;
        let mut offset = 0;

        for &b_digit in b.iter().rev() {
            let cell = &mut result[a_window_end - offset];
            let t = a_digit as DoubleDigit * b_digit as DoubleDigit
                + *cell as DoubleDigit
                + carry;

            *cell = (t % base) as Digit;
            carry = t / base;
            offset += 1;
        }

        if carry > 0 {
            // The cell above the window is read back by the next outer
            // round, which resumes the carry propagation.
            result[a_window_end - offset] += carry as Digit;
        }
        a_window_end -= 1;
    }

    let fractional_length = (a.len() as i64 - a_exponent as i64)
        + (b.len() as i64 - b_exponent as i64);
    let result_exponent = result_len as i64 - fractional_length;

    (result, result_exponent as i32)
}
