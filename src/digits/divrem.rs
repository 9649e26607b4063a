// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements division operations for decimal integer vectors.
//!
//! The base conversion performed by parsing and formatting runs entirely
//! on base-10 integer vectors, which is why this routine fixes the base
//! to [`DECIMAL_BASE`] instead of taking it as a parameter.

use super::digit::{Digit, DECIMAL_BASE};
use super::digit_vec::{is_valid_digits, is_zero_digits, strip_leading_zeros, DigitVec};
use super::sub::sub_digits;
use std::cmp::Ordering;

/// Divides `dividend` by `divisor`, returning the quotient and the
/// remainder.
///
/// Both operands are integer vectors of decimal digits without leading
/// zeros (zero is `[0]`). Employs the "long division" algorithm: for each
/// incoming dividend digit, the largest digit `q` with
/// `q · divisor <= remainder window` is found by trial subtraction.
///
/// Will panic if `divisor` represents 0.
pub(crate) fn div_rem_digits(dividend: &[Digit], divisor: &[Digit]) -> (DigitVec, DigitVec) {
    debug_assert!(is_valid_digits(dividend, DECIMAL_BASE));
    debug_assert!(is_valid_digits(divisor, DECIMAL_BASE));
    debug_assert!(divisor.len() == 1 || divisor[0] != 0);

    assert!(!is_zero_digits(divisor), "attempt to divide by zero");

    // For a divisor with only one digit `divisor0`,
    // divides each digit of `dividend` with a rolling remainder.
    if divisor.len() == 1 {
        let divisor0 = divisor[0];
        let mut remainder0: Digit = 0;

        let mut quotient: DigitVec = Vec::with_capacity(dividend.len());
        for &dividend_digit in dividend {
            let t = remainder0 * DECIMAL_BASE + dividend_digit;
            quotient.push(t / divisor0);
            remainder0 = t % divisor0;
        }

        strip_leading_zeros(&mut quotient);
        return (quotient, vec![remainder0]);
    }

    let mut quotient: DigitVec = Vec::with_capacity(dividend.len());
    let mut remainder: DigitVec = vec![0];

    for &dividend_digit in dividend {
        // Shifts the next dividend digit into the remainder window.
        remainder.push(dividend_digit);
        strip_leading_zeros(&mut remainder);

        // Trial subtraction: at most `DECIMAL_BASE - 1` rounds.
        let mut q = 0;
        while cmp_integer_digits(&remainder, divisor) != Ordering::Less {
            let (difference, _) = sub_digits(
                &remainder,
                remainder.len() as i32,
                divisor,
                divisor.len() as i32,
                DECIMAL_BASE,
            );
            remainder = difference;
            strip_leading_zeros(&mut remainder);
            q += 1;
        }
        quotient.push(q);
    }

    strip_leading_zeros(&mut quotient);
    (quotient, remainder)
}

/// Returns an `Ordering` between two integer vectors without leading zeros.
fn cmp_integer_digits(a: &[Digit], b: &[Digit]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        ordering => ordering,
    }
}
