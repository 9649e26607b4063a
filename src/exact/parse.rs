// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements parsing of decimal literals.
//!
//! A literal is scanned against the grammar
//! `[+-]?DIGIT*(.DIGIT+)?([eE][+-]?DIGIT+)?`, canonicalized, and then
//! converted from base 10 to the working base. The conversion runs on the
//! base-10 kernel primitives: the integer part by repeatedly dividing by
//! the base and collecting remainders, the fractional part by repeatedly
//! multiplying by the base and extracting the integer carry.

use super::exact_core::{ExactNumber, Sign};
use crate::digits::add::add_digits;
use crate::digits::digit::{Digit, DECIMAL_BASE};
use crate::digits::digit_vec::{is_zero_digits, strip_leading_zeros, DigitVec};
use crate::digits::divrem::div_rem_digits;
use crate::digits::mul::mul_digits;
use crate::error::RealError;

impl<const BASE: Digit> ExactNumber<BASE> {
    /// Creates an `ExactNumber` by parsing a decimal literal.
    ///
    /// Accepts `[+-]?DIGIT*(.DIGIT+)?([eE][+-]?DIGIT+)?` with at least one
    /// digit. A fractional part must have a finite expansion in `BASE`
    /// (always true when every prime factor of 10 divides `BASE`);
    /// otherwise the literal cannot be represented exactly and parsing
    /// fails with [`RealError::InvalidStringNumber`].
    pub fn from_decimal_str(s: &str) -> Result<ExactNumber<BASE>, RealError> {
        let bytes = s.as_bytes();
        let mut pos = 0;

        let sign = match bytes.first() {
            Some(b'+') => {
                pos += 1;
                Sign::Positive
            }
            Some(b'-') => {
                pos += 1;
                Sign::Negative
            }
            _ => Sign::Positive,
        };

        let integer_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let integer = &s[integer_start..pos];

        let fraction = if pos < bytes.len() && bytes[pos] == b'.' {
            pos += 1;
            let fraction_start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            if pos == fraction_start {
                return Err(RealError::InvalidStringNumber);
            }
            &s[fraction_start..pos]
        } else {
            ""
        };

        let exponent = if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
            pos += 1;
            let exponent_start = pos;
            if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
                pos += 1;
            }
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            s[exponent_start..pos]
                .parse::<i32>()
                .map_err(|_| RealError::InvalidStringNumber)?
        } else {
            0
        };

        if pos != bytes.len() || (integer.is_empty() && fraction.is_empty()) {
            return Err(RealError::InvalidStringNumber);
        }

        Self::from_decimal_parts(integer, fraction, exponent, sign)
    }

    /// Creates an `ExactNumber` from pre-split decimal parts:
    /// `value = sign · integer.fraction · 10^exponent`.
    ///
    /// Both parts must consist of decimal digit characters only;
    /// either may be empty (but not both).
    pub fn from_decimal_parts(
        integer: &str,
        fraction: &str,
        exponent: i32,
        sign: Sign,
    ) -> Result<ExactNumber<BASE>, RealError> {
        if integer.is_empty() && fraction.is_empty() {
            return Err(RealError::InvalidStringNumber);
        }

        let mut integer_digits = decimal_str_digits(integer)?;
        let mut fraction_digits = decimal_str_digits(fraction)?;

        // Canonicalization: leading integer zeros carry no weight, and
        // trailing fractional zeros carry no value.
        while integer_digits.first() == Some(&0) {
            integer_digits.remove(0);
        }
        while fraction_digits.last() == Some(&0) {
            fraction_digits.pop();
        }

        // `point` locates the radix point within the combined digit string.
        let mut point = integer_digits.len() as i64 + exponent as i64;

        if fraction_digits.is_empty() {
            // Trailing integer zeros fold into the already counted weight.
            while integer_digits.last() == Some(&0) {
                integer_digits.pop();
            }
        }
        if integer_digits.is_empty() {
            while fraction_digits.first() == Some(&0) {
                fraction_digits.remove(0);
                point -= 1;
            }
        }

        if integer_digits.is_empty() && fraction_digits.is_empty() {
            return Ok(ExactNumber::zero());
        }

        let mut digits = integer_digits;
        digits.append(&mut fraction_digits);

        // Re-splits the digit string at the radix point, padding with
        // zeros where the point falls outside the stored digits.
        let len = digits.len() as i64;
        let (integer_part, fraction_part): (DigitVec, DigitVec) = if point <= 0 {
            let mut fraction = vec![0; (-point) as usize];
            fraction.extend_from_slice(&digits);
            (vec![], fraction)
        } else if point >= len {
            digits.resize(point as usize, 0);
            (digits, vec![])
        } else {
            let fraction = digits.split_off(point as usize);
            (digits, fraction)
        };

        let base_decimal = decimal_digits_of(BASE);

        // Integer part: repeated division by the base; the remainders
        // read in reverse are the base digits.
        let mut base_digits: DigitVec = Vec::new();
        if !integer_part.is_empty() {
            let mut rest = integer_part;
            strip_leading_zeros(&mut rest);
            while !is_zero_digits(&rest) {
                let (quotient, remainder) = div_rem_digits(&rest, &base_decimal);
                base_digits.push(decimal_digits_value(&remainder));
                rest = quotient;
            }
            base_digits.reverse();
        }
        let base_exponent = base_digits.len() as i32;

        // Fractional part: repeated multiplication by the base; each round
        // extracts one base digit as the integer quotient over 10^L.
        // A finite expansion surfaces within L rounds or not at all.
        if !fraction_part.is_empty() {
            let rounds = fraction_part.len();
            let mut ten_power: DigitVec = vec![1];
            ten_power.resize(rounds + 1, 0);

            let mut rest = fraction_part;
            strip_leading_zeros(&mut rest);
            for _ in 0..rounds {
                if is_zero_digits(&rest) {
                    break;
                }
                rest = decimal_mul(&rest, &base_decimal);
                let (quotient, remainder) = div_rem_digits(&rest, &ten_power);
                base_digits.push(decimal_digits_value(&quotient));
                rest = remainder;
            }
            if !is_zero_digits(&rest) {
                return Err(RealError::InvalidStringNumber);
            }
        }

        if base_digits.is_empty() {
            base_digits.push(0);
        }

        Ok(ExactNumber::new(base_digits, base_exponent, sign))
    }
}

/// Converts a string of decimal digit characters into a digit vector.
fn decimal_str_digits(s: &str) -> Result<DigitVec, RealError> {
    s.bytes()
        .map(|byte| {
            if byte.is_ascii_digit() {
                Ok((byte - b'0') as Digit)
            } else {
                Err(RealError::InvalidStringNumber)
            }
        })
        .collect()
}

/// Returns the big-endian decimal digit vector of `value`.
pub(crate) fn decimal_digits_of(value: Digit) -> DigitVec {
    if value == 0 {
        return vec![0];
    }

    let mut digits = Vec::new();
    let mut rest = value;
    while rest != 0 {
        digits.push(rest % DECIMAL_BASE);
        rest /= DECIMAL_BASE;
    }
    digits.reverse();
    digits
}

/// Returns the value of a decimal integer vector.
///
/// The value must fit a `Digit`; the callers only pass vectors known to be
/// below the working base.
pub(crate) fn decimal_digits_value(digits: &[Digit]) -> Digit {
    digits
        .iter()
        .fold(0, |value, &digit| value * DECIMAL_BASE + digit)
}

/// Multiplies two decimal integer vectors.
pub(crate) fn decimal_mul(a: &[Digit], b: &[Digit]) -> DigitVec {
    let (mut product, _) = mul_digits(a, a.len() as i32, b, b.len() as i32, DECIMAL_BASE);
    strip_leading_zeros(&mut product);
    product
}

/// Adds two decimal integer vectors.
pub(crate) fn decimal_add(a: &[Digit], b: &[Digit]) -> DigitVec {
    let (mut sum, _) = add_digits(a, a.len() as i32, b, b.len() as i32, DECIMAL_BASE);
    strip_leading_zeros(&mut sum);
    sum
}
