// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements formatting into decimal strings.
//!
//! The inverse of parsing: the base digit vector is split at the exponent
//! into integer and fractional base digits, and both halves are converted
//! with the base-10 kernel primitives. The fractional conversion carries a
//! fixed number of decimal places derived from the highest base power
//! involved, so it is exact whenever the fraction has a finite decimal
//! expansion and truncated otherwise.

use super::exact_core::{ExactNumber, Sign};
use super::parse::{decimal_add, decimal_digits_of, decimal_mul};
use crate::digits::digit::Digit;
use crate::digits::digit_vec::DigitVec;
use crate::digits::divrem::div_rem_digits;
use std::fmt;
use std::fmt::Display;

impl<const BASE: Digit> ExactNumber<BASE> {
    /// Produces the canonical decimal representation: an optional leading
    /// `-`, at least one integer digit, `.`, and at least one fractional
    /// digit with no trailing zeros beyond the first.
    pub fn to_decimal_string(&self) -> String {
        if self.is_zero() {
            return String::from("0.0");
        }

        let len = self.digits.len() as i64;
        let exponent = self.exponent as i64;

        // Splits the digit vector at the radix point; positions outside
        // the stored digits are zeros.
        let integer_digits: DigitVec = if exponent <= 0 {
            vec![]
        } else {
            let mut integer = self.digits[..len.min(exponent) as usize].to_vec();
            integer.resize(exponent as usize, 0);
            integer
        };
        let fraction_digits: DigitVec = if exponent >= len {
            vec![]
        } else if exponent <= 0 {
            let mut fraction = vec![0; (-exponent) as usize];
            fraction.extend_from_slice(&self.digits);
            fraction
        } else {
            self.digits[exponent as usize..].to_vec()
        };

        let base_decimal = decimal_digits_of(BASE);

        // Integer half: accumulate-multiply from the highest base digit
        // downwards.
        let mut integer_decimal: DigitVec = vec![0];
        for &digit in &integer_digits {
            integer_decimal = decimal_add(
                &decimal_mul(&integer_decimal, &base_decimal),
                &decimal_digits_of(digit),
            );
        }
        let integer_string = decimal_string(&integer_decimal);

        // Fractional half: each base digit d at depth k contributes the
        // integer quotient d·10^precision / BASE^k.
        let fraction_string = if fraction_digits.is_empty() {
            String::from("0")
        } else {
            let depth = fraction_digits.len();
            let mut powers: Vec<DigitVec> = Vec::with_capacity(depth);
            let mut power = base_decimal.clone();
            for _ in 0..depth {
                powers.push(power.clone());
                power = decimal_mul(&power, &base_decimal);
            }
            let precision = powers[depth - 1].len() + 1;

            let mut fraction_decimal: DigitVec = vec![0];
            for (k, &digit) in fraction_digits.iter().enumerate() {
                if digit == 0 {
                    continue;
                }
                let mut numerator = decimal_digits_of(digit);
                numerator.resize(numerator.len() + precision, 0);
                let (quotient, _) = div_rem_digits(&numerator, &powers[k]);
                fraction_decimal = decimal_add(&fraction_decimal, &quotient);
            }

            let mut fraction_string = decimal_string(&fraction_decimal);
            while fraction_string.len() < precision {
                fraction_string.insert(0, '0');
            }
            while fraction_string.len() > 1 && fraction_string.ends_with('0') {
                fraction_string.pop();
            }
            fraction_string
        };

        let sign = if self.sign == Sign::Negative { "-" } else { "" };
        format!("{sign}{integer_string}.{fraction_string}")
    }
}

fn decimal_string(digits: &[Digit]) -> String {
    digits
        .iter()
        .map(|&digit| char::from(b'0' + digit as u8))
        .collect()
}

impl<const BASE: Digit> Display for ExactNumber<BASE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string())
    }
}
