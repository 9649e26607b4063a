// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements division by binary-search refinement.

use super::exact_core::{ExactNumber, Sign};
use crate::digits::digit::Digit;
use crate::error::RealError;

impl<const BASE: Digit> ExactNumber<BASE> {
    /// Divides `self` by `divisor` to `max_precision` digits.
    ///
    /// The quotient is searched by bisection: the bracket is narrowed by a
    /// halved distance until the residual `quotient · divisor − numerator`
    /// vanishes within ε = BASE^(−max_precision − 1), or the distance
    /// drops below the precision ceiling. An exact quotient is recovered
    /// whenever it exists within the precision; otherwise `is_upper`
    /// selects which side of the true quotient the magnitude lands on:
    /// rounded up for `true`, truncated for `false`.
    ///
    /// The divisor magnitude must be at least 1: smaller denominators must
    /// be pre-scaled by the caller and are rejected with
    /// [`RealError::InvalidDenominator`]; a zero divisor raises
    /// [`RealError::DivideByZero`].
    pub fn divide(
        &self,
        divisor: &ExactNumber<BASE>,
        is_upper: bool,
        max_precision: u32,
    ) -> Result<ExactNumber<BASE>, RealError> {
        debug_assert!(max_precision > 0);

        let sign = if self.sign == divisor.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        let numerator = self.abs();
        let divisor = divisor.abs();
        let one = ExactNumber::one();

        if divisor.is_zero() {
            return Err(RealError::DivideByZero);
        }
        if numerator.is_zero() {
            return Ok(ExactNumber::zero());
        }
        if divisor == one {
            let mut quotient = numerator;
            quotient.sign = sign;
            quotient.normalize();
            return Ok(quotient);
        }
        if divisor == numerator {
            let mut quotient = one;
            quotient.sign = sign;
            return Ok(quotient);
        }
        if divisor < one {
            return Err(RealError::InvalidDenominator);
        }

        let epsilon = ExactNumber::<BASE> {
            digits: vec![1],
            exponent: -(max_precision as i32),
            sign: Sign::Positive,
        };
        let negative_epsilon = ExactNumber::<BASE> {
            digits: vec![1],
            exponent: -(max_precision as i32),
            sign: Sign::Negative,
        };
        // The exact value one half: the single digit BASE/2.
        let half = ExactNumber::<BASE> {
            digits: vec![BASE / 2],
            exponent: 0,
            sign: Sign::Positive,
        };

        // Bracket: N < D bounds the quotient within (0, 1),
        // otherwise within [1, N].
        let (mut left, right) = if numerator < divisor {
            (ExactNumber::zero(), one)
        } else {
            (one, numerator.clone())
        };

        // Digits carried through the refinement; the tail beyond the
        // requested precision absorbs truncation noise. Truncating
        // tighter can keep the loop from terminating.
        let working_digits = max_precision as usize + 5;

        let mut distance = (&right - &left) * &half;
        let mut quotient = &left + &distance;
        let mut residual = &(&quotient * &divisor) - &numerator;

        while residual.abs() > epsilon && distance.exponent > epsilon.exponent {
            let old_residual = residual.clone();

            // The quotient undershoots: move the bracket up.
            if residual < negative_epsilon {
                left = quotient.clone();
            }

            distance = &distance * &half;
            distance.truncate(working_digits);

            quotient = &left + &distance;
            quotient.truncate(working_digits);

            residual = &(&quotient * &divisor) - &numerator;
            if old_residual == residual {
                break;
            }
        }

        quotient.truncate(max_precision as usize);
        quotient.normalize();

        let residual = &(&quotient * &divisor) - &numerator;
        if !residual.is_zero() {
            // One ulp either way may land on the exact quotient the
            // truncation just missed.
            let mut probe = quotient.clone();
            probe.round_down();
            if (&(&probe * &divisor) - &numerator).is_zero() {
                quotient = probe;
            } else {
                let mut probe = quotient.clone();
                probe.round_up();
                if (&(&probe * &divisor) - &numerator).is_zero() {
                    quotient = probe;
                } else if is_upper {
                    quotient.round_up();
                }
            }
        }

        quotient.sign = sign;
        quotient.normalize();
        Ok(quotient)
    }
}
