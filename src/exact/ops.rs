// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the arithmetic operators.
//!
//! The kernel primitives combine magnitudes only; the operators route the
//! operands through addition or subtraction by case analysis on the signs
//! so magnitudes are combined correctly, and derive the result sign.

use super::exact_core::{ExactNumber, Sign};
use crate::digits::add::add_digits;
use crate::digits::digit::Digit;
use crate::digits::mul::mul_digits;
use crate::digits::sub::sub_digits;
use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

/// Adds the magnitudes of `a` and `b`, keeping `sign` for the output.
fn add_magnitudes<const BASE: Digit>(
    a: &ExactNumber<BASE>,
    b: &ExactNumber<BASE>,
    sign: Sign,
) -> ExactNumber<BASE> {
    let (digits, exponent) = add_digits(&a.digits, a.exponent, &b.digits, b.exponent, BASE);
    ExactNumber::new(digits, exponent, sign)
}

/// Subtracts the magnitude of `b` from the greater magnitude of `a`,
/// keeping `sign` for the output.
fn sub_magnitudes<const BASE: Digit>(
    a: &ExactNumber<BASE>,
    b: &ExactNumber<BASE>,
    sign: Sign,
) -> ExactNumber<BASE> {
    let (digits, exponent) = sub_digits(&a.digits, a.exponent, &b.digits, b.exponent, BASE);
    ExactNumber::new(digits, exponent, sign)
}

impl<'a, 'b, const BASE: Digit> Add<&'b ExactNumber<BASE>> for &'a ExactNumber<BASE> {
    type Output = ExactNumber<BASE>;

    fn add(self, rhs: &ExactNumber<BASE>) -> Self::Output {
        if self.sign == rhs.sign {
            add_magnitudes(self, rhs, self.sign)
        } else {
            match rhs.cmp_magnitude(self) {
                Ordering::Less => sub_magnitudes(self, rhs, self.sign),
                Ordering::Equal => ExactNumber::zero(),
                Ordering::Greater => sub_magnitudes(rhs, self, rhs.sign),
            }
        }
    }
}

impl<'a, 'b, const BASE: Digit> Sub<&'b ExactNumber<BASE>> for &'a ExactNumber<BASE> {
    type Output = ExactNumber<BASE>;

    fn sub(self, rhs: &ExactNumber<BASE>) -> Self::Output {
        if self.sign != rhs.sign {
            add_magnitudes(self, rhs, self.sign)
        } else {
            match rhs.cmp_magnitude(self) {
                Ordering::Less => sub_magnitudes(self, rhs, self.sign),
                Ordering::Equal => ExactNumber::zero(),
                Ordering::Greater => sub_magnitudes(rhs, self, -self.sign),
            }
        }
    }
}

impl<'a, 'b, const BASE: Digit> Mul<&'b ExactNumber<BASE>> for &'a ExactNumber<BASE> {
    type Output = ExactNumber<BASE>;

    fn mul(self, rhs: &ExactNumber<BASE>) -> Self::Output {
        let (digits, exponent) = mul_digits(&self.digits, self.exponent, &rhs.digits, rhs.exponent, BASE);

        let sign = if self.sign == rhs.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        ExactNumber::new(digits, exponent, sign)
    }
}

impl<'a, const BASE: Digit> Add<&'a ExactNumber<BASE>> for ExactNumber<BASE> {
    type Output = ExactNumber<BASE>;

    fn add(self, rhs: &ExactNumber<BASE>) -> Self::Output {
        (&self).add(rhs)
    }
}

impl<'a, const BASE: Digit> Add<ExactNumber<BASE>> for &'a ExactNumber<BASE> {
    type Output = ExactNumber<BASE>;

    fn add(self, rhs: ExactNumber<BASE>) -> Self::Output {
        self.add(&rhs)
    }
}

impl<const BASE: Digit> Add for ExactNumber<BASE> {
    type Output = ExactNumber<BASE>;

    fn add(self, rhs: Self) -> Self::Output {
        (&self).add(&rhs)
    }
}

impl<'a, const BASE: Digit> Sub<&'a ExactNumber<BASE>> for ExactNumber<BASE> {
    type Output = ExactNumber<BASE>;

    fn sub(self, rhs: &ExactNumber<BASE>) -> Self::Output {
        (&self).sub(rhs)
    }
}

impl<'a, const BASE: Digit> Sub<ExactNumber<BASE>> for &'a ExactNumber<BASE> {
    type Output = ExactNumber<BASE>;

    fn sub(self, rhs: ExactNumber<BASE>) -> Self::Output {
        self.sub(&rhs)
    }
}

impl<const BASE: Digit> Sub for ExactNumber<BASE> {
    type Output = ExactNumber<BASE>;

    fn sub(self, rhs: Self) -> Self::Output {
        (&self).sub(&rhs)
    }
}

impl<'a, const BASE: Digit> Mul<&'a ExactNumber<BASE>> for ExactNumber<BASE> {
    type Output = ExactNumber<BASE>;

    fn mul(self, rhs: &ExactNumber<BASE>) -> Self::Output {
        (&self).mul(rhs)
    }
}

impl<'a, const BASE: Digit> Mul<ExactNumber<BASE>> for &'a ExactNumber<BASE> {
    type Output = ExactNumber<BASE>;

    fn mul(self, rhs: ExactNumber<BASE>) -> Self::Output {
        self.mul(&rhs)
    }
}

impl<const BASE: Digit> Mul for ExactNumber<BASE> {
    type Output = ExactNumber<BASE>;

    fn mul(self, rhs: Self) -> Self::Output {
        (&self).mul(&rhs)
    }
}

impl<const BASE: Digit> Neg for ExactNumber<BASE> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}

impl<'a, const BASE: Digit> Neg for &'a ExactNumber<BASE> {
    type Output = ExactNumber<BASE>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
