// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the lazy arithmetic operators.
//!
//! Applying an operator performs no arithmetic: it builds a fresh
//! operation node referencing both operands. The work happens when the
//! node is refined through an iterator.

use super::real_core::{Operation, Real, Rep};
use crate::digits::digit::Digit;
use crate::exact::ExactNumber;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

fn operation<const BASE: Digit>(
    op: Operation,
    left: &Real<BASE>,
    right: &Real<BASE>,
) -> Real<BASE> {
    Real {
        rep: Rep::Operation {
            op,
            left: Arc::new(left.clone()),
            right: Arc::new(right.clone()),
        },
        max_precision: None,
    }
}

impl<'a, 'b, const BASE: Digit> Add<&'b Real<BASE>> for &'a Real<BASE> {
    type Output = Real<BASE>;

    fn add(self, rhs: &Real<BASE>) -> Self::Output {
        operation(Operation::Addition, self, rhs)
    }
}

impl<'a, const BASE: Digit> Add<&'a Real<BASE>> for Real<BASE> {
    type Output = Real<BASE>;

    fn add(self, rhs: &Real<BASE>) -> Self::Output {
        (&self).add(rhs)
    }
}

impl<'a, const BASE: Digit> Add<Real<BASE>> for &'a Real<BASE> {
    type Output = Real<BASE>;

    fn add(self, rhs: Real<BASE>) -> Self::Output {
        self.add(&rhs)
    }
}

impl<const BASE: Digit> Add for Real<BASE> {
    type Output = Real<BASE>;

    fn add(self, rhs: Self) -> Self::Output {
        (&self).add(&rhs)
    }
}

impl<'a, 'b, const BASE: Digit> Sub<&'b Real<BASE>> for &'a Real<BASE> {
    type Output = Real<BASE>;

    fn sub(self, rhs: &Real<BASE>) -> Self::Output {
        operation(Operation::Subtraction, self, rhs)
    }
}

impl<'a, const BASE: Digit> Sub<&'a Real<BASE>> for Real<BASE> {
    type Output = Real<BASE>;

    fn sub(self, rhs: &Real<BASE>) -> Self::Output {
        (&self).sub(rhs)
    }
}

impl<'a, const BASE: Digit> Sub<Real<BASE>> for &'a Real<BASE> {
    type Output = Real<BASE>;

    fn sub(self, rhs: Real<BASE>) -> Self::Output {
        self.sub(&rhs)
    }
}

impl<const BASE: Digit> Sub for Real<BASE> {
    type Output = Real<BASE>;

    fn sub(self, rhs: Self) -> Self::Output {
        (&self).sub(&rhs)
    }
}

impl<'a, 'b, const BASE: Digit> Mul<&'b Real<BASE>> for &'a Real<BASE> {
    type Output = Real<BASE>;

    fn mul(self, rhs: &Real<BASE>) -> Self::Output {
        operation(Operation::Multiplication, self, rhs)
    }
}

impl<'a, const BASE: Digit> Mul<&'a Real<BASE>> for Real<BASE> {
    type Output = Real<BASE>;

    fn mul(self, rhs: &Real<BASE>) -> Self::Output {
        (&self).mul(rhs)
    }
}

impl<'a, const BASE: Digit> Mul<Real<BASE>> for &'a Real<BASE> {
    type Output = Real<BASE>;

    fn mul(self, rhs: Real<BASE>) -> Self::Output {
        self.mul(&rhs)
    }
}

impl<const BASE: Digit> Mul for Real<BASE> {
    type Output = Real<BASE>;

    fn mul(self, rhs: Self) -> Self::Output {
        (&self).mul(&rhs)
    }
}

impl<'a, 'b, const BASE: Digit> Div<&'b Real<BASE>> for &'a Real<BASE> {
    type Output = Real<BASE>;

    fn div(self, rhs: &Real<BASE>) -> Self::Output {
        operation(Operation::Division, self, rhs)
    }
}

impl<'a, const BASE: Digit> Div<&'a Real<BASE>> for Real<BASE> {
    type Output = Real<BASE>;

    fn div(self, rhs: &Real<BASE>) -> Self::Output {
        (&self).div(rhs)
    }
}

impl<'a, const BASE: Digit> Div<Real<BASE>> for &'a Real<BASE> {
    type Output = Real<BASE>;

    fn div(self, rhs: Real<BASE>) -> Self::Output {
        self.div(&rhs)
    }
}

impl<const BASE: Digit> Div for Real<BASE> {
    type Output = Real<BASE>;

    fn div(self, rhs: Self) -> Self::Output {
        (&self).div(&rhs)
    }
}

impl<'a, const BASE: Digit> Neg for &'a Real<BASE> {
    type Output = Real<BASE>;

    fn neg(self) -> Self::Output {
        // Operation nodes carry no sign of their own; negation is the
        // subtraction 0 - x.
        operation(Operation::Subtraction, &Real::literal(ExactNumber::zero()), self)
    }
}

impl<const BASE: Digit> Neg for Real<BASE> {
    type Output = Real<BASE>;

    fn neg(self) -> Self::Output {
        -&self
    }
}
