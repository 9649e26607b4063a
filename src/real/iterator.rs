// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the precision iterator.
//!
//! An iterator yields a monotonically tightening sequence of intervals
//! enclosing the represented real. Each step's interval is a pure
//! function of the node and the precision index, so advancing simply
//! recomputes: literals truncate their known digit sequence, algorithmic
//! numbers query their digit function, operation nodes refine both
//! children and recombine.

use super::real_core::{DigitFn, Operation, Real, Rep};
use crate::digits::digit::Digit;
use crate::digits::digit_vec::DigitVec;
use crate::error::RealError;
use crate::exact::{
    add_intervals, div_intervals, mul_intervals, sub_intervals, ExactNumber, Interval, Sign,
};

/// A stateful refiner of one real number's approximation interval.
///
/// Construction binds the iterator read-only to its node and yields the
/// widest interval (precision step 1). Multiple iterators over the same
/// node are independent. Refinement past the precision ceiling is a
/// no-op: the iterator silently pins.
#[derive(Clone)]
pub struct PrecisionIterator<'a, const BASE: Digit> {
    n: u32,
    max_precision: u32,
    state: State<'a, BASE>,
    approximation: Interval<BASE>,
}

#[derive(Clone)]
enum State<'a, const BASE: Digit> {
    Literal(&'a ExactNumber<BASE>),
    Algorithmic {
        digit_fn: &'a DigitFn,
        exponent: i32,
        sign: Sign,
    },
    Operation {
        op: Operation,
        left: Box<PrecisionIterator<'a, BASE>>,
        right: Box<PrecisionIterator<'a, BASE>>,
    },
}

impl<'a, const BASE: Digit> PrecisionIterator<'a, BASE> {
    pub(crate) fn new(real: &'a Real<BASE>) -> Result<PrecisionIterator<'a, BASE>, RealError> {
        let max_precision = real.resolve_max_precision()?;

        let (state, approximation) = match &real.rep {
            Rep::Literal(number) => (State::Literal(number), literal_interval(number, 1)),
            Rep::Algorithmic {
                digit_fn,
                exponent,
                sign,
            } => (
                State::Algorithmic {
                    digit_fn,
                    exponent: *exponent,
                    sign: *sign,
                },
                algorithmic_interval::<BASE>(digit_fn, *exponent, *sign, 1),
            ),
            Rep::Operation { op, left, right } => {
                let left = Box::new(PrecisionIterator::new(left)?);
                let mut right = Box::new(PrecisionIterator::new(right)?);
                let approximation = combine_intervals(*op, &left, &mut right, max_precision)?;
                (State::Operation { op: *op, left, right }, approximation)
            }
        };

        Ok(PrecisionIterator {
            n: 1,
            max_precision,
            state,
            approximation,
        })
    }

    /// The current precision step.
    pub fn precision(&self) -> u32 {
        self.n
    }

    /// The ceiling this iterator refines up to.
    pub fn max_precision(&self) -> u32 {
        self.max_precision
    }

    /// The current approximation interval.
    pub fn interval(&self) -> &Interval<BASE> {
        &self.approximation
    }

    /// Returns true if the iterator has reached its ceiling and further
    /// refinement is a no-op.
    pub fn at_ceiling(&self) -> bool {
        self.n >= self.max_precision
    }

    /// Recalculates the approximation interval with the precision
    /// increased by one; the new interval is a subset of the current one.
    pub fn advance(&mut self) -> Result<(), RealError> {
        if self.at_ceiling() {
            return Ok(());
        }
        self.n += 1;

        self.approximation = match &mut self.state {
            State::Literal(number) => literal_interval(*number, self.n),
            State::Algorithmic {
                digit_fn,
                exponent,
                sign,
            } => algorithmic_interval::<BASE>(*digit_fn, *exponent, *sign, self.n),
            State::Operation { op, left, right } => {
                left.advance()?;
                right.advance()?;
                combine_intervals(*op, &**left, &mut **right, self.max_precision)?
            }
        };
        Ok(())
    }

    /// Advances up to `steps` times, stopping early at the ceiling.
    pub fn advance_n(&mut self, steps: u32) -> Result<(), RealError> {
        for _ in 0..steps {
            if self.at_ceiling() {
                break;
            }
            self.advance()?;
        }
        Ok(())
    }
}

/// The step-`n` interval of a fully known digit sequence.
///
/// The lower bound truncates the sequence to `n` digits; the upper bound
/// adds one unit in the last place, unless the whole sequence is already
/// consumed and the interval collapses to a point. Negative numbers
/// compute on the magnitude and mirror the bounds at zero.
fn literal_interval<const BASE: Digit>(number: &ExactNumber<BASE>, n: u32) -> Interval<BASE> {
    let len = number.digit_count();
    let k = (n as usize).min(len);

    let mut lower = ExactNumber::<BASE> {
        digits: number.digits()[..k].to_vec(),
        exponent: number.exponent(),
        sign: Sign::Positive,
    };

    let mut upper = lower.clone();
    if (n as usize) < len {
        upper.round_up();
    }

    lower.normalize_left();
    upper.normalize_left();

    oriented_interval(lower, upper, number.sign())
}

/// The step-`n` interval of an algorithmic number.
///
/// The first `n` digits are fetched from the digit function; the upper
/// bound is always one unit in the last place above the lower bound,
/// because the unknown tail could be anything.
fn algorithmic_interval<const BASE: Digit>(
    digit_fn: &DigitFn,
    exponent: i32,
    sign: Sign,
    n: u32,
) -> Interval<BASE> {
    let digits: DigitVec = (0..n)
        .map(|index| {
            let digit = digit_fn(index);
            debug_assert!(digit < BASE);
            digit
        })
        .collect();

    let mut lower = ExactNumber::<BASE> {
        digits,
        exponent,
        sign: Sign::Positive,
    };
    let mut upper = lower.clone();
    upper.round_up();

    lower.normalize_left();
    upper.normalize_left();

    oriented_interval(lower, upper, sign)
}

/// Applies the number's sign to magnitude bounds: a negative number
/// mirrors the interval at zero, which also swaps the bounds.
fn oriented_interval<const BASE: Digit>(
    lower: ExactNumber<BASE>,
    upper: ExactNumber<BASE>,
    sign: Sign,
) -> Interval<BASE> {
    match sign {
        Sign::Positive => Interval::new(lower, upper),
        Sign::Negative => Interval::new(-upper, -lower),
    }
}

/// Combines two children's intervals for an operation node.
///
/// Division refines the divisor child as long as its interval encloses
/// zero; at the child's ceiling the division is reported divergent.
fn combine_intervals<const BASE: Digit>(
    op: Operation,
    left: &PrecisionIterator<'_, BASE>,
    right: &mut PrecisionIterator<'_, BASE>,
    max_precision: u32,
) -> Result<Interval<BASE>, RealError> {
    match op {
        Operation::Addition => Ok(add_intervals(left.interval(), right.interval())),
        Operation::Subtraction => Ok(sub_intervals(left.interval(), right.interval())),
        Operation::Multiplication => Ok(mul_intervals(left.interval(), right.interval())),
        Operation::Division => loop {
            match div_intervals(left.interval(), right.interval(), max_precision) {
                Err(RealError::DivergentDivision) if !right.at_ceiling() => {
                    right.advance()?;
                }
                result => return result,
            }
        },
    }
}
