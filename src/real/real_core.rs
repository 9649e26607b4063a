// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines `Real`.

use super::iterator::PrecisionIterator;
use super::precision::default_max_precision;
use crate::digits::digit::{BaseAssert, Digit, DECIMAL_BASE};
use crate::error::RealError;
use crate::exact::{ExactNumber, Sign};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A real number represented lazily by refinable approximation intervals.
///
/// A `Real` is an immutable expression node. Leaves hold either a fully
/// materialized digit sequence (a parsed literal) or a function producing
/// digits on demand; inner nodes hold an arithmetic operation over two
/// child expressions. Nothing is evaluated at construction time: asking
/// for precision (through an iterator, a comparison or printing) walks
/// the expression and composes the children's approximation intervals.
///
/// Children are shared through `Arc`, so cloning an expression is cheap
/// and sub-expressions can appear in several trees. Nodes never change
/// after construction and may be shared read-only across threads.
pub struct Real<const BASE: Digit = DECIMAL_BASE> {
    pub(crate) rep: Rep<BASE>,
    pub(crate) max_precision: Option<u32>,
}

/// The expression node variants; iteration dispatches on the tag.
pub(crate) enum Rep<const BASE: Digit> {
    Literal(ExactNumber<BASE>),
    Algorithmic {
        digit_fn: DigitFn,
        exponent: i32,
        sign: Sign,
    },
    Operation {
        op: Operation,
        left: Arc<Real<BASE>>,
        right: Arc<Real<BASE>>,
    },
}

/// A function producing the digit at a given index.
///
/// The function must be referentially transparent: the same index always
/// yields the same digit.
pub(crate) type DigitFn = Arc<dyn Fn(u32) -> Digit + Send + Sync>;

/// The operation performed by a binary expression node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl<const BASE: Digit> Real<BASE> {
    /// Creates a literal number from an already materialized digit
    /// sequence.
    ///
    /// This is the designated constructor that all other constructors
    /// should call.
    pub(crate) fn literal(number: ExactNumber<BASE>) -> Real<BASE> {
        Real {
            rep: Rep::Literal(number),
            max_precision: None,
        }
    }

    /// Creates a literal number from its digits, exponent and sign.
    ///
    /// Each digit must be in `[0, BASE - 1]`; the representation is
    /// normalized.
    pub fn from_digits(digits: Vec<Digit>, exponent: i32, sign: Sign) -> Real<BASE> {
        Self::literal(ExactNumber::new(digits, exponent, sign))
    }

    /// Creates an algorithmic number whose digits are produced on demand.
    ///
    /// `digit_fn` maps a digit index to a digit in `[0, BASE - 1]` and
    /// must return the same digit for the same index on every call.
    pub fn from_digit_fn(
        digit_fn: impl Fn(u32) -> Digit + Send + Sync + 'static,
        exponent: i32,
        sign: Sign,
    ) -> Real<BASE> {
        #[allow(clippy::let_unit_value)]
        let () = BaseAssert::<BASE>::VALID;

        Real {
            rep: Rep::Algorithmic {
                digit_fn: Arc::new(digit_fn),
                exponent,
                sign,
            },
            max_precision: None,
        }
    }

    /// Overrides the precision ceiling for this node.
    ///
    /// # Panics
    ///
    /// Panics if `max_precision` is zero.
    pub fn with_max_precision(mut self, max_precision: u32) -> Real<BASE> {
        assert!(max_precision > 0, "the maximum precision must be positive");

        self.max_precision = Some(max_precision);
        self
    }

    /// Returns this node's precision override, if any.
    pub fn max_precision(&self) -> Option<u32> {
        self.max_precision
    }

    /// Resolves the ceiling this node's iterators refine up to: the node
    /// override if present, the process-wide default otherwise.
    pub(crate) fn resolve_max_precision(&self) -> Result<u32, RealError> {
        self.max_precision
            .or_else(default_max_precision)
            .ok_or(RealError::UndefinedMaxPrecision)
    }

    /// Constructs an iterator positioned at the widest approximation
    /// interval (precision step 1).
    pub fn begin_iterator(&self) -> Result<PrecisionIterator<'_, BASE>, RealError> {
        PrecisionIterator::new(self)
    }

    /// Constructs an iterator refined all the way to the precision
    /// ceiling.
    pub fn end_iterator(&self) -> Result<PrecisionIterator<'_, BASE>, RealError> {
        let mut iterator = PrecisionIterator::new(self)?;
        let remaining = iterator.max_precision();
        iterator.advance_n(remaining)?;
        Ok(iterator)
    }

    /// Produces the canonical decimal string of the number refined to the
    /// precision ceiling.
    pub fn to_decimal(&self) -> Result<String, RealError> {
        let iterator = self.end_iterator()?;
        Ok(iterator.interval().lower_bound.to_decimal_string())
    }

    /// Returns the materialized digit sequence of a literal number.
    ///
    /// Fails with [`RealError::InvalidRepresentation`] for the other
    /// variants.
    pub fn exact_number(&self) -> Result<&ExactNumber<BASE>, RealError> {
        match &self.rep {
            Rep::Literal(number) => Ok(number),
            _ => Err(RealError::InvalidRepresentation),
        }
    }

    /// Returns the digit at index `n`.
    ///
    /// A literal yields zero past its last digit; an algorithmic number
    /// queries its digit function. Fails with
    /// [`RealError::InvalidRepresentation`] for operation nodes.
    pub fn digit(&self, n: u32) -> Result<Digit, RealError> {
        match &self.rep {
            Rep::Literal(number) => Ok(number.digits().get(n as usize).copied().unwrap_or(0)),
            Rep::Algorithmic { digit_fn, .. } => Ok(digit_fn(n)),
            Rep::Operation { .. } => Err(RealError::InvalidRepresentation),
        }
    }

    /// Returns the sign of a leaf number.
    pub fn sign(&self) -> Result<Sign, RealError> {
        match &self.rep {
            Rep::Literal(number) => Ok(number.sign()),
            Rep::Algorithmic { sign, .. } => Ok(*sign),
            Rep::Operation { .. } => Err(RealError::InvalidRepresentation),
        }
    }

    /// Returns the exponent of a leaf number.
    pub fn exponent(&self) -> Result<i32, RealError> {
        match &self.rep {
            Rep::Literal(number) => Ok(number.exponent()),
            Rep::Algorithmic { exponent, .. } => Ok(*exponent),
            Rep::Operation { .. } => Err(RealError::InvalidRepresentation),
        }
    }
}

impl<const BASE: Digit> Clone for Real<BASE> {
    fn clone(&self) -> Self {
        let rep = match &self.rep {
            Rep::Literal(number) => Rep::Literal(number.clone()),
            Rep::Algorithmic {
                digit_fn,
                exponent,
                sign,
            } => Rep::Algorithmic {
                digit_fn: digit_fn.clone(),
                exponent: *exponent,
                sign: *sign,
            },
            Rep::Operation { op, left, right } => Rep::Operation {
                op: *op,
                left: left.clone(),
                right: right.clone(),
            },
        };

        Real {
            rep,
            max_precision: self.max_precision,
        }
    }
}

impl<const BASE: Digit> fmt::Debug for Real<BASE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rep {
            Rep::Literal(number) => f.debug_tuple("Literal").field(number).finish(),
            Rep::Algorithmic { exponent, sign, .. } => f
                .debug_struct("Algorithmic")
                .field("exponent", exponent)
                .field("sign", sign)
                .finish_non_exhaustive(),
            Rep::Operation { op, left, right } => f
                .debug_struct("Operation")
                .field("op", op)
                .field("left", left)
                .field("right", right)
                .finish(),
        }
    }
}

impl<const BASE: Digit> From<ExactNumber<BASE>> for Real<BASE> {
    fn from(number: ExactNumber<BASE>) -> Self {
        Self::literal(number)
    }
}

impl<const BASE: Digit> From<u64> for Real<BASE> {
    fn from(n: u64) -> Self {
        Self::literal(ExactNumber::from(n))
    }
}

impl<const BASE: Digit> From<i64> for Real<BASE> {
    fn from(i: i64) -> Self {
        Self::literal(ExactNumber::from(i))
    }
}

impl<const BASE: Digit> TryFrom<&str> for Real<BASE> {
    type Error = RealError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Ok(Self::literal(ExactNumber::from_decimal_str(s)?))
    }
}

impl<const BASE: Digit> FromStr for Real<BASE> {
    type Err = RealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
