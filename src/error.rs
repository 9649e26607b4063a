// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines the failure kinds shared by the whole crate.

use std::fmt;
use std::fmt::Display;

/// An error returned by real number construction, refinement or comparison.
///
/// Every fallible operation in the crate reports one of these kinds;
/// none of them is recoverable at the place it is raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RealError {
    /// The string passed to construct a number is not a valid decimal literal,
    /// or its fractional part has no finite representation in the working base.
    InvalidStringNumber,
    /// An iterator was requested while no maximum precision is set,
    /// neither on the node nor process-wide.
    UndefinedMaxPrecision,
    /// The comparison cannot be decided within the precision ceiling.
    PrecisionExceeded,
    /// The divisor is exactly zero.
    DivideByZero,
    /// The internal division path saw a divisor with 0 < |d| < 1.
    InvalidDenominator,
    /// The divisor approximation interval still contains zero at the ceiling.
    DivergentDivision,
    /// The operation is undefined for the number's representation.
    InvalidRepresentation,
}

impl Display for RealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RealError::InvalidStringNumber => {
                write!(f, "The string passed to construct the number is invalid")
            }
            RealError::UndefinedMaxPrecision => {
                write!(f, "The maximum precision has not been defined")
            }
            RealError::PrecisionExceeded => {
                write!(
                    f,
                    "The number precision is too low to compare both numbers"
                )
            }
            RealError::DivideByZero => {
                write!(f, "Division by zero is undefined")
            }
            RealError::InvalidDenominator => {
                write!(f, "Division with denominators 0 < |d| < 1 is undefined")
            }
            RealError::DivergentDivision => {
                write!(
                    f,
                    "The divisor approximation interval contains 0, so the quotient is unbounded"
                )
            }
            RealError::InvalidRepresentation => {
                write!(
                    f,
                    "The method cannot be called for a number with the current representation"
                )
            }
        }
    }
}

impl std::error::Error for RealError {}
