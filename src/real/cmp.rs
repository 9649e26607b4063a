// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements comparison by interval refinement.
//!
//! Two reals are compared by refining both approximation intervals until
//! they become disjoint (the order is decided) or both collapse onto the
//! same point (the numbers are equal). When both iterators pin at their
//! ceilings with the intervals still overlapping, the comparison is
//! undecidable at the configured precision.

use super::real_core::Real;
use crate::digits::digit::Digit;
use crate::error::RealError;
use std::cmp::Ordering;

impl<const BASE: Digit> Real<BASE> {
    /// Orders two reals by interval refinement.
    ///
    /// `Ordering::Equal` is returned only when both intervals collapse to
    /// the same point; overlapping intervals at the precision ceiling
    /// fail with [`RealError::PrecisionExceeded`].
    pub fn try_cmp(&self, other: &Real<BASE>) -> Result<Ordering, RealError> {
        let mut lhs = self.begin_iterator()?;
        let mut rhs = other.begin_iterator()?;

        loop {
            let a = lhs.interval();
            let b = rhs.interval();

            if a.upper_bound < b.lower_bound {
                return Ok(Ordering::Less);
            }
            if b.upper_bound < a.lower_bound {
                return Ok(Ordering::Greater);
            }
            if a.is_point() && b.is_point() && a.lower_bound == b.lower_bound {
                return Ok(Ordering::Equal);
            }

            if lhs.at_ceiling() && rhs.at_ceiling() {
                return Err(RealError::PrecisionExceeded);
            }
            lhs.advance()?;
            rhs.advance()?;
        }
    }

    pub fn try_eq(&self, other: &Real<BASE>) -> Result<bool, RealError> {
        Ok(self.try_cmp(other)? == Ordering::Equal)
    }

    pub fn try_lt(&self, other: &Real<BASE>) -> Result<bool, RealError> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    pub fn try_gt(&self, other: &Real<BASE>) -> Result<bool, RealError> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    pub fn try_le(&self, other: &Real<BASE>) -> Result<bool, RealError> {
        Ok(self.try_cmp(other)? != Ordering::Greater)
    }

    pub fn try_ge(&self, other: &Real<BASE>) -> Result<bool, RealError> {
        Ok(self.try_cmp(other)? != Ordering::Less)
    }
}

/// Value equality by refinement.
///
/// # Panics
///
/// Panics when the comparison fails, e.g. with precision exceeded or a
/// division error surfacing during refinement. Use [`Real::try_eq`] to
/// handle those cases.
impl<const BASE: Digit> PartialEq for Real<BASE> {
    fn eq(&self, other: &Self) -> bool {
        match self.try_cmp(other) {
            Ok(ordering) => ordering == Ordering::Equal,
            Err(error) => panic!("{error}"),
        }
    }
}

/// Value ordering by refinement.
///
/// # Panics
///
/// Panics when the comparison fails; use [`Real::try_cmp`] to handle
/// those cases.
impl<const BASE: Digit> PartialOrd for Real<BASE> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.try_cmp(other) {
            Ok(ordering) => Some(ordering),
            Err(error) => panic!("{error}"),
        }
    }
}
