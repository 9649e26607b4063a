// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements comparing operations.

use super::digit::Digit;
use std::cmp::Ordering;

/// Returns an `Ordering` between `a` and `b`, both interpreted as aligned
/// digit sequences: two digits at the same index share a unit weight.
///
/// The vectors may have different lengths; missing digits count as zero,
/// so a longer vector compares greater only if its extra digits are not
/// all zero.
pub(crate) fn cmp_aligned_digits(a: &[Digit], b: &[Digit]) -> Ordering {
    for (&a_digit, &b_digit) in a.iter().zip(b.iter()) {
        match a_digit.cmp(&b_digit) {
            Ordering::Equal => continue,
            ordering => return ordering,
        }
    }

    match a.len().cmp(&b.len()) {
        Ordering::Equal => Ordering::Equal,
        Ordering::Greater => {
            if a[b.len()..].iter().all(|&digit| digit == 0) {
                Ordering::Equal
            } else {
                Ordering::Greater
            }
        }
        Ordering::Less => {
            if b[a.len()..].iter().all(|&digit| digit == 0) {
                Ordering::Equal
            } else {
                Ordering::Less
            }
        }
    }
}
