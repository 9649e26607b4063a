// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridges digit vectors to `num_bigint` for reference comparisons.

use crate::digits::digit::Digit;
use num_bigint::BigUint;

/// Returns the integer value of a big-endian base-`base` digit vector.
pub(crate) fn digits_to_biguint(digits: &[Digit], base: Digit) -> BigUint {
    digits
        .iter()
        .fold(BigUint::from(0_u8), |value, &digit| value * base + digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_to_biguint() {
        assert_eq!(digits_to_biguint(&[0], 10), BigUint::from(0_u8));
        assert_eq!(digits_to_biguint(&[1, 4, 4], 10), BigUint::from(144_u32));
        assert_eq!(digits_to_biguint(&[4, 24], 30), BigUint::from(144_u32));
    }
}
