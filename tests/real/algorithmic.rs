// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::helpers::{init_precision, one_and_nines, one_one_one, ones, real, Decimal};
use exactreal::error::RealError;
use exactreal::exact::Sign;

#[test]
fn algorithmic_numbers_compare_against_literals() {
    init_precision();

    // 0.111… < 0.112
    let repeating = Decimal::from_digit_fn(ones, 0, Sign::Positive);
    assert!(repeating.try_lt(&real("0.112")).unwrap());
    assert!(real("0.11").try_lt(&repeating).unwrap());
}

#[test]
fn nines_tail_is_indistinguishable_from_the_carry() {
    init_precision();

    // 0.1999… = 0.2: every refinement keeps the upper bound at 0.2, so
    // neither equality nor order can ever be decided.
    let nines = Decimal::from_digit_fn(one_and_nines, 0, Sign::Positive);
    assert_eq!(nines.try_eq(&real("0.2")), Err(RealError::PrecisionExceeded));

    // but a separated literal is ordered after finitely many steps
    assert!(nines.try_lt(&real("0.21")).unwrap());
    assert!(nines.try_gt(&real("0.19")).unwrap());
}

#[test]
fn unknown_tail_keeps_equality_undecidable() {
    init_precision();

    // 0.111 as a digit function: the tail of zeros is never known to be
    // all zeros, so the enclosure never collapses onto the literal.
    let padded = Decimal::from_digit_fn(one_one_one, 0, Sign::Positive);
    assert_eq!(
        padded.try_eq(&real("0.111")),
        Err(RealError::PrecisionExceeded)
    );
    // order against separated values still resolves
    assert!(padded.try_ge(&real("0.111")).is_err());
    assert!(padded.try_lt(&real("0.12")).unwrap());
}

#[test]
fn negative_algorithmic_numbers() {
    init_precision();

    // -0.111… mirrors the bounds
    let negative = Decimal::from_digit_fn(ones, 0, Sign::Negative);
    assert!(negative.try_lt(&real("-0.11")).unwrap());
    assert!(negative.try_gt(&real("-0.12")).unwrap());
}

#[test]
fn arithmetic_over_algorithmic_operands() {
    init_precision();

    // 0.111… + 0.111… is strictly between 0.222 and 0.2223
    let a = Decimal::from_digit_fn(ones, 0, Sign::Positive);
    let b = Decimal::from_digit_fn(ones, 0, Sign::Positive);
    let sum = &a + &b;

    assert!(sum.try_gt(&real("0.222")).unwrap());
    assert!(sum.try_lt(&real("0.2223")).unwrap());
}
