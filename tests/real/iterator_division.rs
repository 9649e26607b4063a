// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::helpers::{exact, init_precision, interval, real};
use exactreal::error::RealError;
use exactreal::exact::Sign;
use exactreal::real::Real;

#[test]
fn first_approximation_of_a_division() {
    init_precision();

    // 144 / 12 at the first step: [100, 200] / [10, 20] = [5, 20]
    let result = real("144") / real("12");
    let iterator = result.begin_iterator().unwrap();

    assert_eq!(iterator.interval(), &interval("5", "20"));
    assert!(iterator.interval().encloses(&exact("12")));
}

#[test]
fn division_refines_to_the_exact_quotient() {
    init_precision();

    let result = real("144") / real("12");
    assert!(result.try_eq(&real("12")).unwrap());

    let mut iterator = result.begin_iterator().unwrap();
    iterator.advance_n(3).unwrap();
    assert!(iterator.interval().is_point());
    assert_eq!(iterator.interval().lower_bound, exact("12"));
}

#[test]
fn division_with_a_quotient_below_one() {
    init_precision();

    // 12 / 144 at the first step:
    // [10, 20] / [100, 200] = [10/200, 20/100] = [0.05, 0.2]
    let result = real("12") / real("144");
    let iterator = result.begin_iterator().unwrap();

    assert_eq!(iterator.interval(), &interval("0.05", "0.2"));

    // both bounds live left of the radix point
    assert!(iterator.interval().lower_bound.exponent() <= 0);
    assert!(iterator.interval().upper_bound.exponent() <= 0);

    // the enclosure tightens around 0.0833…
    let mut iterator = result.begin_iterator().unwrap();
    iterator.advance_n(5).unwrap();
    assert!(iterator.interval().encloses(&exact("0.0833333333333")));
    assert!(iterator.interval().upper_bound < exact("0.0834"));
}

#[test]
fn division_by_a_divisor_straddling_zero_diverges() {
    init_precision();

    // The divisor's digits are all zero up to the ceiling: its interval
    // never frees itself from zero, and the quotient stays unbounded.
    let divisor: Real = Real::from_digit_fn(|_| 0, 0, Sign::Positive);
    let result = real("1") / divisor;

    assert_eq!(
        result.begin_iterator().err(),
        Some(RealError::DivergentDivision)
    );
}

#[test]
fn division_recovers_once_the_divisor_clears_zero() {
    init_precision();

    // 0.0111…: the first interval [0, 0.1] encloses zero, but refining
    // the divisor clears it. The quotient is then rejected: the divisor
    // magnitude is below one and would need pre-scaling.
    let divisor: Real = Real::from_digit_fn(|index| u64::from(index > 0), 0, Sign::Positive);
    let result = real("1") / divisor;

    assert_eq!(
        result.begin_iterator().err(),
        Some(RealError::InvalidDenominator)
    );
}
