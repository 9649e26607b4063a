// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::helpers::{init_precision, real, Decimal};
use exactreal::error::RealError;
use exactreal::exact::{ExactNumber, Sign};
use exactreal::real::Real;

#[test]
fn parse_rejects_invalid_literals() {
    for literal in ["", "12..3", "one", "1e/4", "+-3"] {
        assert_eq!(
            Decimal::try_from(literal).err(),
            Some(RealError::InvalidStringNumber),
            "literal {literal}"
        );
    }
}

#[test]
fn parsed_spellings_of_the_same_value_are_equal() {
    init_precision();

    assert!(real("12.5").try_eq(&real("1.25e1")).unwrap());
    assert!(real("12.5").try_eq(&real("125e-1")).unwrap());
    assert!(real("0").try_eq(&real("-0.000")).unwrap());
    assert!(real("+15").try_eq(&real("15")).unwrap());
}

#[test]
fn printing_refines_to_the_ceiling() {
    init_precision();

    assert_eq!(real("12.34").to_decimal().unwrap(), "12.34");
    assert_eq!(real("-0.05").to_decimal().unwrap(), "-0.05");
    assert_eq!(real("0").to_decimal().unwrap(), "0.0");
    assert_eq!(
        (real("15") + real("15")).to_decimal().unwrap(),
        "30.0"
    );
    assert_eq!(
        (real("1.19") * real("1.19")).to_decimal().unwrap(),
        "1.4161"
    );
}

#[test]
fn printing_a_digit_function_number() {
    init_precision();

    // 0.111… truncated at the ceiling
    let repeating = Decimal::from_digit_fn(|_| 1, 0, Sign::Positive);
    assert_eq!(repeating.to_decimal().unwrap(), "0.1111111111");
}

#[test]
fn tuple_construction_matches_parsing() {
    init_precision();

    let from_digits = Decimal::from_digits(vec![1, 1, 9], 1, Sign::Positive);
    assert!(from_digits.try_eq(&real("1.19")).unwrap());

    let negative = Decimal::from_digits(vec![5], 1, Sign::Negative);
    assert!(negative.try_eq(&real("-5")).unwrap());
}

#[test]
fn round_trip_through_printing() {
    init_precision();

    for literal in ["1.19", "-12.34", "15000", "0.005", "42"] {
        let printed = real(literal).to_decimal().unwrap();
        assert!(real(&printed).try_eq(&real(literal)).unwrap(), "literal {literal}");
    }
}

#[test]
fn base_30_round_trip() {
    init_precision();

    type Base30 = Real<30>;
    let a = Base30::try_from("29.5").unwrap();
    assert_eq!(a.to_decimal().unwrap(), "29.5");

    let exact = ExactNumber::<30>::from_decimal_str("144").unwrap();
    assert_eq!(exact.digits(), [4, 24]);
    assert_eq!(exact.to_decimal_string(), "144.0");
}
