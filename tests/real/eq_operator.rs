// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::helpers::{init_precision, real};
use exactreal::error::RealError;

#[test]
fn addition_refines_to_equality() {
    init_precision();

    let sum = real("15") + real("15");
    assert!(sum.try_eq(&real("30")).unwrap());
}

#[test]
fn subtraction_refines_to_equality() {
    init_precision();

    let difference = real("20") - real("-5");
    assert!(difference.try_eq(&real("25")).unwrap());
}

#[test]
fn multiplication_refines_to_equality() {
    init_precision();

    let product = real("2") * real("2");
    assert!(real("4").try_eq(&product).unwrap());
}

#[test]
fn division_by_one() {
    init_precision();

    let a = real("12.34");
    let quotient = &a / &real("1");
    assert!(quotient.try_eq(&a).unwrap());
}

#[test]
fn dividing_zero() {
    init_precision();

    let a = real("0");
    let quotient = &a / &real("1.34");
    assert!(quotient.try_eq(&a).unwrap());
}

#[test]
fn divide_by_zero() {
    init_precision();

    // "00.00e-3" is one of the many spellings of zero
    let a = real("00.00e-3");
    let b = real("123.45");

    assert_eq!((&b / &a).try_eq(&real("42")), Err(RealError::DivideByZero));
    assert_eq!(
        (real("12.34") / real("0")).try_cmp(&real("1")),
        Err(RealError::DivideByZero)
    );
}

#[test]
fn decimal_printing_of_a_quotient() {
    init_precision();

    let a = real("990483.1766673839");
    let b = real("2341.566");

    let printed = (&a / &b).to_decimal().unwrap();
    assert!(printed.starts_with("423.000"), "printed {printed}");
}

#[test]
fn comparison_operators() {
    init_precision();

    assert!(real("15") + real("15") == real("30"));
    assert!(real("1.19") < real("1.2"));
    assert!(real("-5") < real("3"));
    assert!(real("20") >= real("20"));
    assert!(real("2") * real("2") != real("5"));
}

#[test]
fn sign_algebra() {
    init_precision();

    let a = real("1.19");
    let b = real("12");

    // (-a)·b = -(a·b)
    assert!((-&a * &b).try_eq(&-(&a * &b)).unwrap());
    // a - b = a + (-b)
    assert!((&a - &b).try_eq(&(&a + &(-&b))).unwrap());
    // a/(-b) = -(a/b)
    let c = real("144");
    assert!((&c / &(-&b)).try_eq(&-(&c / &b)).unwrap());
}
