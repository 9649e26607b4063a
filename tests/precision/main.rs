// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ceiling configuration tests.
//!
//! These run in their own test binary: the process-wide default must stay
//! unset for the undefined-precision path, and write-once semantics can
//! only be observed from a known starting state.

use exactreal::error::RealError;
use exactreal::real::{default_max_precision, set_default_max_precision, Real};

#[test]
fn iterators_fail_without_a_ceiling() {
    let a = Real::<10>::try_from("1.19").unwrap();
    assert_eq!(
        a.begin_iterator().err(),
        Some(RealError::UndefinedMaxPrecision)
    );
    assert_eq!(a.try_eq(&a), Err(RealError::UndefinedMaxPrecision));
    assert_eq!(a.to_decimal(), Err(RealError::UndefinedMaxPrecision));

    // A node override needs no process-wide default.
    let bounded = Real::<10>::try_from("1.19").unwrap().with_max_precision(5);
    assert!(bounded.begin_iterator().is_ok());

    // The default is write-once.
    assert_eq!(default_max_precision(), None);
    assert!(set_default_max_precision(10));
    assert!(!set_default_max_precision(20));
    assert_eq!(default_max_precision(), Some(10));
    assert!(a.begin_iterator().is_ok());
}
