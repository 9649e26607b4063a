// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use exactreal::exact::{Digit, ExactNumber, Interval, DECIMAL_BASE};
use exactreal::real::{set_default_max_precision, Real};

pub type Decimal = Real<DECIMAL_BASE>;
pub type DecimalNumber = ExactNumber<DECIMAL_BASE>;
pub type DecimalInterval = Interval<DECIMAL_BASE>;

/// All scenarios run at the shared default ceiling.
pub fn init_precision() {
    set_default_max_precision(10);
}

pub fn real(literal: &str) -> Decimal {
    Decimal::try_from(literal).unwrap()
}

pub fn exact(literal: &str) -> DecimalNumber {
    DecimalNumber::from_decimal_str(literal).unwrap()
}

pub fn interval(lower: &str, upper: &str) -> DecimalInterval {
    DecimalInterval::new(exact(lower), exact(upper))
}

/// 0.1999…: the first digit is 1, every further digit is 9.
pub fn one_and_nines(index: u32) -> Digit {
    if index == 0 {
        1
    } else {
        9
    }
}

/// 0.111…: every digit is 1.
pub fn ones(_index: u32) -> Digit {
    1
}

/// 0.111: three ones followed by zeros.
pub fn one_one_one(index: u32) -> Digit {
    if index < 3 {
        1
    } else {
        0
    }
}
