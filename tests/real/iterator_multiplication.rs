// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::helpers::{init_precision, interval, real};

#[test]
fn chained_multiplication_with_carry() {
    init_precision();

    let a = real("1.19");
    let b = real("1.19");
    let c = real("1.19");

    for result in [(&a * &b) * &c, &a * (&b * &c)] {
        let mut iterator = result.begin_iterator().unwrap();

        // ([1, 2] * [1, 2]) * [1, 2] = [1, 8]
        assert_eq!(iterator.interval(), &interval("1", "8"));

        // ([1.1, 1.2] * [1.1, 1.2]) * [1.1, 1.2] = [1.331, 1.728]
        iterator.advance().unwrap();
        assert_eq!(iterator.interval(), &interval("1.331", "1.728"));

        // the digit sequences are consumed: the exact point product
        iterator.advance().unwrap();
        assert_eq!(iterator.interval(), &interval("1.685159", "1.685159"));

        // full precision reached, no more changes are made
        iterator.advance().unwrap();
        assert_eq!(iterator.interval(), &interval("1.685159", "1.685159"));
    }
}

#[test]
fn chained_multiplication_without_carry() {
    init_precision();

    let a = real("1.11");
    let b = real("1.11");
    let c = real("1.11");

    for result in [(&a * &b) * &c, &a * (&b * &c)] {
        let mut iterator = result.begin_iterator().unwrap();

        assert_eq!(iterator.interval(), &interval("1", "8"));

        iterator.advance().unwrap();
        assert_eq!(iterator.interval(), &interval("1.331", "1.728"));

        iterator.advance().unwrap();
        assert_eq!(iterator.interval(), &interval("1.367631", "1.367631"));

        iterator.advance().unwrap();
        assert_eq!(iterator.interval(), &interval("1.367631", "1.367631"));
    }
}

#[test]
fn multiplication_with_mixed_signs() {
    init_precision();

    let product = real("-1.19") * real("1.19");
    let mut iterator = product.begin_iterator().unwrap();

    // [-2, -1] * [1, 2] = [-4, -1]
    assert_eq!(iterator.interval(), &interval("-4", "-1"));

    iterator.advance_n(2).unwrap();
    assert_eq!(iterator.interval(), &interval("-1.4161", "-1.4161"));
}
