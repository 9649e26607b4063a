// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::digits::digit::Digit;
use quickcheck::{Arbitrary, Gen};

/// A non-empty digit vector with every digit below `BASE`.
#[derive(Clone, Debug)]
pub(crate) struct BoundedDigits<const BASE: Digit>(pub(crate) Vec<Digit>);

impl<const BASE: Digit> Arbitrary for BoundedDigits<BASE> {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 24 + 1;
        let digits = (0..len).map(|_| Digit::arbitrary(g) % BASE).collect();
        Self(digits)
    }
}

/// A valid decimal literal: optional sign, digits, an optional fractional
/// part and an optional exponent.
#[derive(Clone, Debug)]
pub(crate) struct DecimalLiteral(pub(crate) String);

const DECIMAL_CHARS: &[u8] = b"0123456789";
const SIGN_CHARS: &[u8] = b"+-";

fn decimal_run(g: &mut Gen, max_len: usize) -> String {
    let len = usize::arbitrary(g) % max_len + 1;
    (0..len)
        .map(|_| *g.choose(DECIMAL_CHARS).unwrap() as char)
        .collect()
}

impl Arbitrary for DecimalLiteral {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut literal = String::new();

        if bool::arbitrary(g) {
            literal.push(*g.choose(SIGN_CHARS).unwrap() as char);
        }
        literal.push_str(&decimal_run(g, 8));
        if bool::arbitrary(g) {
            literal.push('.');
            literal.push_str(&decimal_run(g, 8));
        }
        if bool::arbitrary(g) {
            literal.push('e');
            if bool::arbitrary(g) {
                literal.push(*g.choose(SIGN_CHARS).unwrap() as char);
            }
            // small exponents keep the converted vectors small
            literal.push_str(&(usize::arbitrary(g) % 6).to_string());
        }

        Self(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::{ExactNumber, DECIMAL_BASE};
    use quickcheck::QuickCheck;

    #[test]
    fn generated_literals_parse() {
        fn prop(literal: DecimalLiteral) -> bool {
            ExactNumber::<DECIMAL_BASE>::from_decimal_str(&literal.0).is_ok()
        }

        QuickCheck::new()
            .tests(200)
            .quickcheck(prop as fn(DecimalLiteral) -> bool)
    }
}
