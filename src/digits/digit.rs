// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines the "digit" of the positional representations.
//!
//! Numbers are sequences of base-β digits, β chosen per instantiation.
//! A digit is stored in an n-bit unsigned integer type,
//! and a larger type must exist and be used as "double-digit":
//! single-cell products of the multiplication routine are computed
//! on the double-digit type, so β² + 2β must fit in it.

pub type Digit = u64;
pub(crate) type DoubleDigit = u128;

/// The base of the user-facing decimal path.
///
/// Parsing and formatting run the kernel primitives with this base;
/// everything else runs with the per-instantiation base.
pub const DECIMAL_BASE: Digit = 10;

/// The largest supported base.
///
/// `MAX_BASE² + 2·MAX_BASE` fits in [`DoubleDigit`].
pub const MAX_BASE: Digit = 1 << 63;

/// Evaluates the base constraints at compile time, per instantiation.
///
/// The base must be at least 2 and no larger than [`MAX_BASE`].
/// It must also be even: the division search narrows its bracket by
/// multiplying with the exact one-half value, the single digit β/2.
pub(crate) struct BaseAssert<const BASE: Digit>;

impl<const BASE: Digit> BaseAssert<BASE> {
    pub(crate) const VALID: () = assert!(
        BASE >= 2 && BASE <= MAX_BASE && BASE % 2 == 0,
        "the base must be even and within [2, MAX_BASE]"
    );
}
