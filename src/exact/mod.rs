// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod cmp;
mod div;
mod exact_core;
mod format;
mod from;
mod interval;
mod ops;
mod parse;

pub use crate::digits::digit::{Digit, DECIMAL_BASE, MAX_BASE};
pub use exact_core::{ExactNumber, Sign};
pub use interval::Interval;

pub(crate) use interval::{add_intervals, div_intervals, mul_intervals, sub_intervals};
