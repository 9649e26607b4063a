// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod cmp;
mod iterator;
mod precision;
mod real_core;
mod real_ops;

pub use iterator::PrecisionIterator;
pub use precision::{default_max_precision, set_default_max_precision};
pub use real_core::{Operation, Real};
