// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod digits;
pub mod error;
pub mod exact;
pub mod real;

#[cfg(test)]
pub mod testing_tools;
