// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub(crate) mod add;
pub(crate) mod cmp;
pub(crate) mod digit;
pub(crate) mod digit_vec;
pub(crate) mod divrem;
pub(crate) mod mul;
pub(crate) mod round;
pub(crate) mod sub;
