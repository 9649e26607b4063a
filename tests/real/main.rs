// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod algorithmic;
mod eq_operator;
mod helpers;
mod iterator_division;
mod iterator_multiplication;
mod parse_format;
