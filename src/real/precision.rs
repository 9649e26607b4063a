// Copyright 2023 Developers of the exactreal project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The process-wide default precision ceiling.
//!
//! The value is write-once: it is meant to be set at startup, before the
//! first iterator is created, and read thereafter. Nodes can override it
//! individually with [`Real::with_max_precision`](super::Real::with_max_precision).

use std::sync::OnceLock;

static DEFAULT_MAX_PRECISION: OnceLock<u32> = OnceLock::new();

/// Sets the process-wide default maximum precision.
///
/// Returns true if the value was stored, false if a default had already
/// been set (the stored value is kept).
///
/// # Panics
///
/// Panics if `precision` is zero.
pub fn set_default_max_precision(precision: u32) -> bool {
    assert!(precision > 0, "the maximum precision must be positive");

    DEFAULT_MAX_PRECISION.set(precision).is_ok()
}

/// Returns the process-wide default maximum precision, if set.
pub fn default_max_precision() -> Option<u32> {
    DEFAULT_MAX_PRECISION.get().copied()
}
