// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 The constkey developers

/// Failure to produce a random string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RandomError {
    /// A random string must have at least one character.
    #[error("length must be > 0")]
    InvalidLength,

    /// The entropy source could not deliver random bytes.
    #[error("Failed to read secure random bytes: {0}")]
    Source(String),
}

// vim: ts=4 sw=4 expandtab
