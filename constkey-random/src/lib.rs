// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 The constkey developers

//! # Unbiased random alphanumeric strings
//!
//! Bytes from an [`EntropySource`] are mapped onto the 62 symbol alphabet
//! `[a-zA-Z0-9]` by rejection sampling:
//!
//! | Byte value   | Action                         |
//! | ------------ | ------------------------------ |
//! | 0 ..= 247    | accept, symbol `ALPHABET[b % 62]` |
//! | 248 ..= 255  | reject                         |
//!
//! 248 is the largest multiple of 62 that fits into a byte,
//! so every accepted symbol is exactly uniform.

#![forbid(unsafe_code)]

mod alnum;
mod error;
mod source;

pub use alnum::{ALPHABET, REJECT_LIMIT, random_string, secure_random_string};
pub use error::RandomError;
pub use source::{EntropySource, OsEntropySource};

// vim: ts=4 sw=4 expandtab
