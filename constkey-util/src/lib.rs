// -*- coding: utf-8 -*-
// Copyright (C) 2025 The constkey developers
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![forbid(unsafe_code)]

mod errors;
mod ident;

pub use errors::InvalidIdentifierError;
pub use ident::{GO_KEYWORDS, is_go_identifier};

// vim: ts=4 sw=4 expandtab
