// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 The constkey developers

//! # Go key declaration files
//!
//! A declaration file looks like this:
//!
//! ```text
//! package keys
//!
//! const Name1 = "value1"
//!
//! const Name2 = "value2"
//! ```
//!
//! Files are inspected line by line. There is no Go parser involved.

#![forbid(unsafe_code)]

mod error;
mod merge;
mod quote;
mod scan;

pub use error::MergeError;
pub use merge::{Declaration, MergeOutcome, merge};
pub use quote::quote_go;
pub use scan::{declares_name, declares_package};

/// Go package that all declaration files belong to.
pub const PACKAGE: &str = "keys";

/// Keyword that starts a package clause.
pub const PACKAGE_KEYWORD: &str = "package";

/// Keyword that starts a constant declaration.
pub const CONST_KEYWORD: &str = "const";

// vim: ts=4 sw=4 expandtab
