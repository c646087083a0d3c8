// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 The constkey developers

use anyhow::{self as ah, Context as _};
use constkey_decl::{Declaration, MergeOutcome, merge};
use constkey_random::{EntropySource, random_string};
use constkey_util::{InvalidIdentifierError, is_go_identifier};
use std::path::Path;

/// Number of characters in a generated key.
pub const KEY_LEN: usize = 16;

/// Reject names that can't be declared as a Go constant.
pub fn check_name(name: &str) -> ah::Result<()> {
    if is_go_identifier(name) {
        Ok(())
    } else {
        Err(ah::Error::new(InvalidIdentifierError).context(format!("{name:?}")))
    }
}

/// Generate a new truly random key and declare it as `name` in the Go file at `path`.
pub fn run_generate<S>(src: &S, name: &str, path: &Path) -> ah::Result<MergeOutcome>
where
    S: EntropySource + ?Sized,
{
    let key = random_string(src, KEY_LEN).context("Generating key")?;
    let outcome = merge(path, Declaration::new(name, key))?;
    log::debug!("{outcome:?} '{}'.", path.display());
    Ok(outcome)
}


// vim: ts=4 sw=4 expandtab
