// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 The constkey developers

use crate::{CONST_KEYWORD, PACKAGE_KEYWORD};

/// Returns the remainder of `line` after `keyword` and one space.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    line.strip_prefix(keyword)?.strip_prefix(' ')
}

/// Check whether the package clause of `src` names `package`.
///
/// The first line starting with `package ` decides.
/// Returns `false` if there is no such line at all.
pub fn declares_package(src: &str, package: &str) -> bool {
    for line in src.split('\n') {
        let line = line.trim();
        if let Some(name) = strip_keyword(line, PACKAGE_KEYWORD) {
            return name == package;
        }
    }
    false
}

/// Check whether any `const` line of `src` binds `name`.
///
/// Only the single line form `const Name = ...` is recognized.
/// Grouped `const ( ... )` blocks are not looked into.
pub fn declares_name(src: &str, name: &str) -> bool {
    src.split('\n')
        .map(str::trim)
        .filter(|line| strip_keyword(line, CONST_KEYWORD).is_some())
        .any(|line| line.split_whitespace().nth(1) == Some(name))
}


// vim: ts=4 sw=4 expandtab
