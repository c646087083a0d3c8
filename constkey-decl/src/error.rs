// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 The constkey developers

use std::path::PathBuf;

/// Failure to add a declaration to a file.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Existing file '{}' does not declare `package {package}`", .path.display())]
    WrongPackage { path: PathBuf, package: String },

    #[error("Key \"{name}\" already exists in '{}'", .path.display())]
    DuplicateName { path: PathBuf, name: String },
}

// vim: ts=4 sw=4 expandtab
