// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 The constkey developers

use crate::{
    CONST_KEYWORD, PACKAGE, PACKAGE_KEYWORD,
    error::MergeError,
    quote::quote_go,
    scan::{declares_name, declares_package},
};
use std::{
    fs::{DirBuilder, OpenOptions},
    io::{ErrorKind, Write as _},
    path::Path,
};

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt as _, OpenOptionsExt as _};

/// A single named constant to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    name: String,
    value: String,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The Go source line, including the trailing newline.
    pub fn line(&self) -> String {
        format!("{CONST_KEYWORD} {} = {}\n", self.name, quote_go(&self.value))
    }
}

/// What [`merge`] did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The file did not exist and has been created.
    Created,
    /// The declaration has been appended to the existing file.
    Appended,
}

fn create_parent_dir(path: &Path) -> Result<(), MergeError> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    if dir.as_os_str().is_empty() || dir == Path::new(".") {
        return Ok(());
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o755);
    builder.create(dir).map_err(|source| MergeError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_new(path: &Path, decl: &Declaration) -> Result<(), MergeError> {
    let content = format!("{PACKAGE_KEYWORD} {PACKAGE}\n\n{}", decl.line());

    let mut opts = OpenOptions::new();
    // Never clobber a file that appeared after we found it missing.
    opts.write(true).create_new(true);
    #[cfg(unix)]
    opts.mode(0o644);

    let write_err = |source| MergeError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = opts.open(path).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)
}

fn append(path: &Path, data: &[u8], decl: &Declaration) -> Result<(), MergeError> {
    let src = String::from_utf8_lossy(data);

    if !declares_package(&src, PACKAGE) {
        return Err(MergeError::WrongPackage {
            path: path.to_path_buf(),
            package: PACKAGE.to_string(),
        });
    }
    if declares_name(&src, decl.name()) {
        return Err(MergeError::DuplicateName {
            path: path.to_path_buf(),
            name: decl.name().to_string(),
        });
    }

    let mut tail = String::new();
    if data.last().is_some_and(|b| *b != b'\n') {
        tail.push('\n');
    }
    if !src.trim().is_empty() {
        tail.push('\n');
    }
    tail.push_str(&decl.line());

    let write_err = |source| MergeError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(tail.as_bytes()).map_err(write_err)
}

/// Add `decl` to the Go key file at `path`.
///
/// A missing file is created with a `package keys` clause.
/// An existing file must declare `package keys` and must not already
/// declare a constant of the same name. Otherwise it is left untouched.
///
/// There is no locking. Two processes merging into the same file
/// at the same time can both pass the checks before either one writes.
pub fn merge(path: &Path, decl: Declaration) -> Result<MergeOutcome, MergeError> {
    create_parent_dir(path)?;

    match std::fs::read(path) {
        Ok(data) => {
            log::debug!("Appending '{}' to existing '{}'.", decl.name(), path.display());
            append(path, &data, &decl)?;
            Ok(MergeOutcome::Appended)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("Creating '{}' with '{}'.", path.display(), decl.name());
            write_new(path, &decl)?;
            Ok(MergeOutcome::Created)
        }
        Err(source) => Err(MergeError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}


// vim: ts=4 sw=4 expandtab
