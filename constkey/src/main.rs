// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 The constkey developers

#![forbid(unsafe_code)]

mod generate;

use crate::generate::{check_name, run_generate};
use anyhow::{self as ah, format_err as err};
use clap::Parser;
use constkey_random::OsEntropySource;
use std::{path::Path, process::ExitCode};

/// Exit code for invalid command line usage.
const EXIT_USAGE: u8 = 2;

/// Exit code for failures while generating or writing the key.
const EXIT_FAILURE: u8 = 1;

/// Generate a random key and store it as a Go constant.
#[derive(Parser, Debug, Clone)]
struct Opts {
    /// Name of the Go constant to declare.
    ///
    /// This must be a valid Go identifier, for example: ApiKey
    name: Option<String>,

    /// Path to the Go source file.
    ///
    /// The file is created with a 'package keys' clause, if it does not exist.
    /// An existing file must declare 'package keys'.
    path: Option<String>,

    /// Show version information and exit.
    #[arg(long, short = 'v')]
    version: bool,
}

impl Opts {
    fn name_and_path(&self) -> ah::Result<(&str, &Path)> {
        let (Some(name), Some(path)) = (&self.name, &self.path) else {
            return Err(err!(
                "'constkey' requires the NAME and PATH arguments. \
                Usage: constkey <NAME> <PATH>. \
                Please run 'constkey --help' for more information."
            ));
        };
        check_name(name)?;
        Ok((name.as_str(), Path::new(path)))
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(
        env_logger::Env::new()
            .filter_or("CONSTKEY_LOG", "warn")
            .write_style_or("CONSTKEY_LOG_STYLE", "auto"),
    );

    let opts = Opts::parse();

    if opts.version {
        println!("constkey version {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let (name, path) = match opts.name_and_path() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match run_generate(&OsEntropySource, name, path) {
        Ok(_) => {
            println!("Wrote {name} to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

// vim: ts=4 sw=4 expandtab
