// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 The constkey developers

use crate::error::RandomError;

/// Capability to fill buffers with cryptographically secure random bytes.
pub trait EntropySource {
    /// Fill all of `buf` with random bytes.
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandomError>;
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandomError> {
        (**self).fill(buf)
    }
}

/// The operating system's random number generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropySource;

impl EntropySource for OsEntropySource {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandomError> {
        // Get secure random bytes from the operating system.
        getrandom::fill(buf).map_err(|e| RandomError::Source(format!("getrandom failed: {e}")))?;

        // For lengths bigger than 11 bytes the likelihood of the sanity check below
        // triggering on good generator is low enough.
        if buf.len() >= 12 {
            // Sanity check if getrandom implementation
            // is a no-op or otherwise trivially broken.
            let first = buf[0];
            if buf.iter().all(|x| *x == first) {
                return Err(RandomError::Source(format!(
                    "getrandom returned {} identical bytes",
                    buf.len()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_os_fill() {
        let mut buf = [0_u8; 64];
        OsEntropySource.fill(&mut buf).unwrap();
        let first = buf[0];
        assert!(!buf.iter().all(|x| *x == first));

        let mut buf = [];
        OsEntropySource.fill(&mut buf).unwrap();
    }

    #[test]
    fn test_fill_via_ref() {
        let src = OsEntropySource;
        let src_ref: &dyn EntropySource = &src;
        let mut buf = [0_u8; 32];
        (&src_ref).fill(&mut buf).unwrap();
    }
}

// vim: ts=4 sw=4 expandtab
