// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 The constkey developers

use crate::{
    error::RandomError,
    source::{EntropySource, OsEntropySource},
};

/// The symbols of a generated string.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random bytes at or above this value are discarded.
pub const REJECT_LIMIT: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;

/// Number of random bytes fetched per generated character.
const BATCH_FACTOR: usize = 2;

/// Generate a string of `length` characters drawn uniformly from [`ALPHABET`].
pub fn random_string<S>(src: &S, length: usize) -> Result<String, RandomError>
where
    S: EntropySource + ?Sized,
{
    if length == 0 {
        return Err(RandomError::InvalidLength);
    }

    let mut out = String::with_capacity(length);
    let mut buf = vec![0_u8; length.saturating_mul(BATCH_FACTOR)];
    let mut rejected: usize = 0;

    while out.len() < length {
        src.fill(&mut buf)?;
        for &b in &buf {
            if b >= REJECT_LIMIT {
                rejected += 1;
                continue;
            }
            out.push(char::from(ALPHABET[usize::from(b) % ALPHABET.len()]));
            if out.len() == length {
                break;
            }
        }
    }

    log::debug!("Generated {length} random characters ({rejected} bytes rejected).");
    Ok(out)
}

/// Generate a random string from the operating system's random number generator.
pub fn secure_random_string(length: usize) -> Result<String, RandomError> {
    random_string(&OsEntropySource, length)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;

    /// Produces the byte sequence 0, 1, 2, ... 255, 0, 1, ...
    struct CountingSource {
        next: Cell<u8>,
    }

    impl CountingSource {
        fn starting_at(next: u8) -> Self {
            Self {
                next: Cell::new(next),
            }
        }
    }

    impl EntropySource for CountingSource {
        fn fill(&self, buf: &mut [u8]) -> Result<(), RandomError> {
            for b in buf {
                *b = self.next.get();
                self.next.set(self.next.get().wrapping_add(1));
            }
            Ok(())
        }
    }

    /// Delivers only rejected bytes, then fails on the given call.
    struct FailingSource {
        fail_at_call: usize,
        calls: Cell<usize>,
    }

    impl EntropySource for FailingSource {
        fn fill(&self, buf: &mut [u8]) -> Result<(), RandomError> {
            self.calls.set(self.calls.get() + 1);
            if self.calls.get() >= self.fail_at_call {
                return Err(RandomError::Source("injected failure".to_string()));
            }
            buf.fill(0xFF);
            Ok(())
        }
    }

    #[test]
    fn test_limit() {
        assert_eq!(REJECT_LIMIT, 248);
        assert_eq!(256 % ALPHABET.len(), 8);
    }

    #[test]
    fn test_length() {
        for len in [1, 2, 15, 16, 17, 64, 1000] {
            let s = secure_random_string(len).unwrap();
            assert_eq!(s.len(), len);
            assert_eq!(s.chars().count(), len);
        }
        assert_eq!(secure_random_string(0), Err(RandomError::InvalidLength));
        assert_eq!(
            random_string(&CountingSource::starting_at(0), 0),
            Err(RandomError::InvalidLength)
        );
    }

    #[test]
    fn test_alphabet() {
        for _ in 0..200 {
            let s = secure_random_string(16).unwrap();
            assert!(s.bytes().all(|c| ALPHABET.contains(&c)), "{s}");
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()), "{s}");
        }
    }

    #[test]
    fn test_mapping() {
        let s = random_string(&CountingSource::starting_at(0), 3).unwrap();
        assert_eq!(s, "abc");
        let s = random_string(&CountingSource::starting_at(60), 4).unwrap();
        assert_eq!(s, "89ab");
    }

    #[test]
    fn test_rejection() {
        // 246, 247 accepted; 248 ..= 255 rejected; then 0, 1.
        let s = random_string(&CountingSource::starting_at(246), 4).unwrap();
        assert_eq!(s, "89ab");

        // A whole batch of rejected bytes forces another batch.
        let src = CountingSource::starting_at(248);
        let s = random_string(&src, 2).unwrap();
        // Batch 1: 248, 249, 250, 251. Batch 2: 252 .. 255.
        // Batch 3: 0, 1.
        assert_eq!(s, "ab");
        assert_eq!(src.next.get(), 4);
    }

    #[test]
    fn test_no_modulo_bias() {
        // One full cycle of byte values yields 248 accepted bytes.
        // Each symbol must appear exactly four times.
        let len = usize::from(REJECT_LIMIT);
        let s = random_string(&CountingSource::starting_at(0), len).unwrap();
        let mut counts = [0_usize; 62];
        for c in s.bytes() {
            let idx = ALPHABET.iter().position(|a| *a == c).unwrap();
            counts[idx] += 1;
        }
        assert!(counts.iter().all(|c| *c == 4), "{counts:?}");
    }

    #[test]
    fn test_source_error() {
        let src = FailingSource {
            fail_at_call: 1,
            calls: Cell::new(0),
        };
        assert!(matches!(
            random_string(&src, 16),
            Err(RandomError::Source(_))
        ));

        let src = FailingSource {
            fail_at_call: 3,
            calls: Cell::new(0),
        };
        assert_eq!(
            random_string(&src, 16),
            Err(RandomError::Source("injected failure".to_string()))
        );
        assert_eq!(src.calls.get(), 3);
    }

    #[test]
    fn test_uniformity() {
        const LEN: usize = 16;
        const SAMPLES: usize = 20_000;
        // Chi-square with 61 degrees of freedom has mean 61 and std deviation ~11.
        const THRESHOLD: f64 = 150.0;

        let mut counts = vec![[0_u32; 62]; LEN];
        for _ in 0..SAMPLES {
            let s = secure_random_string(LEN).unwrap();
            for (pos, c) in s.bytes().enumerate() {
                let idx = ALPHABET.iter().position(|a| *a == c).unwrap();
                counts[pos][idx] += 1;
            }
        }

        let expected = SAMPLES as f64 / ALPHABET.len() as f64;
        for (pos, counts) in counts.iter().enumerate() {
            let chi2: f64 = counts
                .iter()
                .map(|c| {
                    let d = f64::from(*c) - expected;
                    d * d / expected
                })
                .sum();
            assert!(chi2 < THRESHOLD, "position {pos}: chi2 = {chi2}");
        }
    }
}

// vim: ts=4 sw=4 expandtab
