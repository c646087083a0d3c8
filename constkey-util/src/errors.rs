// -*- coding: utf-8 -*-
// Copyright (C) 2025 The constkey developers
// SPDX-License-Identifier: Apache-2.0 OR MIT

macro_rules! define_simple_error {
    ($name:ident, $msg:literal) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        pub struct $name;

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
                write!(f, $msg)
            }
        }

        impl std::error::Error for $name {}
    };
}

define_simple_error!(InvalidIdentifierError, "not a valid Go identifier");

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            InvalidIdentifierError.to_string(),
            "not a valid Go identifier"
        );
        let e: Box<dyn std::error::Error> = Box::new(InvalidIdentifierError);
        assert!(e.downcast_ref::<InvalidIdentifierError>().is_some());
    }
}

// vim: ts=4 sw=4 expandtab
