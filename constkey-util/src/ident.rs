// -*- coding: utf-8 -*-
// Copyright (C) 2025 The constkey developers
// SPDX-License-Identifier: Apache-2.0 OR MIT

use unicode_general_category::{GeneralCategory, get_general_category};

/// Reserved words of the Go language.
pub const GO_KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Letters are the categories Lu, Ll, Lt, Lm and Lo, and the underscore.
fn is_letter(c: char) -> bool {
    c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

/// Digits are decimal digits (Nd) only.
fn is_digit(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// Check whether `s` can be used as a bare identifier in Go source code.
///
/// An identifier starts with a letter or underscore,
/// followed by letters, digits or underscores, and is not a keyword.
pub fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_letter(first)
        && chars.all(|c| is_letter(c) || is_digit(c))
        && !GO_KEYWORDS.contains(&s)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_identifier() {
        assert!(is_go_identifier("ApiKey"));
        assert!(is_go_identifier("api_key2"));
        assert!(is_go_identifier("_"));
        assert!(is_go_identifier("_private"));
        assert!(is_go_identifier("Schlüssel"));
        assert!(is_go_identifier("x9"));

        assert!(!is_go_identifier(""));
        assert!(!is_go_identifier("9lives"));
        assert!(!is_go_identifier("api-key"));
        assert!(!is_go_identifier("api key"));
        assert!(!is_go_identifier("key.Name"));
        assert!(!is_go_identifier("\"quoted\""));
    }

    #[test]
    fn test_identifier_unicode_classes() {
        // Decimal digits of other scripts are digits.
        assert!(is_go_identifier("x٣"));
        assert!(is_go_identifier("名前"));

        // Other numbers (No), letter numbers (Nl) and marks (Mn) are not.
        assert!(!is_go_identifier("x²"));
        assert!(!is_go_identifier("k½"));
        assert!(!is_go_identifier("Ⅻ"));
        assert!(!is_go_identifier("xⅫ"));
        assert!(!is_go_identifier("a\u{345}"));
        assert!(!is_go_identifier("e\u{301}"));
        assert!(!is_go_identifier("٣x"));
    }

    #[test]
    fn test_keywords() {
        for kw in GO_KEYWORDS {
            assert!(!is_go_identifier(kw), "{kw}");
        }
        // Predeclared identifiers are not keywords.
        assert!(is_go_identifier("string"));
        assert!(is_go_identifier("nil"));
        assert!(is_go_identifier("Const"));
    }
}

// vim: ts=4 sw=4 expandtab
