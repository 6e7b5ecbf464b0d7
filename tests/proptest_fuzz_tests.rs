//! Property-based tests for the sunmoon scanner
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. The scanner never panics and always ends with one terminal token
//! 2. Keyword sequences come back 1:1 and in order
//! 3. Token offsets and texts rebuild the original input
//! 4. The threaded scanner agrees with the lazy one

use proptest::prelude::*;
use sunmoon::{scan, spawn_scan, Token, TokenKind};

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random strings that might break the scanner
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex(r"[\x00-\x7F]{0,200}").unwrap(),
        prop::string::string_regex(r"[sunmo# \t\n\r☀]{0,60}").unwrap(),
    ]
}

/// Generate a run of whitespace
fn whitespace() -> impl Strategy<Value = String> {
    "[ \t\n]{1,4}".prop_map(|s| s)
}

/// Generate a line comment including its newline
fn comment_line() -> impl Strategy<Value = String> {
    "#[^\n]{0,16}\n".prop_map(|s| s)
}

/// Generate pieces of a well-formed program
fn program_piece() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("sun".to_string()),
        Just("moon".to_string()),
        whitespace(),
        comment_line(),
    ]
}

fn valid_program() -> impl Strategy<Value = String> {
    prop::collection::vec(program_piece(), 0..40).prop_map(|pieces| pieces.concat())
}

fn trivia_only_program() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![whitespace(), comment_line()], 0..20)
        .prop_map(|pieces| pieces.concat())
}

/// Generate a keyword sequence (true = sun) and separators between them
fn keyword_program() -> impl Strategy<Value = (Vec<bool>, String)> {
    prop::collection::vec((prop::bool::ANY, whitespace()), 0..40).prop_map(|words| {
        let mut source = String::new();
        for (push, sep) in &words {
            source.push_str(if *push { "sun" } else { "moon" });
            source.push_str(sep);
        }
        (words.into_iter().map(|(push, _)| push).collect(), source)
    })
}

fn tokens(source: &str) -> Vec<Token> {
    scan("prop", source).collect()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn scanner_ends_with_one_terminal(source in arbitrary_source_string()) {
        let tokens = tokens(&source);
        let terminals = tokens.iter().filter(|t| t.is_terminal()).count();
        prop_assert_eq!(terminals, 1);
        prop_assert!(tokens.last().unwrap().is_terminal());
    }

    #[test]
    fn error_offsets_point_at_input(source in arbitrary_source_string()) {
        let last = tokens(&source).pop().unwrap();
        if last.kind == TokenKind::Error {
            prop_assert!(last.offset < source.len());
            prop_assert!(source.is_char_boundary(last.offset));
            let expected = format!("unrecognized input at position {}", last.offset);
            prop_assert_eq!(last.text, expected);
        } else {
            prop_assert_eq!(last.offset, source.len());
        }
    }

    #[test]
    fn trivia_has_no_keywords(source in trivia_only_program()) {
        let tokens = tokens(&source);
        prop_assert!(tokens
            .iter()
            .all(|t| !matches!(t.kind, TokenKind::Push | TokenKind::Pop)));
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
        prop_assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::EndOfInput).count(),
            1
        );
    }

    #[test]
    fn keywords_map_one_to_one((words, source) in keyword_program()) {
        let mut tokens = tokens(&source);
        prop_assert_eq!(tokens.pop().map(|t| t.kind), Some(TokenKind::EndOfInput));
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        let expected: Vec<TokenKind> = words
            .iter()
            .map(|push| if *push { TokenKind::Push } else { TokenKind::Pop })
            .collect();
        prop_assert_eq!(kinds, expected);
    }

    #[test]
    fn comments_start_with_marker_and_stop_at_newline(source in valid_program()) {
        for token in tokens(&source).iter().filter(|t| t.kind == TokenKind::Comment) {
            prop_assert!(token.text.starts_with('#'));
            prop_assert!(!token.text.contains('\n'));
        }
    }

    #[test]
    fn tokens_rebuild_input(source in valid_program()) {
        let tokens = tokens(&source);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));

        let mut rebuilt = String::new();
        let mut cursor = 0;
        for token in &tokens {
            let gap = &source[cursor..token.offset];
            prop_assert!(gap.chars().all(|c| matches!(c, ' ' | '\t' | '\n')));
            rebuilt.push_str(gap);
            prop_assert_eq!(&source[token.offset..token.end()], token.text.as_str());
            rebuilt.push_str(&token.text);
            cursor = token.end();
        }
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn threaded_scan_matches_lazy_scan(source in arbitrary_source_string()) {
        let (handle, stream) = spawn_scan("prop", source.clone());
        let threaded: Vec<Token> = stream.collect();
        prop_assert_eq!(handle.join().unwrap(), threaded.len());
        prop_assert_eq!(threaded, tokens(&source));
    }
}
