use super::cursor::Cursor;
use super::token::{Token, TokenKind, COMMENT, POP, PUSH, WHITESPACE};
use crate::config::ScanOptions;
use crate::error::Error;
use std::iter::FusedIterator;

/// Scanner states. Every state but `Dispatch` consumes input and may emit
/// one token before handing control back.
#[derive(Debug)]
enum State {
    Dispatch,
    Whitespace,
    Comment,
    PushKeyword,
    PopKeyword,
    Failed(Error),
    Done,
}

/// Next state plus the token a transition emitted, if any
type Step = (State, Option<Token>);

/// Lazy scanner for sunmoon source.
///
/// Tokens are produced on demand by iterating. The stream always ends with
/// exactly one `EndOfInput` or `Error` token, after which the iterator is
/// exhausted for good.
#[derive(Debug)]
pub struct Scanner<'a> {
    name: String,
    keep_comments: bool,
    cursor: Cursor<'a>,
    state: State,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with default options and the given label
    pub fn new(name: impl Into<String>, input: &'a str) -> Self {
        Self::with_options(input, ScanOptions::named(name))
    }

    /// Creates a scanner from explicit options
    pub fn with_options(input: &'a str, options: ScanOptions) -> Self {
        Scanner {
            name: options.name,
            keep_comments: options.keep_comments,
            cursor: Cursor::new(input),
            state: State::Dispatch,
        }
    }

    /// Label used in error reports
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source being scanned
    pub fn input(&self) -> &'a str {
        self.cursor.input()
    }

    /// Byte offset of the read head
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// True once the terminal token has been handed out
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// Start state; picks a recognizer by looking at the unread input
    fn dispatch(&mut self) -> Step {
        let rest = self.cursor.rest();
        tracing::trace!(name = %self.name, pos = self.cursor.pos(), rest, "dispatch");

        if rest.starts_with(COMMENT) {
            return (State::Comment, None);
        }
        if rest.starts_with(PUSH) {
            return (State::PushKeyword, None);
        }
        if rest.starts_with(POP) {
            return (State::PopKeyword, None);
        }
        if rest.starts_with(|c: char| WHITESPACE.contains(c)) {
            return (State::Whitespace, None);
        }
        if self.cursor.is_at_end() {
            return (State::Done, Some(self.cursor.emit(TokenKind::EndOfInput)));
        }

        let offset = self.cursor.pos();
        tracing::trace!(offset, found = ?self.cursor.peek(), "no rule matches");
        (State::Failed(Error::UnrecognizedInput { offset }), None)
    }

    fn lex_whitespace(&mut self) -> Step {
        while self.cursor.accept_one_of(WHITESPACE) {}
        tracing::trace!(span = ?(self.cursor.start()..self.cursor.pos()), "ignoring whitespace");
        self.cursor.ignore();
        (State::Dispatch, None)
    }

    fn lex_comment(&mut self) -> Step {
        self.cursor.step(COMMENT);
        self.cursor.accept_until_literal("\n");
        if self.keep_comments {
            (State::Dispatch, Some(self.cursor.emit(TokenKind::Comment)))
        } else {
            self.cursor.ignore();
            (State::Dispatch, None)
        }
    }

    fn lex_keyword(&mut self, literal: &str, kind: TokenKind) -> Step {
        self.cursor.step(literal);
        (State::Dispatch, Some(self.cursor.emit(kind)))
    }

    fn lex_error(&mut self, err: Error) -> Step {
        tracing::debug!(name = %self.name, error = %err, "scan failed");
        let token = self.cursor.emit_message(TokenKind::Error, err.to_string());
        (State::Done, Some(token))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let (next, token) = match std::mem::replace(&mut self.state, State::Done) {
                State::Dispatch => self.dispatch(),
                State::Whitespace => self.lex_whitespace(),
                State::Comment => self.lex_comment(),
                State::PushKeyword => self.lex_keyword(PUSH, TokenKind::Push),
                State::PopKeyword => self.lex_keyword(POP, TokenKind::Pop),
                State::Failed(err) => self.lex_error(err),
                State::Done => return None,
            };
            self.state = next;
            if let Some(token) = token {
                tracing::trace!(kind = %token.kind, text = %token.text, "emit");
                return Some(token);
            }
        }
    }
}

impl FusedIterator for Scanner<'_> {}
