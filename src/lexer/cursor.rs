use super::token::{Token, TokenKind};

/// Scan position over an immutable input.
///
/// `start` marks the beginning of the token being accumulated and `pos` is
/// the read head; `start <= pos <= input.len()` always holds. `line` and
/// `column` describe `start`.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    start: usize,
    pos: usize,
    /// Byte width of the last char returned by `advance`, 0 once undone
    width: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor {
            input,
            start: 0,
            pos: 0,
            width: 0,
            line: 1,
            column: 1,
        }
    }

    pub(crate) fn input(&self) -> &'a str {
        self.input
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn start(&self) -> usize {
        self.start
    }

    /// Unread input
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consumes one char, or returns `None` at end of input
    pub(crate) fn advance(&mut self) -> Option<char> {
        match self.rest().chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Undoes the last `advance`. A second call without an `advance` in
    /// between does nothing.
    pub(crate) fn retreat(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    /// Next char without consuming it
    pub(crate) fn peek(&mut self) -> Option<char> {
        let c = self.advance();
        self.retreat();
        c
    }

    /// Consumes the next char if it is one of `valid`
    pub(crate) fn accept_one_of(&mut self, valid: &str) -> bool {
        match self.advance() {
            Some(c) if valid.contains(c) => true,
            _ => {
                self.retreat();
                false
            }
        }
    }

    /// Consumes chars until the rest of the input starts with `literal` or
    /// the input runs out. The literal itself is not consumed.
    pub(crate) fn accept_until_literal(&mut self, literal: &str) {
        let stop = self
            .rest()
            .find(literal)
            .map_or(self.input.len(), |i| self.pos + i);
        while self.pos < stop && self.advance().is_some() {}
    }

    /// Skips a literal already known to be at the read head
    pub(crate) fn step(&mut self, literal: &str) {
        debug_assert!(self.rest().starts_with(literal));
        self.pos += literal.len();
        self.width = 0;
    }

    /// Pending token text
    pub(crate) fn pending(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    /// Turns the pending span into a token and starts a new one
    pub(crate) fn emit(&mut self, kind: TokenKind) -> Token {
        let token = Token::new(kind, self.pending(), self.start, self.line, self.column);
        self.ignore();
        token
    }

    /// Token at the current start carrying `message` instead of source text
    pub(crate) fn emit_message(&self, kind: TokenKind, message: String) -> Token {
        Token::new(kind, message, self.start, self.line, self.column)
    }

    /// Drops the pending span
    pub(crate) fn ignore(&mut self) {
        for c in self.pending().chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.start = self.pos;
    }
}
