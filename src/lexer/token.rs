use serde::{Deserialize, Serialize};
use std::fmt;

/// Comment marker; a comment runs from here to the end of the line
pub const COMMENT: &str = "#";
/// Push keyword
pub const PUSH: &str = "sun";
/// Pop keyword
pub const POP: &str = "moon";
/// Characters skipped between tokens
pub const WHITESPACE: &str = " \t\n";

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Source text of the token, or the message for `Error` tokens
    pub text: String,
    /// Byte offset of the first byte of the token
    pub offset: usize,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed, in characters)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        offset: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Token {
            kind,
            text: text.into(),
            offset,
            line,
            column,
        }
    }

    /// True for the two tokens that end a stream
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    /// Byte offset one past the end of the token's source text.
    ///
    /// `Error` tokens carry a message rather than source text and have an
    /// empty extent.
    pub fn end(&self) -> usize {
        match self.kind {
            TokenKind::Error => self.offset,
            _ => self.offset + self.text.len(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "EOF"),
            TokenKind::Error => write!(f, "{}", self.text),
            _ => write!(f, "{:?}", self.text),
        }
    }
}

/// All possible token types in sunmoon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Scanning failed; the token text is the error message
    Error,
    /// Line comment, marker included
    Comment,
    /// `sun`
    Push,
    /// `moon`
    Pop,
    /// End of input marker
    EndOfInput,
}

impl TokenKind {
    /// Check if token ends the stream
    pub fn is_terminal(&self) -> bool {
        matches!(self, TokenKind::Error | TokenKind::EndOfInput)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::Error => "error",
            TokenKind::Comment => "comment",
            TokenKind::Push => "push",
            TokenKind::Pop => "pop",
            TokenKind::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}
