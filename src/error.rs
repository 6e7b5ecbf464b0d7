//! Error types for the sunmoon scanner

use thiserror::Error;

/// Scanner errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No lexical rule matches the input at `offset`
    ///
    /// **Triggered by:** any character outside `sun`, `moon`, `#` comments
    /// and space/tab/newline
    /// **Example:** `foo`, `sunny` (fails at the `n` after `sun`), `sun\r\n`
    #[error("unrecognized input at position {offset}")]
    UnrecognizedInput {
        /// Byte offset of the offending character
        offset: usize,
    },

    /// A scan ended in an `Error` token
    #[error("{name}: {message}")]
    Lex {
        /// Label of the scanned input
        name: String,
        /// Message carried by the error token
        message: String,
        /// Byte offset the error was reported at
        offset: usize,
    },

    /// The producer thread of a spawned scan panicked
    #[error("{name}: scanner thread panicked")]
    ScannerPanicked {
        /// Label of the scanned input
        name: String,
    },
}

impl Error {
    /// Byte offset the error refers to, if any
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::UnrecognizedInput { offset, .. } | Error::Lex { offset, .. } => Some(*offset),
            Error::ScannerPanicked { .. } => None,
        }
    }
}

/// Result type for sunmoon operations
pub type Result<T> = std::result::Result<T, Error>;
