//! # sunmoon
//!
//! Scanner for sunmoon, a tiny stack language. `sun` pushes, `moon` pops,
//! `#` starts a comment that runs to the end of the line, and spaces, tabs
//! and newlines separate tokens.
//!
//! ## Quick Start
//!
//! ```rust
//! use sunmoon::{scan, TokenKind};
//!
//! let kinds: Vec<TokenKind> = scan("demo", "# push twice\nsun sun moon")
//!     .map(|token| token.kind)
//!     .collect();
//!
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Comment,
//!         TokenKind::Push,
//!         TokenKind::Push,
//!         TokenKind::Pop,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! ```
//!
//! Every stream ends with exactly one terminal token: `EndOfInput`, or
//! `Error` carrying a message when the input holds something that is not
//! part of the language.
//!
//! ```rust
//! use sunmoon::tokenize;
//!
//! let err = tokenize("demo", "sun foo").unwrap_err();
//! assert_eq!(err.to_string(), "demo: unrecognized input at position 4");
//! assert_eq!(err.offset(), Some(4));
//! ```
//!
//! ## Threaded scanning
//!
//! [`spawn_scan`] runs the scanner on its own thread and hands tokens over a
//! rendezvous channel:
//!
//! ```rust
//! use sunmoon::spawn_scan;
//!
//! let (handle, tokens) = spawn_scan("demo", "sun moon");
//! let texts: Vec<String> = tokens.map(|t| t.to_string()).collect();
//! assert_eq!(texts, ["\"sun\"", "\"moon\"", "EOF"]);
//! assert_eq!(handle.join().unwrap(), 3);
//! ```

/// Version of the sunmoon crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod lexer;

pub use config::ScanOptions;
pub use error::{Error, Result};
pub use lexer::{
    spawn_scan, spawn_scan_with_options, ScanHandle, Scanner, Token, TokenKind, TokenStream,
};

/// Starts a lazy scan of `input`. `name` labels the input in error reports.
pub fn scan<'a>(name: impl Into<String>, input: &'a str) -> Scanner<'a> {
    Scanner::new(name, input)
}

/// Scans all of `input` with default options.
///
/// The returned tokens end with `EndOfInput`. An `Error` token is turned
/// into [`Error::Lex`].
pub fn tokenize(name: impl Into<String>, input: &str) -> Result<Vec<Token>> {
    tokenize_with_options(input, ScanOptions::named(name))
}

/// Scans all of `input` with the given options
pub fn tokenize_with_options(input: &str, options: ScanOptions) -> Result<Vec<Token>> {
    let name = options.name.clone();
    let mut tokens = Vec::new();
    for token in Scanner::with_options(input, options) {
        if token.kind == TokenKind::Error {
            return Err(Error::Lex {
                name,
                message: token.text,
                offset: token.offset,
            });
        }
        tokens.push(token);
    }
    Ok(tokens)
}
