//! Lexical analysis for sunmoon
//!
//! Converts source text into a stream of tokens, either lazily on the
//! calling thread ([`Scanner`]) or on a producer thread ([`spawn_scan`]).

mod channel;
mod cursor;
mod scanner;
mod token;

pub use channel::{spawn_scan, spawn_scan_with_options, ScanHandle, TokenStream};
pub use scanner::Scanner;
pub use token::{Token, TokenKind, COMMENT, POP, PUSH, WHITESPACE};
