//! Threaded scanning.
//!
//! The scanner runs on its own thread and hands every token to the consumer
//! over a zero-capacity channel, so producer and consumer meet at each token.
//! Dropping the [`TokenStream`] early makes the producer's next send fail and
//! the thread exits instead of blocking forever.

use super::scanner::Scanner;
use super::token::Token;
use crate::config::ScanOptions;
use crate::error::{Error, Result};
use std::iter::FusedIterator;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

/// Handle to a scan running on another thread
#[derive(Debug)]
pub struct ScanHandle {
    name: String,
    thread: JoinHandle<usize>,
}

impl ScanHandle {
    /// Label of the scanned input
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Waits for the producer and returns how many tokens it delivered
    pub fn join(self) -> Result<usize> {
        let name = self.name;
        self.thread
            .join()
            .map_err(|_| Error::ScannerPanicked { name })
    }
}

/// Receiving end of a threaded scan, in emission order
#[derive(Debug)]
pub struct TokenStream {
    items: Receiver<Token>,
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.items.recv().ok()
    }
}

impl FusedIterator for TokenStream {}

/// Scans `input` on a new thread with default options
pub fn spawn_scan(name: impl Into<String>, input: impl Into<String>) -> (ScanHandle, TokenStream) {
    spawn_scan_with_options(input, ScanOptions::named(name))
}

/// Scans `input` on a new thread
pub fn spawn_scan_with_options(
    input: impl Into<String>,
    options: ScanOptions,
) -> (ScanHandle, TokenStream) {
    let input = input.into();
    let name = options.name.clone();
    let (tx, rx) = mpsc::sync_channel(0);

    let thread = thread::spawn(move || {
        let mut delivered = 0;
        for token in Scanner::with_options(&input, options) {
            if tx.send(token).is_err() {
                tracing::debug!(delivered, "token stream dropped, stopping scan");
                break;
            }
            delivered += 1;
        }
        delivered
    });

    (ScanHandle { name, thread }, TokenStream { items: rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_matches_iterator() {
        let source = "# test program\nsun sun sun moon moon moon";
        let (handle, stream) = spawn_scan("test", source);
        let threaded: Vec<Token> = stream.collect();
        let direct: Vec<Token> = Scanner::new("test", source).collect();
        assert_eq!(threaded, direct);
        assert_eq!(handle.name(), "test");
        assert_eq!(handle.join().unwrap(), direct.len());
    }

    #[test]
    fn test_error_ends_stream() {
        let (handle, stream) = spawn_scan("test", "sun foo");
        let kinds: Vec<TokenKind> = stream.map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Push, TokenKind::Error]);
        assert_eq!(handle.join().unwrap(), 2);
    }

    #[test]
    fn test_dropped_consumer_releases_producer() {
        let source = "sun ".repeat(64);
        let (handle, mut stream) = spawn_scan("test", source);
        assert_eq!(stream.next().map(|t| t.kind), Some(TokenKind::Push));
        drop(stream);
        // the producer is blocked on its second send and must give up
        assert_eq!(handle.join().unwrap(), 1);
    }
}
