//! Debug driver: scans a sunmoon program and prints every token.
//!
//! Usage: sunmoon [--json] [--threaded] [--no-comments] [FILE]

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::process;
use sunmoon::{spawn_scan_with_options, ScanOptions, Scanner, Token, TokenKind};

const USAGE: &str = "Usage: sunmoon [--json] [--threaded] [--no-comments] [FILE]";

const SAMPLE_PROGRAM: &str = "# test program
sun sun sun moon moon moon";

#[derive(Debug, Default)]
struct Args {
    json: bool,
    threaded: bool,
    no_comments: bool,
    path: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => args.json = true,
            "--threaded" => args.threaded = true,
            "--no-comments" => args.no_comments = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                process::exit(0);
            }
            _ if arg.starts_with('-') => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("{USAGE}");
                process::exit(2);
            }
            _ if args.path.is_none() => args.path = Some(arg),
            _ => {
                eprintln!("Only one input file is supported");
                eprintln!("{USAGE}");
                process::exit(2);
            }
        }
    }
    args
}

fn print_token(token: &Token, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(token)?);
    } else {
        println!("DBG {token:?}");
    }
    Ok(())
}

/// Prints every token and returns the terminal one
fn drain(tokens: impl Iterator<Item = Token>, json: bool) -> Result<Option<Token>> {
    let mut last = None;
    for token in tokens {
        print_token(&token, json)?;
        last = Some(token);
    }
    Ok(last)
}

fn run(args: Args) -> Result<i32> {
    let (name, source) = match &args.path {
        Some(path) => {
            let source =
                fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
            (path.clone(), source)
        }
        None => ("test".to_string(), SAMPLE_PROGRAM.to_string()),
    };
    let options = ScanOptions::named(name).keep_comments(!args.no_comments);

    let last = if args.threaded {
        let (handle, tokens) = spawn_scan_with_options(source, options);
        let last = drain(tokens, args.json)?;
        handle.join()?;
        last
    } else {
        let scanner = Scanner::with_options(&source, options);
        if !args.json {
            println!("DBG {scanner:?}");
        }
        drain(scanner, args.json)?
    };

    match last {
        Some(token) if token.kind == TokenKind::Error => {
            eprintln!("error: {token}");
            Ok(1)
        }
        _ => Ok(0),
    }
}

fn main() {
    let args = parse_args();
    match run(args) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(2);
        }
    }
}
