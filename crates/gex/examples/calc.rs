//! Lexes a small calculator language and prints each token as it arrives.
//!
//! The lexer runs on its own thread; the main thread consumes the stream and
//! stops at the first error token.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=gex=trace cargo run -p gex --example calc -- "x = 3 * (y + 4.5)"
//! ```

use gex::{Config, Lexer, State};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Kind {
    #[default]
    Error,
    Number,
    Ident,
    Op,
    LParen,
    RParen,
}

fn lex_expr(l: &mut Lexer<Kind>) -> Option<State<Kind>> {
    l.accept_while(char::is_whitespace);
    l.skip();

    match l.peek() {
        c if c == l.eof() => None,
        '(' | ')' => {
            let kind = if l.next() == '(' { Kind::LParen } else { Kind::RParen };
            l.emit(kind);
            Some(State::new(lex_expr))
        }
        c if c.is_ascii_digit() || c == '.' => Some(State::new(lex_number)),
        c if c.is_alphabetic() || c == '_' => Some(State::new(lex_ident)),
        _ if l.accept("+-*/=^%") => {
            l.emit(Kind::Op);
            Some(State::new(lex_expr))
        }
        c => {
            let pos = l.pos();
            l.errorf(format_args!("unexpected {c:?} at byte {pos}"))
        }
    }
}

fn lex_number(l: &mut Lexer<Kind>) -> Option<State<Kind>> {
    const DIGITS: &str = "0123456789";

    let mut digits = l.accept_run(DIGITS);
    if l.accept('.') {
        digits += l.accept_run(DIGITS);
    }
    if digits == 0 {
        return l.error("expected digits");
    }
    if l.accept("eE") {
        l.accept("+-");
        if l.accept_run(DIGITS) == 0 {
            let lexeme = l.current().to_owned();
            return l.errorf(format_args!("malformed exponent in {lexeme:?}"));
        }
    }
    l.emit(Kind::Number);
    Some(State::new(lex_expr))
}

fn lex_ident(l: &mut Lexer<Kind>) -> Option<State<Kind>> {
    l.accept_while(|c| c.is_alphanumeric() || c == '_');
    l.emit(Kind::Ident);
    Some(State::new(lex_expr))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "area = pi * r ^ 2.0e0 % (1 + $)".into());

    let stream = Config::new(input, State::new(lex_expr))
        .with_name("calc")
        .run()
        .expect("spawn lexer");

    for token in stream {
        if token.kind == Kind::Error {
            eprintln!("{token}");
            std::process::exit(1);
        }
        println!("{:<7} {}", format!("{:?}", token.kind), token);
    }
}
