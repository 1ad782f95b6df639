#![allow(missing_docs, dead_code)]

use std::fmt::Write;

use gex::{Lexer, State, Token};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ini {
    #[default]
    Error,
    Section,
    Key,
    Equals,
    Value,
}

pub const SAMPLE: &str = "\
; global settings
name = gex

[server]
host = 127.0.0.1
port=8080

[paths] ; trailing comment
root = /srv/www
";

/// Top level: blank lines, comments, sections and keys.
pub fn lex_line(l: &mut Lexer<Ini>) -> Option<State<Ini>> {
    l.accept_run(" \t\r\n");
    l.skip();

    match l.peek() {
        c if c == l.eof() => None,
        ';' | '#' => Some(State::new(lex_comment)),
        '[' => Some(State::new(lex_section)),
        c if c.is_alphanumeric() || c == '_' => Some(State::new(lex_key)),
        c => {
            let pos = l.pos();
            l.errorf(format_args!("unexpected {c:?} at byte {pos}"))
        }
    }
}

fn lex_comment(l: &mut Lexer<Ini>) -> Option<State<Ini>> {
    let eof = l.eof();
    l.accept_while(|c| c != '\n' && c != eof);
    l.skip();
    Some(State::new(lex_line))
}

fn lex_section(l: &mut Lexer<Ini>) -> Option<State<Ini>> {
    let eof = l.eof();
    l.next();
    l.skip();
    l.accept_while(|c| c != ']' && c != '\n' && c != eof);
    if l.peek() != ']' {
        return l.error("unterminated section header");
    }
    l.emit(Ini::Section);
    l.next();
    l.skip();
    Some(State::new(lex_line))
}

fn lex_key(l: &mut Lexer<Ini>) -> Option<State<Ini>> {
    l.accept_while(|c| c.is_alphanumeric() || c == '_' || c == '.');
    l.emit(Ini::Key);
    l.accept_run(" \t");
    l.skip();
    if !l.accept('=') {
        return l.error("expected '=' after key");
    }
    l.emit(Ini::Equals);
    Some(State::new(lex_value))
}

fn lex_value(l: &mut Lexer<Ini>) -> Option<State<Ini>> {
    let eof = l.eof();
    l.accept_run(" \t");
    l.skip();
    if l.accept_while(|c| !c.is_whitespace() && c != ';' && c != eof) == 0 {
        return l.error("missing value");
    }
    l.emit(Ini::Value);
    Some(State::new(lex_line))
}

/// Renders tokens one per line as `Kind "value"`.
pub fn render(tokens: &[Token<Ini>]) -> String {
    let mut out = String::new();
    for token in tokens {
        writeln!(out, "{:?} {:?}", token.kind, token.value).unwrap();
    }
    out
}
