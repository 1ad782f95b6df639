use core::fmt::Write;

use crossbeam_channel::Receiver;

use crate::{Lexer, Options, State, Token};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Kind {
    #[default]
    Error,
    Number,
    Word,
    Punct,
}

/// A lexer for whitespace separated numbers, words and arithmetic
/// punctuation.
pub fn lex_any(l: &mut Lexer<Kind>) -> Option<State<Kind>> {
    l.accept_run(" \t\r\n");
    l.skip();

    match l.peek() {
        c if c == l.eof() => None,
        c if c.is_ascii_digit() => Some(State::new(lex_number)),
        c if c.is_alphabetic() => Some(State::new(lex_word)),
        c if "+-*/()=".contains(c) => {
            l.next();
            l.emit(Kind::Punct);
            Some(State::new(lex_any))
        }
        c => l.errorf(format_args!("unexpected {c:?}")),
    }
}

fn lex_number(l: &mut Lexer<Kind>) -> Option<State<Kind>> {
    l.accept_run("0123456789");
    if l.accept('.') && l.accept_run("0123456789") == 0 {
        let lexeme = l.current().to_owned();
        return l.errorf(format_args!("bad number {lexeme:?}"));
    }
    l.emit(Kind::Number);
    Some(State::new(lex_any))
}

fn lex_word(l: &mut Lexer<Kind>) -> Option<State<Kind>> {
    l.accept_while(char::is_alphanumeric);
    l.emit(Kind::Word);
    Some(State::new(lex_any))
}

/// Builds a lexer over `input` that is not attached to a driver thread.
pub fn detached(input: &str) -> (Lexer<Kind>, Receiver<Token<Kind>>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (Lexer::new(input.into(), Options::default(), tx), rx)
}

/// Renders tokens one per line as `Kind "value"`.
pub fn render(tokens: &[Token<Kind>]) -> String {
    let mut out = String::new();
    for token in tokens {
        writeln!(out, "{:?} {:?}", token.kind, token.value).expect("write to string");
    }
    out
}
