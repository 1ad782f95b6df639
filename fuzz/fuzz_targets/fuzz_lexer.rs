#![no_main]

use arbitrary::Arbitrary;
use bstr::ByteSlice;
use gex::{Config, Lexer, State};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Class {
    #[default]
    Error,
    Space,
    Word,
    Other,
}

fn classify(c: char) -> Class {
    if c.is_whitespace() {
        Class::Space
    } else if c.is_alphanumeric() {
        Class::Word
    } else {
        Class::Other
    }
}

/// Splits the input into maximal runs of one class, emitting every rune.
fn lex_run(l: &mut Lexer<Class>) -> Option<State<Class>> {
    assert!(l.start() <= l.pos() && l.pos() <= l.input().len());

    if l.pos() == l.input().len() {
        assert_eq!(l.next(), l.eof());
        return None;
    }

    let class = classify(l.next());
    let first = l.width();
    let pos = l.pos();
    assert!(l.back());
    assert!(!l.back());
    assert_eq!(l.pos(), pos - first);
    assert_eq!(l.next(), l.input()[pos - first..].chars().next().unwrap());

    while l.pos() < l.input().len() {
        let peeked = l.peek();
        if classify(peeked) != class {
            break;
        }
        l.next();
    }
    l.emit(class);
    Some(State::new(lex_run))
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    capacity: u8,
    eof: char,
    bytes: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let expected = input.bytes.to_str_lossy().into_owned();
    let tokens = Config::from_bytes(input.bytes, State::new(lex_run))
        .with_capacity(usize::from(input.capacity % 8))
        .with_eof(input.eof)
        .run()
        .expect("spawn lexer")
        .finish()
        .expect("lexer finished");

    assert!(tokens.iter().all(|t| t.kind != Class::Error && !t.value.is_empty()));
    let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(rebuilt, expected);
});
