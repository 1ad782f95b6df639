//! A generic framework for lexical analysis of UTF-8 text, built around the
//! state-function lexer design from Rob Pike's talk
//! ["Lexical Scanning in Go"](https://go.dev/talks/2011/lex.slide#1).
//!
//! A lexer is a graph of [`State`]s. Each state inspects the shared [`Lexer`]
//! cursor, emits zero or more [`Token`]s and returns the next state, or `None`
//! to stop. The driver runs the graph on a background thread and streams the
//! tokens to the caller through a bounded channel.
//!
//! ```rust
//! use gex::{Lexer, State};
//!
//! #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
//! enum Kind {
//!     #[default]
//!     Error,
//!     Number,
//!     Word,
//! }
//!
//! fn digits(l: &mut Lexer<Kind>) -> Option<State<Kind>> {
//!     l.accept_run("0123456789");
//!     l.emit(Kind::Number);
//!     Some(State::new(letters))
//! }
//!
//! fn letters(l: &mut Lexer<Kind>) -> Option<State<Kind>> {
//!     l.accept_while(char::is_alphabetic);
//!     l.emit(Kind::Word);
//!     None
//! }
//!
//! let tokens: Vec<_> = gex::run("123abc", State::new(digits))
//!     .expect("spawn lexer")
//!     .map(|t| (t.kind, t.value))
//!     .collect();
//!
//! assert_eq!(
//!     tokens,
//!     vec![(Kind::Number, "123".into()), (Kind::Word, "abc".into())]
//! );
//! ```

mod config;
mod driver;
mod error;
mod lexer;
mod options;
mod state;
mod token;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use driver::{TokenStream, run, run_bytes, run_with_config, run_with_options};
pub use error::{Error, Result, TryRecvError};
pub use lexer::{Lexer, RuneSet, Runes};
pub use options::Options;
pub use state::{State, StateFn};
pub use token::Token;
