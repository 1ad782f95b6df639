//! Lexer: the rune cursor shared by every state function.
//!
//! The lexer owns the input text and two byte offsets into it. `start` marks
//! the beginning of the lexeme being assembled and `pos` the next rune to be
//! read. State functions move `pos` forward with [`Lexer::next`] and the
//! `accept*` family, optionally rewind one rune with [`Lexer::back`], and
//! close the lexeme with [`Lexer::emit`] or [`Lexer::skip`].
//!
//! Invariants
//! - `start <= pos <= input.len()`, and both sit on `char` boundaries.
//! - `width` is the byte length of the last rune read, and 0 when there is
//!   nothing to rewind (nothing read yet, just rewound, lexeme just closed,
//!   or the last read hit end of input).
//! - At most one pending rewind: `back` after `back` fails until the next
//!   read re-arms it. Closing a lexeme disarms it so `pos` never falls behind
//!   `start`.

use core::fmt;

use crossbeam_channel::Sender;
use tracing::{debug, trace};

use crate::{Options, State, Token};


/// A set of runes accepted by [`Lexer::accept`] and [`Lexer::accept_run`].
///
/// Implemented for string slices (any rune in the string), single runes and
/// rune slices or arrays.
pub trait RuneSet {
    /// Returns whether `c` belongs to the set.
    fn contains_rune(&self, c: char) -> bool;
}

impl RuneSet for str {
    #[inline]
    fn contains_rune(&self, c: char) -> bool {
        self.contains(c)
    }
}

impl RuneSet for char {
    #[inline]
    fn contains_rune(&self, c: char) -> bool {
        *self == c
    }
}

impl RuneSet for [char] {
    #[inline]
    fn contains_rune(&self, c: char) -> bool {
        self.contains(&c)
    }
}

impl<const N: usize> RuneSet for [char; N] {
    #[inline]
    fn contains_rune(&self, c: char) -> bool {
        self.contains(&c)
    }
}

impl<S: RuneSet + ?Sized> RuneSet for &S {
    #[inline]
    fn contains_rune(&self, c: char) -> bool {
        (**self).contains_rune(c)
    }
}

/// The cursor over the input text, handed to every [`State`].
///
/// A lexer is created by the driver for a single run and lives on the
/// producer thread until the state machine stops.
pub struct Lexer<T> {
    name: String,
    input: String,
    start: usize,
    pos: usize,
    width: usize,
    unread: bool,
    eof: char,
    error: T,
    tokens: Sender<Token<T>>,
    disconnected: bool,
}

impl<T> Lexer<T> {
    pub(crate) fn new(input: String, options: Options<T>, tokens: Sender<Token<T>>) -> Self {
        Self {
            name: options.name,
            input,
            start: 0,
            pos: 0,
            width: 0,
            // Nothing has been read, so there is nothing to rewind.
            unread: true,
            eof: options.eof,
            error: options.error,
            tokens,
            disconnected: false,
        }
    }

    /// Returns the name of the lexer.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the original input text.
    #[must_use]
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the end-of-input sentinel rune.
    #[must_use]
    #[inline]
    pub fn eof(&self) -> char {
        self.eof
    }

    /// Returns the byte offset where the current lexeme starts.
    #[must_use]
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the byte offset of the next rune.
    #[must_use]
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the byte width of the last rune read.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the text of the current lexeme.
    #[must_use]
    #[inline]
    pub fn current(&self) -> &str {
        &self.input[self.start..self.pos]
    }

    /// Returns whether the consumer has dropped the token stream.
    ///
    /// Once this is `true` emitted tokens are discarded and the driver stops
    /// after the running state returns.
    #[must_use]
    #[inline]
    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }

    /// Returns the next rune of the input and advances past it.
    ///
    /// At end of input this returns [`Lexer::eof`] without moving, however
    /// many times it is called.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> char {
        let Some(c) = self.input[self.pos..].chars().next() else {
            self.width = 0;
            self.unread = false;
            return self.eof;
        };

        self.width = c.len_utf8();
        self.pos += self.width;
        self.unread = false;
        c
    }

    /// Rewinds the last rune read by [`Lexer::next`].
    ///
    /// Only one rune can be rewound per read. Returns `false` and leaves the
    /// cursor untouched when there is nothing to rewind.
    #[must_use = "a failed rewind leaves the cursor where it was"]
    pub fn back(&mut self) -> bool {
        if self.unread {
            return false;
        }

        self.pos -= self.width;
        self.width = 0;
        self.unread = true;
        true
    }

    /// Returns the next rune without consuming it.
    pub fn peek(&mut self) -> char {
        let c = self.next();
        let _ = self.back();
        c
    }

    /// Consumes the next rune if it belongs to `valid`.
    ///
    /// The end-of-input sentinel is checked against `valid` like any other
    /// rune.
    pub fn accept(&mut self, valid: impl RuneSet) -> bool {
        self.accept_if(|c| valid.contains_rune(c))
    }

    /// Consumes runes for as long as they belong to `valid`, returning how
    /// many were consumed.
    pub fn accept_run(&mut self, valid: impl RuneSet) -> usize {
        self.accept_while(|c| valid.contains_rune(c))
    }

    /// Consumes the next rune if it satisfies `pred`.
    pub fn accept_if(&mut self, pred: impl FnOnce(char) -> bool) -> bool {
        if pred(self.next()) {
            return true;
        }

        let _ = self.back();
        false
    }

    /// Consumes runes for as long as they satisfy `pred`, returning how many
    /// were consumed.
    pub fn accept_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut n = 0;
        while self.accept_if(&mut pred) {
            n += 1;
            // A predicate that accepts the sentinel would otherwise spin
            // forever at end of input.
            if self.width == 0 {
                break;
            }
        }
        n
    }

    /// Returns an iterator over the remaining runes, stopping at end of
    /// input.
    ///
    /// Every rune yielded has been consumed; dropping the iterator early
    /// leaves the cursor right after the last rune it yielded. The iterator
    /// also stops at a literal occurrence of the sentinel in the input, which
    /// is consumed but not yielded.
    pub fn runes(&mut self) -> Runes<'_, T> {
        Runes { lexer: self }
    }

    /// Discards the current lexeme without emitting it.
    pub fn skip(&mut self) {
        self.start = self.pos;
        self.close_lexeme();
    }

    /// Emits the current lexeme as a token of the given kind.
    ///
    /// Blocks while the token stream is full.
    pub fn emit(&mut self, kind: T) {
        let token = Token::new(kind, &self.input[self.start..self.pos]);
        self.send(token);
        self.start = self.pos;
        self.close_lexeme();
    }

    fn close_lexeme(&mut self) {
        self.width = 0;
        self.unread = true;
    }

    fn send(&mut self, token: Token<T>) {
        if self.disconnected {
            return;
        }

        trace!(
            lexer = %self.name,
            start = self.start,
            pos = self.pos,
            value = %token.value,
            "emit"
        );
        if self.tokens.send(token).is_err() {
            debug!(lexer = %self.name, "token stream dropped by consumer");
            self.disconnected = true;
        }
    }
}

impl<T: Clone> Lexer<T> {
    /// Emits an error token carrying a formatted diagnostic and stops the
    /// lexer.
    ///
    /// The token kind is the configured error kind and its value is the
    /// message prefixed with the lexer name. The return value is always
    /// `None`, so a state can end with `return l.errorf(...)`.
    ///
    /// ```rust
    /// use gex::{Lexer, State};
    ///
    /// fn reject(l: &mut Lexer<u8>) -> Option<State<u8>> {
    ///     let c = l.next();
    ///     l.errorf(format_args!("unexpected {c:?}"))
    /// }
    ///
    /// let tokens: Vec<_> = gex::run("x", State::new(reject)).unwrap().collect();
    /// assert_eq!(tokens.len(), 1);
    /// assert_eq!(tokens[0].value, "gex: unexpected 'x'");
    /// ```
    pub fn errorf(&mut self, args: fmt::Arguments<'_>) -> Option<State<T>> {
        let token = Token::new(self.error.clone(), format!("{}: {args}", self.name));
        debug!(lexer = %self.name, pos = self.pos, message = %token.value, "lexical error");
        self.send(token);
        None
    }

    /// Like [`Lexer::errorf`] for a message that needs no formatting.
    pub fn error(&mut self, message: impl fmt::Display) -> Option<State<T>> {
        self.errorf(format_args!("{message}"))
    }
}

impl<T: fmt::Debug> fmt::Debug for Lexer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("name", &self.name)
            .field("start", &self.start)
            .field("pos", &self.pos)
            .field("width", &self.width)
            .field("unread", &self.unread)
            .field("eof", &self.eof)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`Lexer::runes`].
#[derive(Debug)]
pub struct Runes<'a, T> {
    lexer: &'a mut Lexer<T>,
}

impl<T> Iterator for Runes<'_, T> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.lexer.next();
        (c != self.lexer.eof).then_some(c)
    }
}
