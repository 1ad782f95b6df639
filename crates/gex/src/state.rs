use core::fmt;

use crate::Lexer;

/// The signature of a state function.
pub type StateFn<T> = fn(&mut Lexer<T>) -> Option<State<T>>;

/// A node in the lexer state machine.
///
/// A state is a plain function that drives the [`Lexer`] cursor, emits tokens
/// and returns the state to run next. Returning `None` ends the scan and
/// closes the token stream. States carry no data of their own; everything
/// they need lives in the lexer.
pub struct State<T>(StateFn<T>);

impl<T> State<T> {
    /// Wraps a state function.
    #[must_use]
    #[inline]
    pub const fn new(f: StateFn<T>) -> Self {
        Self(f)
    }

    /// Runs this state against `lexer` and returns the next state.
    #[inline]
    pub fn call(self, lexer: &mut Lexer<T>) -> Option<State<T>> {
        (self.0)(lexer)
    }
}

impl<T> From<StateFn<T>> for State<T> {
    fn from(f: StateFn<T>) -> Self {
        Self(f)
    }
}

// Manual impls: deriving would put needless bounds on `T`.
impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for State<T> {}

impl<T> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State")
            .field(&(self.0 as *const ()))
            .finish()
    }
}
