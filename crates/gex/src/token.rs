use core::fmt;

/// A basic, abstract unit of lexical meaning.
///
/// `T` is the token kind, typically a fieldless enum. `value` is the slice of
/// input text the token was scanned from, or a formatted diagnostic for error
/// tokens produced by [`Lexer::errorf`](crate::Lexer::errorf).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token<T> {
    /// The token kind.
    pub kind: T,
    /// The token text.
    pub value: String,
}

impl<T> Token<T> {
    /// Creates a token from its kind and text.
    #[must_use]
    pub fn new(kind: T, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Returns the token text.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> From<Token<T>> for (T, String) {
    fn from(token: Token<T>) -> Self {
        (token.kind, token.value)
    }
}
