/// Tunable parameters of a lexer run.
///
/// # Examples
///
/// ```rust
/// use gex::Options;
///
/// let options = Options::<u8> {
///     name: "ini".into(),
///     capacity: 16,
///     ..Default::default()
/// };
/// assert_eq!(options.eof, '\0');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options<T> {
    /// The name of the lexer.
    ///
    /// Prefixes every diagnostic produced by
    /// [`Lexer::errorf`](crate::Lexer::errorf) and names the producer thread.
    ///
    /// # Default
    ///
    /// `"gex"`
    pub name: String,

    /// The buffer size of the token stream.
    ///
    /// The producer blocks once this many tokens are waiting to be received.
    /// A capacity of `0` makes every emission a rendezvous with the consumer.
    ///
    /// # Default
    ///
    /// `2`
    pub capacity: usize,

    /// The sentinel rune returned by [`Lexer::next`](crate::Lexer::next) once
    /// the input is exhausted.
    ///
    /// # Default
    ///
    /// `'\0'`
    pub eof: char,

    /// The token kind used for error tokens.
    ///
    /// # Default
    ///
    /// `T::default()`
    pub error: T,
}

impl<T: Default> Default for Options<T> {
    fn default() -> Self {
        Self {
            name: "gex".into(),
            capacity: 2,
            eof: '\0',
            error: T::default(),
        }
    }
}

impl<T> Options<T> {
    /// Sets the lexer name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the token stream capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the end-of-input sentinel rune.
    #[must_use]
    pub fn with_eof(mut self, eof: char) -> Self {
        self.eof = eof;
        self
    }

    /// Sets the error token kind.
    #[must_use]
    pub fn with_error(mut self, error: T) -> Self {
        self.error = error;
        self
    }
}
