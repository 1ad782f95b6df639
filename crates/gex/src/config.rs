use bstr::ByteSlice;

use crate::{Options, Result, State, TokenStream, driver};

/// Everything needed to start a lexer: the input, the initial state and the
/// [`Options`].
///
/// ```rust
/// use gex::{Config, Lexer, State};
///
/// fn words(l: &mut Lexer<u8>) -> Option<State<u8>> {
///     if l.accept_while(char::is_alphanumeric) == 0 {
///         return None;
///     }
///     l.emit(1);
///     l.accept_while(char::is_whitespace);
///     l.skip();
///     Some(State::new(words))
/// }
///
/// let stream = Config::new("a bc", State::new(words))
///     .with_name("words")
///     .with_capacity(0)
///     .run()
///     .unwrap();
/// let words: Vec<_> = stream.map(|t| t.value).collect();
/// assert_eq!(words, ["a", "bc"]);
/// ```
#[derive(Debug, Clone)]
pub struct Config<T> {
    /// The input text.
    pub input: String,
    /// The state the lexer starts in.
    pub init: State<T>,
    /// Tunable parameters.
    pub options: Options<T>,
}

impl<T: Default> Config<T> {
    /// Creates a configuration with default [`Options`].
    #[must_use]
    pub fn new(input: impl Into<String>, init: State<T>) -> Self {
        Self::with_options(input, init, Options::default())
    }

    /// Creates a configuration over raw bytes.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD before scanning
    /// starts, so the state functions always see well-formed text.
    #[must_use]
    pub fn from_bytes(input: impl AsRef<[u8]>, init: State<T>) -> Self {
        Self::new(input.as_ref().to_str_lossy(), init)
    }
}

impl<T> Config<T> {
    /// Creates a configuration with the given options.
    #[must_use]
    pub fn with_options(input: impl Into<String>, init: State<T>, options: Options<T>) -> Self {
        Self {
            input: input.into(),
            init,
            options,
        }
    }

    /// Sets the lexer name. See [`Options::name`].
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.options = self.options.with_name(name);
        self
    }

    /// Sets the token stream capacity. See [`Options::capacity`].
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.options = self.options.with_capacity(capacity);
        self
    }

    /// Sets the end-of-input sentinel. See [`Options::eof`].
    #[must_use]
    pub fn with_eof(mut self, eof: char) -> Self {
        self.options = self.options.with_eof(eof);
        self
    }

    /// Sets the error token kind. See [`Options::error`].
    #[must_use]
    pub fn with_error(mut self, error: T) -> Self {
        self.options = self.options.with_error(error);
        self
    }
}

impl<T: Send + 'static> Config<T> {
    /// Starts the lexer. Shorthand for [`run_with_config`](crate::run_with_config).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spawn`](crate::Error::Spawn) if the producer thread
    /// cannot be started.
    pub fn run(self) -> Result<TokenStream<T>> {
        driver::run_with_config(self)
    }
}
