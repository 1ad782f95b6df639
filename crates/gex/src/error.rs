use thiserror::Error;

/// Failures of the lexer machinery itself.
///
/// Lexical errors are not reported here: state functions report them in-band
/// as error tokens through [`Lexer::errorf`](crate::Lexer::errorf).
#[derive(Error, Debug)]
pub enum Error {
    /// The producer thread could not be started.
    #[error("failed to spawn lexer thread: {0}")]
    Spawn(#[from] std::io::Error),
    /// A state function panicked while the lexer was running.
    #[error("lexer thread panicked: {0}")]
    Producer(String),
}

/// Why [`TokenStream::try_recv`](crate::TokenStream::try_recv) returned no
/// token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryRecvError {
    /// The producer is still running but nothing is buffered yet.
    #[error("no token buffered yet")]
    Empty,
    /// The stream is closed and every buffered token has been taken.
    #[error("token stream closed")]
    Closed,
}

/// Result alias for [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
