//! Driver: runs the state machine on a producer thread and hands the caller
//! the receiving end of the token stream.
//!
//! The stream closes when the [`Lexer`] owning the sender is dropped, which
//! happens exactly once on every exit path of the producer: a state returning
//! `None`, the consumer going away, or a state function panicking.

use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;
use tracing::{debug, trace};

use crate::{Config, Error, Lexer, Options, Result, State, Token, TryRecvError};

/// Starts a lexer over `input` with default [`Options`].
///
/// The state machine begins running immediately on a background thread.
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the producer thread cannot be started.
pub fn run<T>(input: impl Into<String>, init: State<T>) -> Result<TokenStream<T>>
where
    T: Default + Send + 'static,
{
    run_with_config(Config::new(input, init))
}

/// Starts a lexer over `input` with the given [`Options`].
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the producer thread cannot be started.
pub fn run_with_options<T>(
    input: impl Into<String>,
    init: State<T>,
    options: Options<T>,
) -> Result<TokenStream<T>>
where
    T: Send + 'static,
{
    run_with_config(Config::with_options(input, init, options))
}

/// Starts a lexer over raw bytes with default [`Options`].
///
/// Invalid UTF-8 sequences are replaced with U+FFFD. See
/// [`Config::from_bytes`].
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the producer thread cannot be started.
pub fn run_bytes<T>(input: impl AsRef<[u8]>, init: State<T>) -> Result<TokenStream<T>>
where
    T: Default + Send + 'static,
{
    run_with_config(Config::from_bytes(input, init))
}

/// Starts a lexer from a prepared [`Config`].
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the producer thread cannot be started.
pub fn run_with_config<T>(config: Config<T>) -> Result<TokenStream<T>>
where
    T: Send + 'static,
{
    let Config {
        input,
        init,
        options,
    } = config;

    let capacity = options.capacity;
    let (tx, rx) = crossbeam_channel::bounded(capacity);
    let thread_name = options.name.replace('\0', "");
    let lexer = Lexer::new(input, options, tx);

    debug!(lexer = %thread_name, capacity, "starting lexer");
    let handle = thread::Builder::new()
        .name(thread_name)
        .spawn(move || drive(lexer, init))?;

    Ok(TokenStream {
        tokens: rx,
        producer: handle,
    })
}

fn drive<T>(mut lexer: Lexer<T>, init: State<T>) {
    let mut state = Some(init);
    let mut steps = 0usize;
    while let Some(current) = state {
        trace!(
            lexer = lexer.name(),
            ?current,
            start = lexer.start(),
            pos = lexer.pos(),
            "enter state"
        );
        state = current.call(&mut lexer);
        steps += 1;

        if lexer.is_disconnected() {
            debug!(lexer = lexer.name(), steps, "consumer gone, stopping");
            return;
        }
    }
    debug!(lexer = lexer.name(), steps, "lexer finished");
}

/// The receiving end of a running lexer.
///
/// Yields tokens in the order they were emitted and ends once the state
/// machine stops. Dropping the stream early disconnects the producer: its
/// next emission fails instead of blocking, and the state machine stops after
/// the running state returns.
#[derive(Debug)]
pub struct TokenStream<T> {
    tokens: Receiver<Token<T>>,
    producer: JoinHandle<()>,
}

impl<T> TokenStream<T> {
    /// Blocks until the next token arrives. Returns `None` once the stream is
    /// closed and drained.
    pub fn recv(&self) -> Option<Token<T>> {
        self.tokens.recv().ok()
    }

    /// Returns a buffered token without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`TryRecvError::Empty`] while the producer is running with
    /// nothing buffered, and [`TryRecvError::Closed`] once the stream is
    /// closed and drained.
    pub fn try_recv(&self) -> Result<Token<T>, TryRecvError> {
        self.tokens.try_recv().map_err(|err| match err {
            crossbeam_channel::TryRecvError::Empty => TryRecvError::Empty,
            crossbeam_channel::TryRecvError::Disconnected => TryRecvError::Closed,
        })
    }

    /// Returns the number of tokens waiting in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns whether no tokens are waiting in the buffer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the buffer capacity of the stream.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tokens.capacity().unwrap_or_default()
    }

    /// Returns whether the producer thread has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.producer.is_finished()
    }

    /// Stops receiving and waits for the producer thread to exit.
    ///
    /// Tokens still buffered are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Producer`] if a state function panicked.
    pub fn join(self) -> Result<()> {
        let Self { tokens, producer } = self;
        drop(tokens);
        producer.join().map_err(|payload| {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_owned())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic payload".into());
            Error::Producer(message)
        })
    }

    /// Collects every remaining token, then waits for the producer.
    ///
    /// Unlike iterating and dropping the stream, this surfaces a panicking
    /// state function as [`Error::Producer`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Producer`] if a state function panicked.
    pub fn finish(self) -> Result<Vec<Token<T>>> {
        let tokens: Vec<_> = self.tokens.iter().collect();
        self.join().map(|()| tokens)
    }
}

impl<T> Iterator for TokenStream<T> {
    type Item = Token<T>;

    fn next(&mut self) -> Option<Token<T>> {
        self.recv()
    }
}

impl<T> core::iter::FusedIterator for TokenStream<T> {}
