//! Error types for the reader

use thiserror::Error;

/// Reader errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The lexical pattern could not be compiled
    ///
    /// **Triggered by:** nothing the caller passes in; the pattern is fixed at
    /// build time, so this only surfaces if the regex engine rejects it.
    #[error("Failed to compile token pattern: {0}")]
    PatternCompile(String),

    /// Reader construction could not obtain tokens
    #[error("Failed to tokenize form: {source}")]
    Tokenize {
        /// Underlying tokenizer failure
        #[source]
        source: Box<Error>,
    },

    /// An expected token is missing or mismatched at the cursor
    ///
    /// **Triggered by:** unterminated lists, empty input where a form was
    /// expected, or a list that does not start with `(`
    /// **Example:** `(+ 1 2` (missing closing parenthesis)
    #[error("Unexpected token at column {column}: expected {expected}, got {got}")]
    UnexpectedToken {
        /// Expected token description
        expected: String,
        /// Actual token received, or `end of input`
        got: String,
        /// Column (1-indexed) of the offending token, one past the line on exhaustion
        column: usize,
    },

    /// Lists nest deeper than the reader allows
    ///
    /// **Triggered by:** a line opening more nested lists than the limit,
    /// e.g. thousands of `(` in a row
    #[error("Nesting too deep at column {column}: more than {limit} nested lists")]
    NestingTooDeep {
        /// Maximum number of nested lists
        limit: usize,
        /// Column (1-indexed) of the `(` that exceeded the limit
        column: usize,
    },

    /// A parse step failed; `context` names the step
    #[error("{context}: {source}")]
    Context {
        /// Which parse step failed
        context: String,
        /// The failure inside that step
        #[source]
        source: Box<Error>,
    },
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Fatal error that cannot be recovered from
    Fatal,
    /// Recoverable error; the next line can still be read
    Recoverable,
}

impl Error {
    /// Wrap this error with the name of the step that failed
    pub fn context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an unexpected-token error for a missing token at end of input
    pub fn unexpected_eof(expected: impl Into<String>, column: usize) -> Self {
        Error::UnexpectedToken {
            expected: expected.into(),
            got: "end of input".to_string(),
            column,
        }
    }

    /// The innermost error, with every `Context` and `Tokenize` layer removed
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Context { source, .. } | Error::Tokenize { source } => source.root_cause(),
            other => other,
        }
    }

    /// Whether the root cause is an unexpected or missing token
    pub fn is_unexpected_token(&self) -> bool {
        matches!(self.root_cause(), Error::UnexpectedToken { .. })
    }

    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self.root_cause() {
            Error::PatternCompile(_) => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Recoverable,
        }
    }
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, Error>;
