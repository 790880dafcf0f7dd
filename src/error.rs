//! Error types.

use std::result::Result as StdResult;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Convenient return type for functions.
pub type Result<T> = StdResult<T, Error>;

/// Main error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Generic I/O error.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),

    /// The glyph sequence was not valid UTF-8.
    #[error("glyph sequence is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),

    /// Input ended while waiting for an answer.
    #[error("unexpected end of input at prompt {prompt:?}")]
    UnexpectedEof {
        /// The prompt that was waiting for input.
        prompt: String,
    },

    /// Comes from [TOML](https://crates.io/crates/toml).
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),

    /// The interrupt handler could not be installed.
    #[error("interrupt handler: {0}")]
    Interrupt(#[from] ctrlc::Error),

    /// Wrapped error within the context of a file.
    #[error("with file {file}: {error}")]
    WithFile {
        /// Wrapped error.
        #[source]
        error: Box<Self>,

        /// File the error is about.
        file: String,
    },
}

impl Error {
    pub(crate) fn with_file(self, file: impl AsRef<str>) -> Self {
        Self::WithFile {
            error: Box::new(self),
            file: file.as_ref().to_owned(),
        }
    }
}
