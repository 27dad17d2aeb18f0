//! Failure modes of dataset resolution and lookup
//!
//! A data kind which a language simply does not have is not an error: it is
//! reported as `None` by the resolver and the lookup layer.

use std::{io, path::Path};
use thiserror::Error;

/// Result type of the dataset resolution and lookup layer
pub type Result<T> = std::result::Result<T, Error>;

/// Error from dataset resolution or lookup
#[derive(Debug, Error)]
pub enum Error {
    /// Language code does not have exactly 3 characters
    #[error("language code must be a 3-letter ISO 639-3 code, got {0:?}")]
    InvalidCode(Box<str>),

    /// Download collaborator could not populate the language's directory
    #[error("failed to fetch the {language} dataset")]
    Fetch {
        language: Box<str>,
        #[source]
        source: anyhow::Error,
    },

    /// Dataset file exists, but does not follow its data kind's schema
    #[error("malformed dataset file {}: {reason}", .path.display())]
    Parse { path: Box<Path>, reason: Box<str> },

    /// Dataset file or directory exists, but could not be accessed
    #[error("failed to access {}", .path.display())]
    Io {
        path: Box<Path>,
        #[source]
        source: io::Error,
    },
}
//
impl Error {
    /// Build an I/O error about a certain path
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a parse error about a certain dataset file
    pub(crate) fn parse(path: &Path, reason: impl Into<Box<str>>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
