use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the compiled lexicon artifact.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Lexicon file not found at {0:?}")]
    NotFound(PathBuf),

    #[error("I/O error on lexicon file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed lexicon JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Failed to read data file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write compiled lexicon: {0}")]
    Write(#[from] LexiconError),
}

/// Reasons a query is refused. A term with no entry is not one of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Please enter a word to look up.")]
    EmptyQuery,

    #[error("The lexicon failed to load; lookups are disabled.")]
    Unavailable,
}
