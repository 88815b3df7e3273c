use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VsmError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A referenced base, document, query or judgment file does not exist.
    #[error("file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// IDF is undefined for a collection with no documents.
    #[error("the document collection is empty")]
    EmptyCollection,

    /// The query has no terms left after tokenization.
    #[error("the query has no terms after filtering")]
    EmptyQuery,

    #[error("malformed judgment input: {0}")]
    MalformedJudgments(String),

    /// Averaging needs at least one query.
    #[error("no queries to evaluate")]
    NoQueries,
}

pub type Result<T> = std::result::Result<T, VsmError>;

impl VsmError {
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        VsmError::MalformedJudgments(msg.into())
    }
}
