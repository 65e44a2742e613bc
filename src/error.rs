use std::io;

use thiserror::Error;

/// Structural problems found while loading a search index. A load that hits
/// any of these never produces a queryable index.
#[derive(Debug, Error)]
pub enum MalformedIndexError {
    #[error("index is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("index must be a sequence of records")]
    NotASequence,

    #[error("record {index} is not an object")]
    NotAnObject { index: usize },

    #[error("record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: field `{field}` must be {expected}")]
    WrongType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },

    #[error("record {index}: field `{field}` contains an empty entry")]
    EmptyTag { index: usize, field: &'static str },

    #[error("record {index}: `{value}` is not an ISO-8601 date")]
    InvalidDate { index: usize, value: String },
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("error reading index file: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Malformed(#[from] MalformedIndexError),
}
