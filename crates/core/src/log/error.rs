use std::{io, path::PathBuf};

use thiserror::Error;

use crate::UnknownObjective;

/// Errors raised while parsing log text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: marker without a ':' separator")]
    MissingColon { line: usize },
}

/// Errors raised while reading a log from disk.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Errors raised while resolving the objective named in a log.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("log has no `Objective Function:` header")]
    MissingName,

    #[error(transparent)]
    Unknown(#[from] UnknownObjective),
}
