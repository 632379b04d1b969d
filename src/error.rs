use std::io;

use thiserror::Error;

/// Every failure in the search pipeline is fatal to the run; nothing here is retried.
#[derive(Debug, Error)]
pub enum TeamError {
    #[error("io error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("csv error in '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("'{source_name}' is missing required column '{column}'")]
    MissingColumn { source_name: String, column: String },

    #[error("'{source_name}' row {row}: {message}")]
    InvalidRow {
        source_name: String,
        row: usize,
        message: String,
    },

    #[error("'{source_name}' has duplicate key '{key}'")]
    DuplicateKey { source_name: String, key: String },

    /// A type name with no entry in the advantage index.
    #[error("unknown type '{type_name}'")]
    UnknownType { type_name: String },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TeamError {
    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TeamError>;
