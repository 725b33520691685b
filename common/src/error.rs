use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The input could not be parsed as JSON at all.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// The input is valid JSON but not shaped like a dataset.
    #[error("schema error: {reason}")]
    Schema { reason: String },

    /// Reading an input stream failed before any parsing happened.
    #[error("failed to read input: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn schema(reason: impl Into<String>) -> Self {
        Self::Schema {
            reason: reason.into(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }
}
