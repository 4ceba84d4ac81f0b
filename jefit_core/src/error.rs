//! Error types for the jefit_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for jefit_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV error (quote-aware parsing or output writing)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error (mapping file)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed section, header, or row shape
    #[error("parse error: {0}")]
    Parse(String),

    /// A data row whose field count differs from its header
    #[error("row has {found} fields but the header has {expected}: {line:?}")]
    RowArity {
        expected: usize,
        found: usize,
        line: String,
    },

    /// One of the tables going into the join has no rows
    #[error("cannot join: the {0} table is empty")]
    EmptyInput(&'static str),

    /// A packed set token that does not split into weight and reps
    #[error("malformed set token {token:?} for exercise {exercise:?}: expected <weight>x<reps>")]
    SetFormat { exercise: String, token: String },

    /// Malformed timezone offset string
    #[error("invalid timezone offset {0:?}")]
    Timezone(String),

    /// Configuration validation error
    #[error("configuration error: {0}")]
    Config(String),
}
