//! Shared error types for the application
//!
//! Only whole-table problems are errors: a file that cannot be read or a
//! table whose columns cannot be identified. Bad cells are logged and the
//! row is kept. Anything that goes wrong while comparing two seed names is not an
//! error; the criterion simply reports no match.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for backup seed classification
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("{message}: {}", display_path(.path))]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Input file does not exist
    #[error("Error opening the file {}", .0.display())]
    FileNotFound(PathBuf),

    /// Input file is not a supported table format
    #[error("Unsupported input file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The table has no header row
    #[error("The table is empty - a header row is required")]
    EmptyTable,

    /// Prescale column missing or not unique
    #[error(
        "None or more than one prescale columns identified ({found} found) - check the table column names"
    )]
    PrescaleColumn { found: usize },

    /// No column holds seed names
    #[error("Error identifying the seed name column - make sure that the seed names start with '{prefix}'")]
    NameColumn { prefix: &'static str },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Malformed delimited input
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
