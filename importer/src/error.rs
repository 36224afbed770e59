use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("You must specify a --input format option.")]
    MissingInputFormat,

    #[error("You must specify a valid --path option.")]
    InvalidPath { path: Option<PathBuf> },

    /// Reported to the user by `run` rather than propagated.
    #[error(
        "Wrong output format '{format}'. Supported formats are: {}.",
        .supported.join(", ")
    )]
    UnsupportedFormat {
        format: String,
        supported: Vec<String>,
    },

    #[error("failed to scan '{}'", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write catalogue for '{}'", source_file.display())]
    Write {
        source_file: PathBuf,
        #[source]
        source: WriteError,
    },
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("unsupported output format '{0}'")]
    UnsupportedFormat(String),

    #[error("unsupported XLIFF version '{0}'")]
    UnsupportedXliffVersion(String),

    #[error("invalid locale '{0}'")]
    InvalidLocale(String),

    #[error("failed to encode JSON catalogue")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode INI catalogue")]
    Ini(#[source] io::Error),

    #[error("failed to write '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
