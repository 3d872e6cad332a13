//! Error types for reading source trees

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for source tree operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Error type for reading and parsing Rust sources
#[derive(Error, Debug)]
pub enum SourceError {
    /// A file or directory could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file is not valid Rust
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: syn::Error,
    },

    /// The source root is not a directory
    #[error("source root {0} is not a directory")]
    NotADirectory(PathBuf),
}
