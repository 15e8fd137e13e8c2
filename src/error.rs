//! Error types for menu-tree
//!
//! Library code returns `MenuTreeError` (via `thiserror`); the binary wraps it in
//! `anyhow`. Tree algorithms themselves are infallible.

use std::path::PathBuf;
use thiserror::Error;

use crate::definition::DefinitionFormat;

/// Result type alias for menu-tree operations
pub type MenuTreeResult<T> = Result<T, MenuTreeError>;

/// Main error type for menu-tree operations
#[derive(Error, Debug)]
pub enum MenuTreeError {
    /// Menu definition text could not be deserialized
    #[error("invalid {format} menu definition: {message}")]
    Parse {
        format: DefinitionFormat,
        message: String,
    },

    /// Menu definition file could not be deserialized
    #[error("invalid menu definition in {file}: {message}")]
    InvalidDefinition { file: PathBuf, message: String },

    /// Menu nesting is deeper than the configured limit
    #[error("menu '{label}' is nested {depth} levels deep (max {max})")]
    DepthExceeded {
        label: String,
        depth: usize,
        max: usize,
    },

    /// Search text could not be compiled into a pattern
    #[error("invalid search pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
