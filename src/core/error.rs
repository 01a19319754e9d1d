//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`MetaphorError`] which covers every failure mode of
//! metaphorever. It uses `thiserror` for ergonomic error definitions and
//! includes constructor helpers for the common failure scenarios.
//!
//! # Public API
//! - [`MetaphorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, MetaphorError>`
//!
//! # Error Categories
//! - **Persistence**: storage I/O and JSON (de)serialization. These are always
//!   recovered inside the cache and the library, never shown to the user.
//! - **Remote**: generation, analysis and translation calls
//! - **Input**: empty text, index selection, missing history or analysis

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for metaphorever
#[derive(Error, Debug)]
pub enum MetaphorError {
    // Input errors
    #[error("Please enter some text to generate a metaphor")]
    EmptyInput,

    #[error("Please enter a phrase to analyze")]
    EmptyPhrase,

    #[error("No phrase has been analyzed yet")]
    NoAnalysis,

    #[error("No metaphors in history yet. Run 'metaphorever generate <text>' first.")]
    NoHistory,

    // Index selection errors
    #[error("No history indices provided. Usage: metaphorever favorite <indices>\nExample: metaphorever favorite 1 3-5,8")]
    NoIndicesProvided,

    #[error("Invalid index format: {input}. Use format like: 1, 1-3, or 1,3,5")]
    InvalidIndexFormat { input: String },

    #[error("No valid indices provided. Use format like: 1, 1-3, or 1,3,5")]
    NoValidIndices,

    #[error("Invalid range format: '{range}'. Use format like '3-6'")]
    InvalidRangeFormat { range: String },

    #[error("Invalid number in range: '{number}'")]
    InvalidRangeNumber { number: String },

    #[error("Invalid range: start ({start}) must be <= end ({end})")]
    InvalidRangeOrder { start: usize, end: usize },

    #[error("Invalid number: '{number}'")]
    InvalidNumber { number: String },

    #[error("Index must be positive (got 0)")]
    ZeroIndex,

    #[error("Index {index} is out of range (1-{max} available)")]
    IndexOutOfRange { index: usize, max: usize },

    // Remote errors
    #[error("OpenAI API key not configured. Set OPENAI_API_KEY or add api_key to the config file.")]
    MissingApiKey,

    #[error("Failed to generate metaphor: {message}")]
    Generation { message: String },

    #[error("Failed to analyze phrase: {message}")]
    Analysis { message: String },

    #[error("Failed to translate phrase: {message}")]
    Translation { message: String },

    #[error("Failed to fetch the metaphor of the day: {message}")]
    Daily { message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Persistence errors
    #[error("Could not determine the {kind} directory")]
    DirectoryNotFound { kind: &'static str },

    #[error("Failed to read storage entry '{path}': {source}")]
    StorageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write storage entry '{path}': {source}")]
    StorageWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse stored value '{key}': {source}")]
    StorageParse {
        key: String,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using MetaphorError
pub type Result<T> = std::result::Result<T, MetaphorError>;

impl MetaphorError {
    /// Create a generation failure from any displayable cause
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Create an analysis failure from any displayable cause
    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis {
            message: message.into(),
        }
    }

    /// Create a translation failure from any displayable cause
    pub fn translation(message: impl Into<String>) -> Self {
        Self::Translation {
            message: message.into(),
        }
    }

    pub fn daily(message: impl Into<String>) -> Self {
        Self::Daily {
            message: message.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, max: usize) -> Self {
        Self::IndexOutOfRange { index, max }
    }

    /// Create an invalid index format error
    pub fn invalid_index_format(input: impl Into<String>) -> Self {
        Self::InvalidIndexFormat {
            input: input.into(),
        }
    }

    /// Create an invalid range format error
    pub fn invalid_range_format(range: impl Into<String>) -> Self {
        Self::InvalidRangeFormat {
            range: range.into(),
        }
    }

    /// Create an invalid range number error
    pub fn invalid_range_number(number: impl Into<String>) -> Self {
        Self::InvalidRangeNumber {
            number: number.into(),
        }
    }

    /// Create an invalid range order error
    pub fn invalid_range_order(start: usize, end: usize) -> Self {
        Self::InvalidRangeOrder { start, end }
    }

    /// Create an invalid number error
    pub fn invalid_number(number: impl Into<String>) -> Self {
        Self::InvalidNumber {
            number: number.into(),
        }
    }

    /// Create a storage read failed error
    pub fn storage_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageRead {
            path: path.into(),
            source,
        }
    }

    /// Create a storage write failed error
    pub fn storage_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a storage parse failed error
    pub fn storage_parse(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::StorageParse {
            key: key.into(),
            source,
        }
    }

    /// Whether this error came from a remote collaborator
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey
                | Self::Generation { .. }
                | Self::Analysis { .. }
                | Self::Translation { .. }
                | Self::Daily { .. }
                | Self::Http(_)
        )
    }
}
