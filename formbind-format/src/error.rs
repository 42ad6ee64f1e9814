//! Error types for multipart binding

use thiserror::Error;

use crate::path::IndexStyle;

/// Boxed error returned by delegated text-value decoders.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Binding error types
#[derive(Debug, Error)]
pub enum BindError {
    /// The delegated text-value decoder failed.
    #[error("Failed to decode form values: {0}")]
    ValueDecode(#[source] BoxError),
    /// Both bracket and dot index spellings address the same sequence.
    #[error("Cannot mix bracket and dot index formats for path {path}")]
    MixedIndexFormats {
        /// Sequence path the conflicting keys address.
        path: String,
    },
    /// Indices of one sequence disagree on their spelling.
    #[error(
        "Inconsistent index format for path {path}: index {index} uses {found}, \
         but earlier indices use {expected}"
    )]
    InconsistentIndexFormat {
        /// Sequence path the keys address.
        path: String,
        /// First index spelled differently from the earlier ones.
        index: usize,
        /// Spelling of the offending index.
        found: IndexStyle,
        /// Spelling established by the smallest observed index.
        expected: IndexStyle,
    },
    /// The same sequence cell was supplied twice with non-empty payloads.
    #[error("Duplicate index {index} for path {path} (key: {key})")]
    DuplicateIndex {
        /// Sequence path the keys address.
        path: String,
        /// Index supplied more than once.
        index: usize,
        /// The key observed second.
        key: String,
    },
    /// A sequence was addressed both directly and through indexed keys.
    #[error("Cannot provide both a direct key and indexed keys for path {path}")]
    DirectAndIndexed {
        /// Sequence path the conflicting keys address.
        path: String,
    },
    /// More than one file was bound to a cell that holds a single file.
    #[error("Multiple files uploaded for single-file cell {cell} ({count} files)")]
    SingleCellOverfilled {
        /// Path of the overfilled cell, index rendered in its observed style.
        cell: String,
        /// Number of files supplied.
        count: usize,
    },
    /// A configured binding limit was exceeded.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BindError>;
