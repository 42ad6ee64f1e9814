//! Formbind Format - Core primitives for multipart path binding
//!
//! This crate provides the key grammar and data types for formbind with no
//! engine logic. It includes:
//!
//! - The canonical field-name transform (form tags, snake_case)
//! - The nested-path key patterns (bracket and dot indexing)
//! - Uploaded-file handles
//! - The parsed-form container handed over by the HTTP layer
//! - Binding limits
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod file;
pub mod form;
pub mod limits;
pub mod name;
pub mod path;

// Re-export commonly used types
pub use error::{BindError, BoxError, Result};
pub use file::FilePart;
pub use form::{FileMap, MultipartForm, ValueMap};
pub use limits::Limits;
pub use path::IndexStyle;
