//! Parsed-form container handed over by the HTTP layer

use std::collections::HashMap;

use crate::file::FilePart;

/// Text fields keyed by canonical path.
pub type ValueMap = HashMap<String, Vec<String>>;

/// Uploaded files keyed by canonical path.
pub type FileMap = HashMap<String, Vec<FilePart>>;

/// A parsed multipart/form-data payload.
///
/// Produced by the HTTP layer; keys in both maps follow the nested-path
/// grammar of [`crate::path`]. The binder consumes it read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    /// Text fields.
    pub values: ValueMap,
    /// File fields.
    pub files: FileMap,
}

impl MultipartForm {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text value under `key`.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Append one file part under `key`.
    pub fn with_file(mut self, key: impl Into<String>, part: FilePart) -> Self {
        self.files.entry(key.into()).or_default().push(part);
        self
    }

    /// Record `key` with the given payload, empty payloads included.
    pub fn with_files(
        mut self,
        key: impl Into<String>,
        parts: impl IntoIterator<Item = FilePart>,
    ) -> Self {
        self.files.entry(key.into()).or_default().extend(parts);
        self
    }
}
