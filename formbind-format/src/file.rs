//! Uploaded-file handles

use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;

/// Where an uploaded file's contents live.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FileSource {
    /// Fully buffered in memory.
    Memory(Bytes),
    /// Spooled to a temporary file whose lifecycle the HTTP layer owns.
    Temp(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FilePartInner {
    file_name: String,
    content_type: Option<String>,
    size: u64,
    source: FileSource,
}

/// Handle to one uploaded file.
///
/// The binder never reads contents; it only clones handles into the target.
/// Clones are cheap and share the same backing part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    inner: Arc<FilePartInner>,
}

impl FilePart {
    /// Part backed by in-memory contents.
    pub fn from_bytes(file_name: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        let contents = contents.into();
        Self {
            inner: Arc::new(FilePartInner {
                file_name: file_name.into(),
                content_type: None,
                size: contents.len() as u64,
                source: FileSource::Memory(contents),
            }),
        }
    }

    /// Part spooled to a temporary file by the HTTP layer.
    pub fn from_temp_file(
        file_name: impl Into<String>,
        path: impl Into<PathBuf>,
        size: u64,
    ) -> Self {
        Self {
            inner: Arc::new(FilePartInner {
                file_name: file_name.into(),
                content_type: None,
                size,
                source: FileSource::Temp(path.into()),
            }),
        }
    }

    /// Attach the content type declared by the client.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.inner).content_type = Some(content_type.into());
        self
    }

    /// File name as sent by the client.
    pub fn file_name(&self) -> &str {
        &self.inner.file_name
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.inner.size
    }

    /// Content type declared by the client, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.inner.content_type.as_deref()
    }

    /// Open the contents for reading.
    ///
    /// Never called by the binder itself; provided for callers consuming the
    /// bound target afterwards.
    pub fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        match &self.inner.source {
            FileSource::Memory(bytes) => Ok(Box::new(Cursor::new(bytes.clone()))),
            FileSource::Temp(path) => Ok(Box::new(File::open(path)?)),
        }
    }
}
