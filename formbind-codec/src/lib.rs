//! Formbind Codec - The multipart binder engine
//!
//! This crate binds parsed multipart/form-data payloads into nested target
//! structures:
//!
//! - Target-shape traits driving the recursive walk
//! - The file placer (dotted, bracketed and indexed key resolution)
//! - The delegated text-value decoder seam
//! - The public `Binder` entry point

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bind;
pub mod target;
pub mod values;

mod place;

// Re-export commonly used types
pub use formbind_format::{
    BindError, BoxError, FileMap, FilePart, IndexStyle, Limits, MultipartForm, Result, ValueMap,
};

// Re-export our own types
pub use bind::{bind, BindOpts, Binder};
pub use target::{BindTarget, Field, FieldSlot, GroupRef, GroupSeq};
pub use values::{decode_with, DecodeWith, IgnoreValues, ValueDecoder};
