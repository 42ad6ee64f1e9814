//! Delegated text-value decoding
//!
//! The binder owns file placement only. Non-file fields are populated by a
//! caller-supplied decoder; it must resolve field names through the same
//! canonical transform ([`formbind_format::name::field_segment`]) so that
//! text fields and file fields land on the same keys.

use formbind_format::{BoxError, ValueMap};

/// Decodes the text portion of a multipart form into the target.
pub trait ValueDecoder<T: ?Sized> {
    /// Populate non-file fields of `target` from `values`.
    fn decode_values(&self, target: &mut T, values: &ValueMap) -> Result<(), BoxError>;
}

/// Decoder for callers that handle text fields separately; does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreValues;

impl<T: ?Sized> ValueDecoder<T> for IgnoreValues {
    fn decode_values(&self, _target: &mut T, _values: &ValueMap) -> Result<(), BoxError> {
        Ok(())
    }
}

/// Adapt a closure into a [`ValueDecoder`].
pub fn decode_with<F>(decode: F) -> DecodeWith<F> {
    DecodeWith(decode)
}

/// Closure-backed [`ValueDecoder`] returned by [`decode_with`].
#[derive(Debug, Clone, Copy)]
pub struct DecodeWith<F>(F);

impl<T: ?Sized, F> ValueDecoder<T> for DecodeWith<F>
where
    F: Fn(&mut T, &ValueMap) -> Result<(), BoxError>,
{
    fn decode_values(&self, target: &mut T, values: &ValueMap) -> Result<(), BoxError> {
        (self.0)(target, values)
    }
}
