//! Public binding entry points

use tracing::debug;

use formbind_format::{BindError, Limits, MultipartForm, Result};

use crate::place::Placer;
use crate::target::BindTarget;
use crate::values::{IgnoreValues, ValueDecoder};

/// Options controlling a bind call.
#[derive(Debug, Clone, Default)]
pub struct BindOpts {
    /// Limits on wire-driven sequence growth.
    pub limits: Limits,
    /// Treat an empty payload at a file cell as a request to clear it.
    ///
    /// Off by default: a key carrying an empty payload is treated as if the
    /// key were absent, and the cell keeps its pre-call value.
    pub clear_on_empty_payload: bool,
}

/// Binds parsed multipart forms into caller-supplied targets.
///
/// Carries the options and the delegated text-value decoder; the default
/// decoder ignores text fields entirely. Targets are mutated in place, and
/// fields no key addresses keep their pre-call values.
#[derive(Debug, Clone, Default)]
pub struct Binder<D = IgnoreValues> {
    opts: BindOpts,
    values: D,
}

impl Binder<IgnoreValues> {
    /// Binder with default options and no text decoding.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D> Binder<D> {
    /// Replace the options wholesale.
    pub fn with_opts(mut self, opts: BindOpts) -> Self {
        self.opts = opts;
        self
    }

    /// Replace the sequence-growth limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.opts.limits = limits;
        self
    }

    /// Use `decoder` for the text portion of each form.
    pub fn with_value_decoder<E>(self, decoder: E) -> Binder<E> {
        Binder {
            opts: self.opts,
            values: decoder,
        }
    }

    /// Bind `form` into `target`: text fields first, then file placement.
    pub fn bind<T>(&self, target: &mut T, form: &MultipartForm) -> Result<()>
    where
        T: BindTarget,
        D: ValueDecoder<T>,
    {
        self.values
            .decode_values(target, &form.values)
            .map_err(BindError::ValueDecode)?;
        debug!(files = form.files.len(), "placing multipart files");
        Placer::new(&form.files, &self.opts).place(target, "")
    }
}

/// Bind the files of `form` into `target` with default options, skipping
/// text fields.
pub fn bind<T: BindTarget>(target: &mut T, form: &MultipartForm) -> Result<()> {
    Binder::new().bind(target, form)
}
