//! Binding limits

/// Limits preventing wire-driven resource blowup
///
/// Indexed keys dictate sequence growth, so without a bound a hostile
/// `photos[4000000000]` would force a multi-gigabyte allocation before any
/// file is placed.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum length any sequence may be grown to (default: 4,096)
    pub max_sequence_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_sequence_len: 4_096,
        }
    }
}
