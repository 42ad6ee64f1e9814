//! Canonical field-name transform
//!
//! Text fields and file fields must land on the same map keys, so this
//! transform is shared: the placer applies it to every declared field, and
//! delegated value decoders are expected to apply the same one.

use std::sync::LazyLock;

use regex::Regex;

// Boundary passes for the snake_case transform: any character followed by an
// upper-then-lower run, then a lower-or-digit followed by an upper.
static FIRST_CAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(.)([A-Z][a-z]+)").expect("valid regex"));
static ALL_CAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([a-z0-9])([A-Z])").expect("valid regex"));

/// Transliterate a declared CamelCase name to snake_case.
///
/// Idempotent: a name already in snake_case comes back unchanged.
pub fn to_snake_case(name: &str) -> String {
    let pass = FIRST_CAP.replace_all(name, "${1}_${2}");
    let pass = ALL_CAP.replace_all(&pass, "${1}_${2}");
    pass.to_lowercase()
}

/// Resolve the canonical path segment for a declared field.
///
/// A non-empty form tag wins: its prefix before the first comma is the
/// segment, taken verbatim, and a prefix of `-` suppresses the field
/// entirely (`None`). Without a tag the declared name is snake_cased.
pub fn field_segment(tag: Option<&str>, declared: &str) -> Option<String> {
    match tag {
        Some(tag) if !tag.is_empty() => {
            let head = match tag.split_once(',') {
                Some((head, _)) => head,
                None => tag,
            };
            if head == "-" {
                None
            } else {
                Some(head.to_string())
            }
        }
        _ => Some(to_snake_case(declared)),
    }
}
