//! Nested-path key grammar
//!
//! A file key is a dot-separated chain of segments; a segment is a plain
//! name or a name carrying an index in bracket (`photos[0]`) or dot
//! (`photos.0`) spelling. Four anchored patterns recognize indexed keys;
//! parent capture is greedy, so the rightmost indexed segment wins and an
//! all-digits field name loses to grammar precedence.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static INDEXED_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\[(\d+)\]\.(.+)$").expect("valid regex"));
static INDEXED_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\.(\d+)\.(.+)$").expect("valid regex"));
static INDEX_ONLY_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\[(\d+)\]$").expect("valid regex"));
static INDEX_ONLY_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\.(\d+)$").expect("valid regex"));

/// Spelling of an indexed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexStyle {
    /// `name[i]`
    Bracket,
    /// `name.i`
    Dot,
}

impl IndexStyle {
    /// Render the element path for `index` under `path` in this spelling.
    pub fn render(&self, path: &str, index: usize) -> String {
        match self {
            IndexStyle::Bracket => format!("{path}[{index}]"),
            IndexStyle::Dot => format!("{path}.{index}"),
        }
    }
}

impl fmt::Display for IndexStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexStyle::Bracket => f.write_str("bracket"),
            IndexStyle::Dot => f.write_str("dot"),
        }
    }
}

/// An indexed key split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedKey<'a> {
    /// Everything before the indexed segment.
    pub parent: &'a str,
    /// The decimal index.
    pub index: usize,
    /// Remainder after the indexed segment, when the key has one.
    pub tail: Option<&'a str>,
    /// Spelling of the index.
    pub style: IndexStyle,
}

/// Match `parent[i].tail` or `parent.i.tail` in the given spelling.
///
/// An index too large for `usize` disqualifies the match; the key is then
/// simply not an indexed key.
pub fn match_indexed_with_tail(key: &str, style: IndexStyle) -> Option<IndexedKey<'_>> {
    let re = match style {
        IndexStyle::Bracket => &INDEXED_BRACKET,
        IndexStyle::Dot => &INDEXED_DOT,
    };
    let caps = re.captures(key)?;
    let index = caps.get(2)?.as_str().parse().ok()?;
    Some(IndexedKey {
        parent: caps.get(1)?.as_str(),
        index,
        tail: Some(caps.get(3)?.as_str()),
        style,
    })
}

/// Match a leaf `parent[i]` or `parent.i` in the given spelling.
pub fn match_indexed_leaf(key: &str, style: IndexStyle) -> Option<IndexedKey<'_>> {
    let re = match style {
        IndexStyle::Bracket => &INDEX_ONLY_BRACKET,
        IndexStyle::Dot => &INDEX_ONLY_DOT,
    };
    let caps = re.captures(key)?;
    let index = caps.get(2)?.as_str().parse().ok()?;
    Some(IndexedKey {
        parent: caps.get(1)?.as_str(),
        index,
        tail: None,
        style,
    })
}

/// Join a parent path and a segment with the `.` separator.
pub fn join(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{parent}.{segment}")
    }
}

/// Whether `key` addresses `path` itself or anything nested beneath it.
///
/// The empty path is the root; every key addresses it.
pub fn key_targets_path(key: &str, path: &str) -> bool {
    if path.is_empty() {
        return true;
    }
    key == path
        || (key.len() > path.len()
            && key.starts_with(path)
            && matches!(key.as_bytes()[path.len()], b'.' | b'['))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bracket_with_tail() {
        let m = match_indexed_with_tail("items[3].doc", IndexStyle::Bracket).unwrap();
        assert_eq!(m.parent, "items");
        assert_eq!(m.index, 3);
        assert_eq!(m.tail, Some("doc"));
    }

    #[test]
    fn test_dot_with_tail() {
        let m = match_indexed_with_tail("items.3.doc", IndexStyle::Dot).unwrap();
        assert_eq!(m.parent, "items");
        assert_eq!(m.index, 3);
        assert_eq!(m.tail, Some("doc"));
    }

    #[test]
    fn test_leaf_patterns() {
        let m = match_indexed_leaf("photos[0]", IndexStyle::Bracket).unwrap();
        assert_eq!((m.parent, m.index), ("photos", 0));

        let m = match_indexed_leaf("photos.0", IndexStyle::Dot).unwrap();
        assert_eq!((m.parent, m.index), ("photos", 0));

        assert!(match_indexed_leaf("photos[0]", IndexStyle::Dot).is_none());
        assert!(match_indexed_leaf("photos.0", IndexStyle::Bracket).is_none());
        assert!(match_indexed_leaf("photos", IndexStyle::Bracket).is_none());
        assert!(match_indexed_leaf("photos", IndexStyle::Dot).is_none());
    }

    #[test]
    fn test_greedy_parent_capture() {
        // The rightmost indexed segment wins; the parent swallows the rest.
        let m = match_indexed_with_tail("items.0.1.doc", IndexStyle::Dot).unwrap();
        assert_eq!(m.parent, "items.0");
        assert_eq!(m.index, 1);
        assert_eq!(m.tail, Some("doc"));

        let m = match_indexed_leaf("a.b.2", IndexStyle::Dot).unwrap();
        assert_eq!((m.parent, m.index), (("a.b"), 2));
    }

    #[test]
    fn test_all_digit_segment_loses_to_grammar_precedence() {
        // A field literally named "1" cannot be told apart from an index;
        // indexed patterns win.
        let m = match_indexed_leaf("a.1", IndexStyle::Dot).unwrap();
        assert_eq!((m.parent, m.index), ("a", 1));
    }

    #[test]
    fn test_oversized_index_disqualifies() {
        let key = "photos[99999999999999999999999999]";
        assert!(match_indexed_leaf(key, IndexStyle::Bracket).is_none());
        assert!(match_indexed_with_tail("p.99999999999999999999999999.x", IndexStyle::Dot).is_none());
    }

    #[test]
    fn test_nested_bracket_backtracks_to_tailed_match() {
        // "items[0].photos[1]" is not a tailed match at "items[0].photos",
        // but backtracking finds the tailed match at "items".
        let m = match_indexed_with_tail("items[0].photos[1]", IndexStyle::Bracket).unwrap();
        assert_eq!(m.parent, "items");
        assert_eq!(m.index, 0);
        assert_eq!(m.tail, Some("photos[1]"));

        let m = match_indexed_leaf("items[0].photos[1]", IndexStyle::Bracket).unwrap();
        assert_eq!(m.parent, "items[0].photos");
        assert_eq!(m.index, 1);
    }

    #[test]
    fn test_join() {
        assert_eq!(join("", "user"), "user");
        assert_eq!(join("user", "avatar"), "user.avatar");
    }

    #[test]
    fn test_key_targets_path() {
        assert!(key_targets_path("user", "user"));
        assert!(key_targets_path("user.avatar", "user"));
        assert!(key_targets_path("user[0]", "user"));
        assert!(!key_targets_path("username", "user"));
        assert!(!key_targets_path("use", "user"));
        assert!(key_targets_path("anything.at.all", ""));
    }

    #[test]
    fn test_render() {
        assert_eq!(IndexStyle::Bracket.render("photos", 2), "photos[2]");
        assert_eq!(IndexStyle::Dot.render("photos", 2), "photos.2");
    }

    proptest! {
        #[test]
        fn prop_leaf_render_roundtrip(
            parent in "[a-z][a-z0-9_]{0,12}(\\.[a-z][a-z0-9_]{0,12}){0,2}",
            index in 0usize..10_000,
        ) {
            for style in [IndexStyle::Bracket, IndexStyle::Dot] {
                let key = style.render(&parent, index);
                let m = match_indexed_leaf(&key, style).expect("rendered key matches");
                prop_assert_eq!(m.parent, parent.as_str());
                prop_assert_eq!(m.index, index);
            }
        }

        #[test]
        fn prop_tailed_render_roundtrip(
            parent in "[a-z][a-z0-9_]{0,12}",
            index in 0usize..10_000,
            tail in "[a-z][a-z0-9_]{0,12}",
        ) {
            for style in [IndexStyle::Bracket, IndexStyle::Dot] {
                let key = format!("{}.{}", style.render(&parent, index), tail);
                let m = match_indexed_with_tail(&key, style).expect("rendered key matches");
                prop_assert_eq!(m.parent, parent.as_str());
                prop_assert_eq!(m.index, index);
                prop_assert_eq!(m.tail, Some(tail.as_str()));
            }
        }
    }
}
