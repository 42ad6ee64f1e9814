//! Recursive file placement
//!
//! Walks the target shape depth-first. Each field contributes its canonical
//! segment to the current path, and the file map is probed for keys
//! addressing that path. Missing keys are never errors; empty payloads are
//! placement no-ops but still count for structural decisions (lazy
//! allocation, sequence growth), matching the grammar's observable
//! behaviour.

use std::collections::HashMap;

use ahash::RandomState;
use smallvec::SmallVec;
use tracing::trace;

use formbind_format::name::field_segment;
use formbind_format::path::{self, IndexStyle};
use formbind_format::{BindError, FileMap, FilePart, Result};

use crate::bind::BindOpts;
use crate::target::{BindTarget, FieldSlot, GroupRef, GroupSeq};

/// Scratch maps keyed by sequence index.
type IndexMap<V> = HashMap<usize, V, RandomState>;

pub(crate) struct Placer<'a> {
    files: &'a FileMap,
    opts: &'a BindOpts,
}

impl<'a> Placer<'a> {
    pub(crate) fn new(files: &'a FileMap, opts: &'a BindOpts) -> Self {
        Self { files, opts }
    }

    /// Walk `target` at `path`, placing every file key addressed beneath it.
    pub(crate) fn place(&self, target: &mut dyn BindTarget, path: &str) -> Result<()> {
        for field in target.fields() {
            let Some(segment) = field_segment(field.tag(), field.name()) else {
                continue; // suppressed by a `-` tag
            };
            let flatten = field.is_flattened();
            match field.into_slot() {
                FieldSlot::File(cell) => {
                    self.place_single(cell, &path::join(path, &segment))?;
                }
                FieldSlot::FileSeq(cells) => {
                    self.place_file_seq(cells, &path::join(path, &segment))?;
                }
                FieldSlot::Group(group) => {
                    let child = self.child_path(path, &segment, flatten);
                    self.place(group, &child)?;
                }
                FieldSlot::GroupRef(group) => {
                    let child = self.child_path(path, &segment, flatten);
                    self.place_group_ref(group, &child)?;
                }
                FieldSlot::GroupSeq(seq) => {
                    self.place_group_seq(seq, &path::join(path, &segment))?;
                }
                FieldSlot::Other => {}
            }
        }
        Ok(())
    }

    fn child_path(&self, path: &str, segment: &str, flatten: bool) -> String {
        if flatten {
            path.to_string()
        } else {
            path::join(path, segment)
        }
    }

    /// A vacant reference is only allocated when some key needs it.
    fn place_group_ref(&self, group: &mut dyn GroupRef, path: &str) -> Result<()> {
        if group.is_vacant() && !self.any_key_under(path) {
            return Ok(());
        }
        self.place(group.materialize(), path)
    }

    fn any_key_under(&self, path: &str) -> bool {
        self.files.keys().any(|key| path::key_targets_path(key, path))
    }

    /// Single-file cell at `path`.
    fn place_single(&self, cell: &mut Option<FilePart>, path: &str) -> Result<()> {
        let Some(parts) = self.files.get(path) else {
            return Ok(());
        };
        if parts.is_empty() {
            if self.opts.clear_on_empty_payload {
                *cell = None;
            }
            return Ok(());
        }
        if parts.len() > 1 {
            return Err(BindError::SingleCellOverfilled {
                cell: path.to_string(),
                count: parts.len(),
            });
        }
        trace!(path, file = parts[0].file_name(), "placing single file");
        *cell = Some(parts[0].clone());
        Ok(())
    }

    /// File-sequence cell at `path`.
    ///
    /// A direct key replaces the sequence wholesale; indexed keys grow it in
    /// place. The two never combine, and neither do the two index spellings.
    fn place_file_seq(&self, cells: &mut Vec<Option<FilePart>>, path: &str) -> Result<()> {
        let mut bracket: IndexMap<&[FilePart]> = IndexMap::default();
        let mut dot: IndexMap<&[FilePart]> = IndexMap::default();

        for (key, parts) in self.files {
            if parts.is_empty() {
                continue; // empty payloads never count as indexed candidates
            }
            for style in [IndexStyle::Bracket, IndexStyle::Dot] {
                let Some(m) = path::match_indexed_leaf(key, style) else {
                    continue;
                };
                if m.parent != path {
                    continue;
                }
                let map = match style {
                    IndexStyle::Bracket => &mut bracket,
                    IndexStyle::Dot => &mut dot,
                };
                if map.insert(m.index, parts.as_slice()).is_some() {
                    return Err(BindError::DuplicateIndex {
                        path: path.to_string(),
                        index: m.index,
                        key: key.clone(),
                    });
                }
            }
        }

        let has_indexed = !bracket.is_empty() || !dot.is_empty();
        let direct = self.files.get(path).filter(|parts| !parts.is_empty());

        if direct.is_some() && has_indexed {
            return Err(BindError::DirectAndIndexed {
                path: path.to_string(),
            });
        }

        if let Some(parts) = direct {
            trace!(path, count = parts.len(), "placing file sequence directly");
            *cells = parts.iter().cloned().map(Some).collect();
            return Ok(());
        }

        if !has_indexed {
            if self.opts.clear_on_empty_payload
                && self.files.get(path).is_some_and(|parts| parts.is_empty())
            {
                cells.clear();
            }
            return Ok(());
        }

        if !bracket.is_empty() && !dot.is_empty() {
            return Err(BindError::MixedIndexFormats {
                path: path.to_string(),
            });
        }

        let (indexed, style) = if bracket.is_empty() {
            (dot, IndexStyle::Dot)
        } else {
            (bracket, IndexStyle::Bracket)
        };

        let Some(max_index) = indexed.keys().copied().max() else {
            return Ok(());
        };
        let required = max_index + 1;
        self.check_sequence_len(path, required)?;

        if cells.len() < required {
            trace!(path, required, "growing file sequence");
            cells.resize(required, None);
        }

        for (&index, &parts) in &indexed {
            if parts.len() > 1 {
                return Err(BindError::SingleCellOverfilled {
                    cell: style.render(path, index),
                    count: parts.len(),
                });
            }
            cells[index] = Some(parts[0].clone());
        }
        Ok(())
    }

    /// Structure-sequence at `path`.
    fn place_group_seq(&self, seq: &mut dyn GroupSeq, path: &str) -> Result<()> {
        let mut formats: IndexMap<IndexStyle> = IndexMap::default();

        for key in self.files.keys() {
            for style in [IndexStyle::Bracket, IndexStyle::Dot] {
                let Some(m) = path::match_indexed_with_tail(key, style) else {
                    continue;
                };
                if m.parent != path {
                    continue;
                }
                if let Some(existing) = formats.insert(m.index, style) {
                    if existing != style {
                        return Err(BindError::MixedIndexFormats {
                            path: path.to_string(),
                        });
                    }
                }
            }
        }

        if formats.is_empty() {
            return Ok(());
        }

        let mut indices: SmallVec<[usize; 8]> = formats.keys().copied().collect();
        indices.sort_unstable();

        // The smallest observed index fixes the spelling for the whole
        // sequence.
        let expected = formats[&indices[0]];
        for &index in indices.iter() {
            let found = formats[&index];
            if found != expected {
                return Err(BindError::InconsistentIndexFormat {
                    path: path.to_string(),
                    index,
                    found,
                    expected,
                });
            }
        }

        let required = indices[indices.len() - 1] + 1;
        self.check_sequence_len(path, required)?;
        if seq.len() < required {
            trace!(path, required, "growing structure sequence");
        }
        seq.grow(required);

        for &index in indices.iter() {
            let element_path = expected.render(path, index);
            self.place(seq.element_mut(index), &element_path)?;
        }
        Ok(())
    }

    fn check_sequence_len(&self, path: &str, required: usize) -> Result<()> {
        let max = self.opts.limits.max_sequence_len;
        if required > max {
            return Err(BindError::LimitExceeded(format!(
                "sequence {path} would grow to {required} elements (limit: {max})"
            )));
        }
        Ok(())
    }
}
