//! Flat tree listing
//!
//! A tree is the snapshot of the index at commit time: the staged entries in
//! staging order, duplicates included. It only exists inside a commit payload.
//!
//! ## Format
//!
//! ```text
//! tree
//! <path> <digest>
//! <path> <digest>
//! ```

use crate::artifacts::errors::RepositoryError;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::Packable;
use bytes::Bytes;
use std::io::Write;

/// Header line opening the listing
pub const TREE_HEADER: &str = "tree";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<IndexEntry>,
}

impl Tree {
    /// Snapshot the given entries, keeping their order
    pub fn build<'e>(entries: impl IntoIterator<Item = &'e IndexEntry>) -> Self {
        Tree {
            entries: entries.into_iter().cloned().collect(),
        }
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Parse a listing from its lines, header included
    pub fn parse<'l>(mut lines: impl Iterator<Item = &'l str>) -> anyhow::Result<Self> {
        match lines.next() {
            Some(TREE_HEADER) => {}
            other => {
                return Err(RepositoryError::MalformedCommit(format!(
                    "expected '{}' header, found {:?}",
                    TREE_HEADER, other
                ))
                .into());
            }
        }

        let entries = lines
            .map(IndexEntry::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Tree { entries })
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut tree_bytes = Vec::new();
        writeln!(tree_bytes, "{}", TREE_HEADER)?;

        for entry in &self.entries {
            tree_bytes.write_all(&entry.serialize()?)?;
        }

        Ok(tree_bytes.into())
    }
}
