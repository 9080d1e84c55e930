//! Index entry representation
//!
//! Each entry pairs a path, exactly as it was given to `add`, with the digest
//! of the content staged for it.

use crate::artifacts::errors::RepositoryError;
use crate::artifacts::index::ENTRY_SEPARATOR;
use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use derive_new::new;
use std::path::PathBuf;

/// A staged `(path, digest)` pair
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// Path relative to the repository root
    pub name: PathBuf,
    /// Digest of the staged content
    pub oid: ObjectId,
}

impl IndexEntry {
    /// Render the entry as it appears in the index and in tree listings,
    /// without the trailing newline
    pub fn to_line(&self) -> String {
        format!("{}{}{}", self.name.display(), ENTRY_SEPARATOR, self.oid)
    }
}

impl Packable for IndexEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(Bytes::from(format!("{}\n", self.to_line())))
    }
}

impl TryFrom<&str> for IndexEntry {
    type Error = anyhow::Error;

    // split on the last separator so paths may contain spaces
    fn try_from(line: &str) -> anyhow::Result<Self> {
        let (name, oid) = line
            .rsplit_once(ENTRY_SEPARATOR)
            .filter(|(name, _)| !name.is_empty())
            .ok_or_else(|| RepositoryError::MalformedIndexEntry(line.to_string()))?;

        let oid = ObjectId::try_parse(oid.to_string())
            .map_err(|_| RepositoryError::MalformedIndexEntry(line.to_string()))?;

        Ok(Self::new(PathBuf::from(name), oid))
    }
}

impl std::fmt::Display for IndexEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_line())
    }
}
