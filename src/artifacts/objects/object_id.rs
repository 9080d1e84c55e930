//! Object identifier (SHA-1 hash)
//!
//! Object ids are 40-character lowercase hexadecimal strings. They name every
//! file in `.git/objects` and are the content of every branch ref.
//!
//! ## Storage
//!
//! Objects are stored flat: `.git/objects/<40-hex-chars>`

use crate::artifacts::errors::RepositoryError;
use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};
use sha1::{Digest, Sha1};
use std::path::PathBuf;

/// Object identifier
///
/// Always holds a validated, lowercase, 40-character hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object id
    ///
    /// # Returns
    ///
    /// Validated ObjectId, or `InvalidObjectId` if the length or characters are wrong
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        let is_lower_hex = |c: char| c.is_ascii_digit() || ('a'..='f').contains(&c);

        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(is_lower_hex) {
            return Err(RepositoryError::InvalidObjectId(id).into());
        }

        Ok(Self(id))
    }

    /// Digest of the given bytes
    pub fn hash(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);

        Self(format!("{:x}", hasher.finalize()))
    }

    /// File name of the object inside the objects directory
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0[..SHORT_OBJECT_ID_LENGTH].to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
