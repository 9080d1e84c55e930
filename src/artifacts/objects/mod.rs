//! Stored objects
//!
//! The object database is untyped: every object is a byte payload keyed by the
//! SHA-1 of those bytes. Two producers exist:
//!
//! - **Blob**: raw file content, stored by `add`
//! - **Commit**: a flat tree listing plus message and date, stored by `commit`

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated object id shown to users
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
