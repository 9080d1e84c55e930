//! Index file format
//!
//! The index (staging area) is a plain text file, one entry per line:
//!
//! ```text
//! <path> <40-hex-digest>\n
//! ```
//!
//! Entries are appended in staging order and the file is truncated by commit.
//! The same path may appear more than once.

pub mod ignore_list;
pub mod index_entry;

/// Separator between the path and the digest of an entry
pub const ENTRY_SEPARATOR: char = ' ';
