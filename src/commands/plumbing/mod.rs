//! Plumbing commands (direct object database access)
//!
//! - `hash-object`: compute a file's object id and optionally store it
//! - `cat-file`: print the raw payload of a stored object

pub mod cat_file;
pub mod hash_object;
