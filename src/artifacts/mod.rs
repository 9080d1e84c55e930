//! Value types shared by the repository areas
//!
//! - `branch`: validated branch names
//! - `errors`: domain error taxonomy
//! - `index`: staged entries and the ignore list
//! - `objects`: object ids, blobs, tree listings and commits

pub mod branch;
pub mod errors;
pub mod index;
pub mod objects;
