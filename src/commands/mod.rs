//! Command implementations
//!
//! - `plumbing`: direct object access (hash-object, cat-file)
//! - `porcelain`: the version control workflow (init, add, commit, status,
//!   log, branch, checkout)
//!
//! Every command is a method on `Repository`.

pub mod plumbing;
pub mod porcelain;
