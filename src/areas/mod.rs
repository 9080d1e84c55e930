//! Core repository components
//!
//! - `database`: content-addressed object store
//! - `index`: staging area of `<path> <digest>` entries
//! - `refs`: branches and the symbolic HEAD
//! - `repository`: the context value threaded through every command
//! - `workspace`: working directory reads and the ignore list

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
