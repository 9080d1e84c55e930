use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

/// Failures the repository reports to the user
///
/// These travel inside `anyhow::Error`; use `downcast_ref` to match on them.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("not a bitlet repository: {0}")]
    NotARepository(PathBuf),

    #[error("File does not exist: {0}")]
    PathNotFound(String),

    #[error("Not a regular file: {0}")]
    NotAFile(String),

    #[error("Path contains a line break: {0:?}")]
    LineBreakInPath(String),

    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    #[error("No such branch: {0}")]
    NoSuchBranch(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("malformed index entry: {0:?}")]
    MalformedIndexEntry(String),

    #[error("malformed commit object: {0}")]
    MalformedCommit(String),

    #[error("malformed HEAD: {0:?}")]
    MalformedHead(String),
}
