//! Branch references and HEAD
//!
//! Branches are text files under `refs/heads`, each holding the digest of
//! the branch's commit or nothing at all before the first commit. HEAD is a
//! single symbolic reference naming the active branch.
//!
//! ## File Format
//!
//! - `refs/heads/<name>`: a 40-character digest, or empty
//! - `HEAD`: `ref: refs/heads/<name>`
//!
//! There is no detached HEAD: HEAD only ever names a branch.

use crate::artifacts::branch::REF_PREFIX;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::errors::RepositoryError;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing the symbolic reference in HEAD
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// Branch and HEAD manager
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the control directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    /// Name of the branch HEAD points to
    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;
        let content = content.trim();

        let symref_match = regex::Regex::new(SYMREF_REGEX)?
            .captures(content)
            .ok_or_else(|| RepositoryError::MalformedHead(content.to_string()))?;

        BranchName::try_parse(symref_match[1].to_string())
    }

    pub fn is_current_branch(&self, branch_name: &BranchName) -> anyhow::Result<bool> {
        Ok(&self.current_branch()? == branch_name)
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    /// Read the commit a branch points to
    ///
    /// # Returns
    ///
    /// `None` while the branch has no commits, `NoSuchBranch` if it has no ref file
    pub fn resolve(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let ref_path = self.branch_path(branch_name);

        if !ref_path.is_file() {
            return Err(RepositoryError::NoSuchBranch(branch_name.to_string()).into());
        }

        let content = std::fs::read_to_string(&ref_path)
            .with_context(|| format!("failed to read ref file at {:?}", ref_path))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ObjectId::try_parse(content.to_string())?))
        }
    }

    /// Commit of the active branch
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.resolve(&self.current_branch()?)
    }

    /// Point a branch at a commit
    ///
    /// Overwrites unconditionally: no fast-forward or concurrent-writer checks.
    pub fn advance(&self, branch_name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(self.branch_path(branch_name), oid.as_ref())?;
        tracing::debug!(branch = %branch_name, oid = %oid, "advanced branch");

        Ok(())
    }

    /// Create a branch at the active branch's commit
    ///
    /// An existing branch with the same name is overwritten. Before the
    /// first commit the new branch is empty as well.
    pub fn create_branch(&self, name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let source_oid = self.read_head()?;
        let raw_ref = source_oid
            .as_ref()
            .map(ObjectId::to_string)
            .unwrap_or_default();

        self.update_ref_file(self.branch_path(name), &raw_ref)?;
        tracing::debug!(branch = %name, source = %raw_ref, "created branch");

        Ok(source_oid)
    }

    /// Make `name` the active branch
    ///
    /// Only existing branches can be checked out; otherwise HEAD is left
    /// untouched and `NoSuchBranch` is returned.
    pub fn set_head(&self, name: &BranchName) -> anyhow::Result<()> {
        if !self.branch_exists(name) {
            return Err(RepositoryError::NoSuchBranch(name.to_string()).into());
        }

        self.write_head(name)
    }

    /// Write HEAD without checking the branch exists, used by `init`
    pub fn write_head(&self, name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(self.head_path(), &format!("ref: {}\n", name.as_ref_path()))
    }

    /// Create an empty ref file unless one is already there
    pub fn create_empty_branch(&self, name: &BranchName) -> anyhow::Result<()> {
        let branch_path = self.branch_path(name);

        if !branch_path.exists() {
            self.update_ref_file(branch_path, "")?;
        }

        Ok(())
    }

    pub fn update_ref_file(&self, path: Box<Path>, raw_ref: &str) -> anyhow::Result<()> {
        // create all the parent directories if they don't exist
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    /// All branch names in name order
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        WalkDir::new(&heads_path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| -> anyhow::Result<Option<BranchName>> {
                let entry = entry
                    .with_context(|| format!("failed to list branches at {:?}", heads_path))?;
                if !entry.file_type().is_file() {
                    return Ok(None);
                }

                let relative_path = entry.path().strip_prefix(&heads_path)?;
                BranchName::try_parse(relative_path.to_string_lossy().replace('\\', "/")).map(Some)
            })
            .filter_map(Result::transpose)
            .collect()
    }

    pub fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        let name: &str = branch_name.as_ref();
        self.heads_path().join(name).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.path
            .join(REF_PREFIX.trim_end_matches('/'))
            .into_boxed_path()
    }
}
