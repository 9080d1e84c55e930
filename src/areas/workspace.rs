use crate::artifacts::errors::RepositoryError;
use crate::artifacts::index::ignore_list::IgnoreList;
use crate::{CONTROL_DIR, IGNORE_FILE};
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The working directory the repository tracks
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Regular files directly inside the working directory, in name order
    ///
    /// Subdirectories are not descended into and the control directory is
    /// skipped. Names with a line break cannot be staged and are left out.
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != CONTROL_DIR)
            .map(|entry| -> anyhow::Result<Option<PathBuf>> {
                let entry = entry
                    .with_context(|| format!("failed to list workspace at {:?}", self.path))?;
                if !entry.file_type().is_file() {
                    return Ok(None);
                }

                let file_path = entry.path().strip_prefix(&self.path)?.to_path_buf();
                if has_line_break(&file_path) {
                    tracing::warn!(path = ?file_path, "skipping file with a line break in its name");
                    return Ok(None);
                }

                Ok(Some(file_path))
            })
            .filter_map(Result::transpose)
            .collect()
    }

    /// Check that `file_path` names a regular file before anything is hashed
    ///
    /// Index entries are one per line, so names with a line break are refused.
    pub fn check_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let absolute_path = self.path.join(file_path);
        let display = file_path.display().to_string();

        if has_line_break(file_path) {
            return Err(RepositoryError::LineBreakInPath(display).into());
        }

        if !absolute_path.exists() {
            return Err(RepositoryError::PathNotFound(display).into());
        }

        if !absolute_path.is_file() {
            return Err(RepositoryError::NotAFile(display).into());
        }

        Ok(())
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let absolute_path = self.path.join(file_path);

        let content = std::fs::read(&absolute_path)
            .with_context(|| format!("failed to read file {:?}", absolute_path))?;

        Ok(content.into())
    }

    pub fn ignore_list(&self) -> anyhow::Result<IgnoreList> {
        IgnoreList::load(&self.path.join(IGNORE_FILE))
    }
}

fn has_line_break(file_path: &Path) -> bool {
    file_path
        .to_string_lossy()
        .contains(['\n', '\r'])
}
