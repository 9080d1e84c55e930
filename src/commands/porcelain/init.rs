use crate::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;
use std::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized,
    AlreadyInitialized,
}

impl Repository {
    /// Create the control directory with HEAD on an empty default branch
    ///
    /// An existing control directory is left exactly as it is.
    pub async fn init(&mut self) -> anyhow::Result<InitOutcome> {
        if self.is_initialized() {
            writeln!(self.writer(), "Repository already initialized.")?;
            return Ok(InitOutcome::AlreadyInitialized);
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .git/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .git/refs/heads directory")?;

        let default_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        self.refs()
            .create_empty_branch(&default_branch)
            .context("Failed to create default branch file")?;
        self.refs()
            .write_head(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        let index = self.index();
        let index = index.lock().await;
        // create the index file if it does not exist
        if !index.path().exists() {
            fs::write(index.path(), b"").context("Failed to create .git/index file")?;
        }

        tracing::info!(path = %self.path().display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty Git repository in {}",
            self.path().display()
        )?;

        Ok(InitOutcome::Initialized)
    }
}
