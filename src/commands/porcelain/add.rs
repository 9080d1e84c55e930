use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Staged(IndexEntry),
    Ignored(PathBuf),
}

impl Repository {
    /// Stage the given paths in order
    ///
    /// Every path must name an existing regular file; otherwise nothing is
    /// hashed, stored or staged. Paths listed verbatim in the ignore file
    /// are skipped.
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<Vec<AddOutcome>> {
        self.ensure_initialized()?;

        let paths = paths.iter().map(PathBuf::from).collect::<Vec<_>>();
        for path in &paths {
            self.workspace().check_file(path)?;
        }

        self.stage(paths).await
    }

    /// Stage every regular file directly inside the working directory
    pub async fn add_all(&mut self) -> anyhow::Result<Vec<AddOutcome>> {
        self.ensure_initialized()?;

        let paths = self.workspace().list_files()?;
        self.stage(paths).await
    }

    async fn stage(&self, paths: Vec<PathBuf>) -> anyhow::Result<Vec<AddOutcome>> {
        let ignore_list = self.workspace().ignore_list()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let mut outcomes = Vec::with_capacity(paths.len());
        for path in paths {
            if ignore_list.is_ignored(&path.to_string_lossy()) {
                writeln!(self.writer(), "Ignored by .gitignore: {}", path.display())?;
                outcomes.push(AddOutcome::Ignored(path));
                continue;
            }

            let blob_id = self.store_file(&path)?;
            let entry = IndexEntry::new(path, blob_id);

            writeln!(
                self.writer(),
                "Added file to staging: {} ({})",
                entry.name.display(),
                entry.oid
            )?;
            index.add(entry.clone());
            outcomes.push(AddOutcome::Staged(entry));
        }

        index.write_updates()?;

        Ok(outcomes)
    }

    fn store_file(&self, path: &Path) -> anyhow::Result<ObjectId> {
        let data = self.workspace().read_file(path)?;

        self.database().store(&Blob::new(data))
    }
}
