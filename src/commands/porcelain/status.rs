use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;

impl Repository {
    /// Show the staged entries in staging order
    pub async fn status(&mut self) -> anyhow::Result<Vec<IndexEntry>> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        if index.is_empty() {
            writeln!(self.writer(), "No files staged.")?;
            return Ok(Vec::new());
        }

        writeln!(self.writer(), "Staged files:")?;
        for entry in index.entries() {
            writeln!(self.writer(), "  {}", entry)?;
        }

        Ok(index.entries().cloned().collect())
    }
}
