use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(ObjectId),
    NothingToCommit,
}

impl Repository {
    /// Freeze the index into a commit on the active branch
    ///
    /// Writes happen in a fixed order: commit object, then branch ref, then
    /// the index truncation. A crash in between can orphan an object but
    /// never leaves a ref pointing at a missing one.
    ///
    /// Two commits of the same entries and message within one second get the
    /// same id and share a single object; the ref is still rewritten.
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<CommitOutcome> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        if index.is_empty() {
            writeln!(self.writer(), "Nothing to commit.")?;
            return Ok(CommitOutcome::NothingToCommit);
        }

        let tree = Tree::build(index.entries());
        let commit = Commit::new(tree, message.to_string(), Commit::timestamp_now());

        let branch = self.refs().current_branch()?;
        let commit_id = self.database().store(&commit)?;
        self.refs().advance(&branch, &commit_id)?;
        index.clear()?;

        tracing::info!(branch = %branch, oid = %commit_id, "committed");
        writeln!(
            self.writer(),
            "Committed: {} - {}",
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(CommitOutcome::Committed(commit_id))
    }
}
