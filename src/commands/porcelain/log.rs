use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Show the commit the active branch points to
    ///
    /// Commits carry no parent, so there is at most one entry. A branch
    /// without commits prints nothing.
    pub fn log(&self) -> anyhow::Result<Option<(ObjectId, Commit)>> {
        self.ensure_initialized()?;

        let Some(commit_oid) = self.refs().read_head()? else {
            tracing::debug!("no commits on the current branch");
            return Ok(None);
        };

        let commit = self.database().parse_object_as_commit(&commit_oid)?;
        self.display_commit(&commit_oid, &commit)?;

        Ok(Some((commit_oid, commit)))
    }

    fn display_commit(&self, oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(self.writer(), "commit {}", oid)?;
        writeln!(self.writer(), "    message: {}", commit.message())?;
        writeln!(self.writer(), "    date: {}", commit.readable_timestamp())?;

        Ok(())
    }
}
