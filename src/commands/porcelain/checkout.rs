use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;

impl Repository {
    /// Make `target` the active branch
    ///
    /// Only HEAD changes; working tree files are not touched. A branch that
    /// does not exist fails with `NoSuchBranch` and leaves HEAD as it was.
    pub fn checkout(&mut self, target: &str) -> anyhow::Result<BranchName> {
        self.ensure_initialized()?;

        let target = BranchName::try_parse(target.to_string())?;

        if self.refs().is_current_branch(&target)? && self.refs().branch_exists(&target) {
            writeln!(self.writer(), "Already on branch: {}", target)?;
            return Ok(target);
        }

        self.refs().set_head(&target)?;

        tracing::info!(branch = %target, "switched branch");
        writeln!(self.writer(), "Switched to branch: {}", target)?;

        Ok(target)
    }
}
