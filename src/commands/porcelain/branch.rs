use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use colored::Colorize;

impl Repository {
    /// Create `branch_name` at the active branch's commit
    ///
    /// An existing branch of that name is overwritten.
    pub fn branch(&mut self, branch_name: &str) -> anyhow::Result<BranchName> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        self.refs().create_branch(&branch_name)?;

        writeln!(self.writer(), "Branch created: {}", branch_name)?;

        Ok(branch_name)
    }

    /// Print every branch, marking the active one with `*`
    pub fn list_branches(&mut self) -> anyhow::Result<Vec<BranchName>> {
        self.ensure_initialized()?;

        let branches = self.refs().list_branches()?;
        let current_branch = self.refs().current_branch()?;

        for branch in &branches {
            if branch == &current_branch {
                writeln!(self.writer(), "{}", format!("* {}", branch).green())?;
            } else {
                writeln!(self.writer(), "  {}", branch)?;
            }
        }

        Ok(branches)
    }
}
