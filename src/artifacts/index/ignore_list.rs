use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;

/// Paths excluded from staging
///
/// Each line of the ignore file is one literal path. A path is ignored only
/// when it equals a whole line; there are no glob or directory patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    entries: HashSet<String>,
}

impl IgnoreList {
    /// Load the ignore file, treating a missing file as an empty list
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ignore file at {:?}", path))?;

        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        Self {
            entries: content.lines().map(str::to_string).collect(),
        }
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        self.entries.contains(path)
    }
}
