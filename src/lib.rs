//! bitlet: a minimal, local version-control backend
//!
//! File contents are stored under their SHA-1 digest, staged into an
//! append-only index, frozen into commit objects and tracked by branches.
//!
//! - `areas`: the on-disk components (object database, index, refs, workspace)
//! - `artifacts`: the value types flowing between them
//! - `commands`: user-facing operations implemented on `Repository`

pub mod areas;
pub mod artifacts;
pub mod commands;

/// Name of the control directory inside the repository root
pub const CONTROL_DIR: &str = ".git";

/// Name of the ignore file at the repository root
pub const IGNORE_FILE: &str = ".gitignore";

/// Branch HEAD points to right after `init`
pub const DEFAULT_BRANCH: &str = "main";

/// Environment variable pinning the commit timestamp (`%Y-%m-%d %H:%M:%S`)
pub const COMMIT_DATE_ENV: &str = "BITLET_COMMIT_DATE";

/// Environment variable holding the tracing filter directive
pub const LOG_ENV: &str = "BITLET_LOG";
