//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: create the control directory
//! - `add`: stage files
//! - `commit`: freeze the index into a commit
//! - `status`: show the staged entries
//! - `log`: show the active branch's commit
//! - `branch`: list or create branches
//! - `checkout`: switch the active branch

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod status;
