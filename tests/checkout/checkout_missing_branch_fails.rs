use crate::common;
use crate::common::command::{committed_repository_dir, run_bitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_missing_branch_fails(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;

    run_bitlet_command(repository_dir.path(), &["checkout", "doesnotexist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such branch: doesnotexist"));

    assert_eq!(
        common::read_control_file(repository_dir.path(), "HEAD"),
        "ref: refs/heads/main\n"
    );
    assert!(
        !repository_dir
            .path()
            .join(".git/refs/heads/doesnotexist")
            .exists()
    );

    Ok(())
}

#[rstest]
fn checkout_without_name_is_a_usage_error(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_bitlet_command(committed_repository_dir.path(), &["checkout"])
        .assert()
        .failure()
        .code(2);

    Ok(())
}
