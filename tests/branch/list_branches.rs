use crate::common::command::{committed_repository_dir, init_repository_dir, run_bitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn list_default_branch_after_init(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_bitlet_command(init_repository_dir.path(), &["branch"])
        .assert()
        .success()
        .stdout(predicate::eq("* main\n"));

    Ok(())
}

#[rstest]
fn list_branches_in_name_order(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;

    for branch in ["zeta", "dev", "alpha"] {
        run_bitlet_command(repository_dir.path(), &["branch", branch])
            .assert()
            .success();
    }

    run_bitlet_command(repository_dir.path(), &["branch"])
        .assert()
        .success()
        .stdout(predicate::eq("  alpha\n  dev\n* main\n  zeta\n"));

    Ok(())
}

#[rstest]
fn current_branch_marker_follows_checkout(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;

    run_bitlet_command(repository_dir.path(), &["branch", "dev"])
        .assert()
        .success();
    run_bitlet_command(repository_dir.path(), &["checkout", "dev"])
        .assert()
        .success();

    run_bitlet_command(repository_dir.path(), &["branch"])
        .assert()
        .success()
        .stdout(predicate::eq("* dev\n  main\n"));

    Ok(())
}
