use crate::common;
use crate::common::command::{
    COMMIT_DATE, bitlet_commit, get_head_commit_sha, repository_dir, run_bitlet_command, sha1_hex,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_add_commit_branch_checkout(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let blob_oid = sha1_hex(b"hello");

    run_bitlet_command(dir, &["init"]).assert().success();

    write_file(FileSpec::new(dir.join("file.txt"), "hello".to_string()));
    run_bitlet_command(dir, &["add", "file.txt"])
        .assert()
        .success();
    assert_eq!(
        common::read_control_file(dir, "index"),
        format!("file.txt {}\n", blob_oid)
    );
    assert!(dir.join(".git").join("objects").join(&blob_oid).is_file());

    bitlet_commit(dir, "first").assert().success();
    assert_eq!(common::read_control_file(dir, "index"), "");
    let commit_oid = get_head_commit_sha(dir)?;
    assert_eq!(common::read_control_file(dir, "refs/heads/main"), commit_oid);

    run_bitlet_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("message: first"))
        .stdout(predicate::str::contains(format!("date: {}", COMMIT_DATE)));

    run_bitlet_command(dir, &["branch", "dev"])
        .assert()
        .success();
    assert_eq!(common::read_control_file(dir, "refs/heads/dev"), commit_oid);

    run_bitlet_command(dir, &["checkout", "dev"])
        .assert()
        .success();
    assert_eq!(common::read_control_file(dir, "HEAD"), "ref: refs/heads/dev\n");

    run_bitlet_command(dir, &["checkout", "doesnotexist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such branch: doesnotexist"));
    assert_eq!(common::read_control_file(dir, "HEAD"), "ref: refs/heads/dev\n");

    Ok(())
}
