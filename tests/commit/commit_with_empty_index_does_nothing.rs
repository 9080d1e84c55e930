use crate::common::command::{bitlet_commit, committed_repository_dir, get_head_commit_sha, init_repository_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn objects_count(dir: &TempDir) -> usize {
    std::fs::read_dir(dir.path().join(".git").join("objects"))
        .expect("Failed to read objects directory")
        .count()
}

#[rstest]
fn commit_with_empty_index_does_nothing(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    bitlet_commit(repository_dir.path(), "nothing")
        .assert()
        .success()
        .stdout(predicate::eq("Nothing to commit.\n"));

    assert_eq!(get_head_commit_sha(repository_dir.path())?, "");
    assert_eq!(objects_count(&repository_dir), 0);

    Ok(())
}

#[rstest]
fn second_commit_after_clear_keeps_previous_ref(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;
    let commit_before = get_head_commit_sha(repository_dir.path())?;
    let objects_before = objects_count(&repository_dir);

    bitlet_commit(repository_dir.path(), "again")
        .assert()
        .success()
        .stdout(predicate::eq("Nothing to commit.\n"));

    assert_eq!(get_head_commit_sha(repository_dir.path())?, commit_before);
    assert_eq!(objects_count(&repository_dir), objects_before);

    Ok(())
}
