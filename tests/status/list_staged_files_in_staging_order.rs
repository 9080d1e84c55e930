use crate::common::command::{bitlet_commit, init_repository_dir, run_bitlet_command, sha1_hex};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn print_nothing_staged_for_fresh_repository(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_bitlet_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::eq("No files staged.\n"));

    Ok(())
}

#[rstest]
fn list_staged_files_in_staging_order(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let mut files = write_generated_files(repository_dir.path(), 3);
    files.reverse();

    for file in &files {
        run_bitlet_command(repository_dir.path(), &["add", &file.file_name()])
            .assert()
            .success();
    }

    let expected = std::iter::once("Staged files:\n".to_string())
        .chain(files.iter().map(|file| {
            format!(
                "  {} {}\n",
                file.file_name(),
                sha1_hex(file.content.as_bytes())
            )
        }))
        .collect::<String>();

    run_bitlet_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::eq(expected));

    Ok(())
}

#[rstest]
fn print_nothing_staged_after_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    write_generated_files(repository_dir.path(), 2);
    run_bitlet_command(repository_dir.path(), &["add", "--all"])
        .assert()
        .success();
    bitlet_commit(repository_dir.path(), "all of it")
        .assert()
        .success();

    run_bitlet_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::eq("No files staged.\n"));

    Ok(())
}
