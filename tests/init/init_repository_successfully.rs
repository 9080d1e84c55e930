use crate::common;
use crate::common::command::run_bitlet_command;
use assert_cmd::Command;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;

#[test]
fn init_repository_successfully() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let dir_absolute_path = dir.path().canonicalize()?.display().to_string();
    let mut sut = Command::cargo_bin("bitlet")?;

    sut.arg("init").arg(dir.path());

    sut.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty Git repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    assert!(dir.path().join(".git").join("objects").is_dir());
    assert_eq!(
        common::read_control_file(dir.path(), "HEAD"),
        "ref: refs/heads/main\n"
    );
    assert_eq!(common::read_control_file(dir.path(), "refs/heads/main"), "");
    assert_eq!(common::read_control_file(dir.path(), "index"), "");

    Ok(())
}

#[test]
fn init_in_current_directory() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;

    run_bitlet_command(dir.path(), &["init"]).assert().success();

    assert!(dir.path().join(".git").join("HEAD").is_file());

    Ok(())
}
