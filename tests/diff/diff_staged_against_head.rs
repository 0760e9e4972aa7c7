use crate::common::command::{init_repository_dir, repository_dir, run_minigit_command};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn diff_staged_against_head(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("b.txt"),
        "brand new\n".to_string(),
    ));
    run_minigit_command(repository_dir.path(), &["add", "b.txt"])
        .assert()
        .success();

    for flag in ["--staged", "--cached"] {
        run_minigit_command(repository_dir.path(), &["diff", flag])
            .assert()
            .success()
            .stdout(predicate::str::contains("--- Diff for: b.txt ---"))
            .stdout(predicate::str::contains("+ brand new"));
    }

    Ok(())
}

#[rstest]
fn diff_staged_without_head_commit_reports(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_minigit_command(repository_dir.path(), &["diff", "--staged"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No HEAD commit to compare against"));

    Ok(())
}
