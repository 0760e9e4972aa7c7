use crate::common::command::{repository_dir, run_minigit_command};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_message_joins_arguments(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hello\n".to_string(),
    ));
    run_minigit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    run_minigit_command(
        repository_dir.path(),
        &["commit", "several", "words", "of", "message"],
    )
    .assert()
    .success();

    run_minigit_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    several words of message"));

    Ok(())
}
