use crate::common::command::{repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn bootstrap_reports_clean_repository(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_minigit_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("On branch master"))
        .stdout(predicate::str::contains("HEAD points to: No commits yet"))
        .stdout(predicate::str::contains(
            "Your working directory is clean.",
        ));

    run_minigit_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commits yet."));

    Ok(())
}
