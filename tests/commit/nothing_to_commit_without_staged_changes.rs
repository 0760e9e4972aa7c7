use crate::common::command::{get_head_fingerprint, init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn nothing_to_commit_without_staged_changes(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let head_before = get_head_fingerprint(repository_dir.path())?;

    run_minigit_command(repository_dir.path(), &["commit", "empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes to commit"));

    // no new commit was produced
    assert_eq!(head_before, get_head_fingerprint(repository_dir.path())?);

    Ok(())
}
