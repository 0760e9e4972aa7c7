use crate::common::command::{get_head_fingerprint, init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn unknown_target_fails(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;

    run_minigit_command(repository_dir.path(), &["checkout", "no-such-branch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unknown or ambiguous target: no-such-branch",
        ));
}

#[rstest]
fn prefix_shorter_than_four_characters_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let head = get_head_fingerprint(repository_dir.path())?;

    run_minigit_command(repository_dir.path(), &["checkout", &head[..3]])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown or ambiguous target"));

    Ok(())
}
