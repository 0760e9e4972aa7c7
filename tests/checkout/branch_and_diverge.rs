use crate::common::command::{get_head_fingerprint, init_repository_dir, run_minigit_command};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn branch_and_diverge(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let first = get_head_fingerprint(repository_dir.path())?;

    run_minigit_command(repository_dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_minigit_command(repository_dir.path(), &["checkout", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to branch 'feature'"));

    // diverge on the feature branch
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "world\n".to_string(),
    ));
    run_minigit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    run_minigit_command(repository_dir.path(), &["commit", "on", "feature"])
        .assert()
        .success();
    let second = get_head_fingerprint(repository_dir.path())?;
    assert_ne!(first, second);

    // master still points at the first commit, feature at the second
    let master =
        std::fs::read_to_string(repository_dir.path().join(".minigit/refs/heads/master"))?;
    let feature =
        std::fs::read_to_string(repository_dir.path().join(".minigit/refs/heads/feature"))?;
    assert_eq!(master.trim(), first);
    assert_eq!(feature.trim(), second);

    // going back to master restores the first snapshot and clears the index
    run_minigit_command(repository_dir.path(), &["checkout", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to branch 'master'"));

    let restored = std::fs::read_to_string(repository_dir.path().join("a.txt"))?;
    assert_eq!(restored, "hello\n");

    let index = std::fs::read_to_string(repository_dir.path().join(".minigit/index"))?;
    assert!(index.trim().is_empty());

    Ok(())
}
