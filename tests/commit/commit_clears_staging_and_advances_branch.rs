use crate::common::command::{get_head_fingerprint, repository_dir, run_minigit_command};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn commit_clears_staging_and_advances_branch(
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
    run_minigit_command(repository_dir.path(), &["commit", "first"])
        .assert()
        .success();

    // the branch tip and HEAD agree on the new commit
    let master =
        std::fs::read_to_string(repository_dir.path().join(".minigit/refs/heads/master"))?;
    let head = get_head_fingerprint(repository_dir.path())?;
    assert_eq!(master.trim(), head);
    assert!(repository_dir
        .path()
        .join(".minigit/commits")
        .join(&head)
        .exists());

    // the staging index is empty after a successful commit
    let index = std::fs::read_to_string(repository_dir.path().join(".minigit/index"))?;
    assert!(index.trim().is_empty());

    Ok(())
}
