use crate::common::command::{get_head_fingerprint, init_repository_dir, run_minigit_command};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn detached_checkout_by_prefix(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let first = get_head_fingerprint(repository_dir.path())?;

    // a second commit so HEAD has somewhere to come back from
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "world\n".to_string(),
    ));
    run_minigit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    run_minigit_command(repository_dir.path(), &["commit", "second"])
        .assert()
        .success();

    run_minigit_command(repository_dir.path(), &["checkout", &first[..7]])
        .assert()
        .success()
        .stdout(predicate::str::contains("detached HEAD"));

    // HEAD is now the bare fingerprint and the snapshot is restored
    let head = std::fs::read_to_string(repository_dir.path().join(".minigit/HEAD"))?;
    assert_eq!(head.trim(), first);
    assert_eq!(
        std::fs::read_to_string(repository_dir.path().join("a.txt"))?,
        "hello\n"
    );

    run_minigit_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("detached HEAD"));

    // log walks only the detached commit
    let log = run_minigit_command(repository_dir.path(), &["log"])
        .assert()
        .success();
    let stdout = String::from_utf8(log.get_output().stdout.clone())?;
    let commit_lines = stdout
        .lines()
        .filter(|line| line.starts_with("commit "))
        .count();
    assert_eq!(commit_lines, 1);
    assert!(stdout.contains("    first"));

    Ok(())
}
