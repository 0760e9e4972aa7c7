use crate::common::command::{get_head_fingerprint, init_repository_dir, run_minigit_command};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn diff_working_against_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let first = get_head_fingerprint(repository_dir.path())?;

    // unstaged working tree changes count against the named commit
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hi\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("extra.txt"),
        "untracked\n".to_string(),
    ));

    run_minigit_command(repository_dir.path(), &["diff", &first])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Diff for: a.txt ---"))
        .stdout(predicate::str::contains("- hello"))
        .stdout(predicate::str::contains("+ hi"))
        .stdout(predicate::str::contains("--- Diff for: extra.txt ---"))
        .stdout(predicate::str::contains("+ untracked"));

    Ok(())
}
