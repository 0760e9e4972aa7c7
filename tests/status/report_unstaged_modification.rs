use crate::common::command::{init_repository_dir, run_minigit_command};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_unstaged_modification(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    // modified in the working tree, not re-staged
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hi\n".to_string(),
    ));

    run_minigit_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes not staged for commit:"))
        .stdout(predicate::str::contains("modified:   a.txt"));

    Ok(())
}
