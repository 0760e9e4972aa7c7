use crate::common::command::{repository_dir, run_minigit_command};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_outside_repository_fails(repository_dir: TempDir) {
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hello\n".to_string(),
    ));

    run_minigit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a minigit repository"));
}
