use crate::common::command::{init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn log_decorates_branches(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;

    run_minigit_command(repository_dir.path(), &["branch", "feature"])
        .assert()
        .success();

    // both branches point at the tip; the attached one leads as HEAD
    run_minigit_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(HEAD -> master, feature)"));
}
