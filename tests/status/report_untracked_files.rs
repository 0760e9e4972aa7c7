use crate::common::command::{repository_dir, run_minigit_command};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_untracked_files(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let files = write_generated_files(repository_dir.path(), 3);

    let output = run_minigit_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Untracked files:"));
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    for file in &files {
        let name = file.path.file_name().unwrap().to_string_lossy();
        assert!(stdout.contains(name.as_ref()), "missing {}", name);
    }
    assert!(!stdout.contains("Your working directory is clean."));

    Ok(())
}
