use crate::common::command::{fingerprint_of, repository_dir, run_minigit_command};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn stage_file_stores_blob(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hello\n".to_string(),
    ));

    run_minigit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added file to staging: a.txt"));

    // the blob landed in the object store under the content fingerprint
    let fingerprint = fingerprint_of(b"hello\n");
    let blob_path = repository_dir
        .path()
        .join(".minigit/objects")
        .join(&fingerprint);
    assert_eq!(std::fs::read(blob_path)?, b"hello\n");

    // and the index records the entry
    let index = std::fs::read_to_string(repository_dir.path().join(".minigit/index"))?;
    assert_eq!(index.trim(), format!("a.txt:{}", fingerprint));

    Ok(())
}
