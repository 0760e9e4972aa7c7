use crate::common::command::{get_head_fingerprint, init_repository_dir, run_minigit_command};
use crate::common::file::{write_file, FileSpec};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn second_commit_links_first_parent(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let first = get_head_fingerprint(repository_dir.path())?;

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

    let second = get_head_fingerprint(repository_dir.path())?;
    assert_ne!(first, second);

    let record =
        std::fs::read_to_string(repository_dir.path().join(".minigit/commits").join(&second))?;
    assert!(record.contains(&format!("parents:{}", first)));

    // log walks both commits, newest first
    let log = run_minigit_command(repository_dir.path(), &["log"])
        .assert()
        .success();
    let stdout = String::from_utf8(log.get_output().stdout.clone())?;
    let second_pos = stdout.find("    second").expect("second commit in log");
    let first_pos = stdout.find("    first").expect("first commit in log");
    assert!(second_pos < first_pos);

    Ok(())
}
