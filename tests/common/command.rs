use crate::common::file::{write_file, FileSpec};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use sha1::Digest;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// An initialized repository with `a.txt` (content `hello\n`) committed
/// as "first"
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file = FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hello\n".to_string(),
    );
    write_file(file);

    run_minigit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    run_minigit_command(repository_dir.path(), &["commit", "first"])
        .assert()
        .success();

    repository_dir
}

pub fn run_minigit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("minigit").expect("Failed to find minigit binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Resolve HEAD to a full fingerprint by reading the on-disk refs
pub fn get_head_fingerprint(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head = std::fs::read_to_string(dir.join(".minigit/HEAD"))?;
    let head = head.trim();

    match head.strip_prefix("ref: ") {
        Some(branch_ref) => {
            let tip = std::fs::read_to_string(dir.join(".minigit").join(branch_ref))?;
            Ok(tip.trim().to_string())
        }
        None => Ok(head.to_string()),
    }
}

/// The fingerprint minigit assigns to the given content
pub fn fingerprint_of(content: &[u8]) -> String {
    let mut hasher = sha1::Sha1::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
