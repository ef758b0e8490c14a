mod common;

use assert_cmd::Command;
use common::create_fixture;
use predicates::prelude::*;

#[test]
fn help_lists_all_options() {
    Command::cargo_bin("treesnap")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Copy a directory tree snapshot"))
        .stdout(predicate::str::contains("--gitignore"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--level"))
        .stdout(predicate::str::contains("--files"))
        .stdout(predicate::str::contains("--size"))
        .stdout(predicate::str::contains("--stdout"))
        .stdout(predicate::str::contains("--quiet"));
}

#[test]
fn version_prints_crate_name() {
    Command::cargo_bin("treesnap")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("treesnap"));
}

#[test]
fn nonexistent_path_fails() {
    Command::cargo_bin("treesnap")
        .unwrap()
        .args(["--stdout", "/this/path/does/not/exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to resolve path"));
}

#[test]
fn file_path_fails() {
    let tmp = create_fixture(&["afile.txt"]);
    Command::cargo_bin("treesnap")
        .unwrap()
        .arg("--stdout")
        .arg(tmp.path().join("afile.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn stdout_tree_snapshot() {
    let tmp = create_fixture(&["src/", "src/main.rs", "README.md"]);
    Command::cargo_bin("treesnap")
        .unwrap()
        .args(["--stdout", "--files", "-q"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("```"))
        .stdout(predicate::str::contains("├──src"))
        .stdout(predicate::str::contains("└──README.md"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn stdout_list_snapshot() {
    let tmp = create_fixture(&["src/", "src/main.rs"]);
    Command::cargo_bin("treesnap")
        .unwrap()
        .args(["--stdout", "--files", "--format", "list"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("  - src"))
        .stdout(predicate::str::contains("    - main.rs"));
}

#[test]
fn level_flag_limits_depth() {
    let tmp = create_fixture(&["a/", "a/b/", "a/b/deep.txt"]);
    Command::cargo_bin("treesnap")
        .unwrap()
        .args(["--stdout", "--files", "-L", "1"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("└──a"))
        .stdout(predicate::str::contains("deep.txt").not());
}

#[test]
fn ignore_flag_excludes_matches() {
    let tmp = create_fixture(&["keep.rs", "drop.log"]);
    Command::cargo_bin("treesnap")
        .unwrap()
        .args(["--stdout", "--files", "-I", "*.log"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("keep.rs"))
        .stdout(predicate::str::contains("drop.log").not());
}

#[test]
fn progress_goes_to_stderr_unless_quiet() {
    let tmp = create_fixture(&["src/"]);
    Command::cargo_bin("treesnap")
        .unwrap()
        .arg("--stdout")
        .arg(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("scanning directory structure"))
        .stderr(predicate::str::contains("100"));
}

#[test]
fn directories_only_by_default() {
    let tmp = create_fixture(&["src/", "README.md"]);
    Command::cargo_bin("treesnap")
        .unwrap()
        .args(["--stdout", "-q"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("src"))
        .stdout(predicate::str::contains("README.md").not());
}
