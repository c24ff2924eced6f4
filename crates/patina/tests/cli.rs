use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("patina").unwrap();
    cmd.current_dir(dir).env_remove("PATINA_API_TOKEN");
    cmd
}

#[test]
fn init_then_check_passes() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path()).arg("init").assert().success();
    cmd(tmp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(contains("content ok"));
}

#[test]
fn init_refuses_to_overwrite_without_yes() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path()).arg("init").assert().success();
    fs::write(tmp.path().join("content/_index.md"), "custom").unwrap();

    cmd(tmp.path()).arg("init").assert().success();
    let kept = fs::read_to_string(tmp.path().join("content/_index.md")).unwrap();
    assert_eq!(kept, "custom");
}

#[test]
fn check_fails_on_invalid_front_matter() {
    let tmp = TempDir::new().unwrap();
    let posts = tmp.path().join("content/posts");
    fs::create_dir_all(&posts).unwrap();
    fs::write(posts.join("bad.md"), "---\ntitle: [broken\n---\n").unwrap();

    cmd(tmp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(contains("failed validation"));
}

#[test]
fn check_fails_on_missing_content_dir() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn publish_dry_run_needs_no_network() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path())
        .args(["publish", "--dry-run"])
        .assert()
        .success();
}

#[test]
fn publish_fails_fast_on_unreachable_webhook() {
    let tmp = TempDir::new().unwrap();
    let marker = tmp.path().join("built");
    fs::write(
        tmp.path().join("patina.toml"),
        format!(
            "[site]\nbuild_command = \"touch {}\"\n\n[webhooks]\nbase_url = \"http://127.0.0.1:9\"\n",
            marker.display()
        ),
    )
    .unwrap();

    cmd(tmp.path()).arg("publish").assert().failure();
    assert!(!marker.exists(), "build must not run after a failed webhook");
}

#[test]
fn rejects_malformed_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("patina.toml"), "[site\nbroken").unwrap();

    cmd(tmp.path())
        .arg("publish")
        .assert()
        .failure()
        .stderr(contains("parse"));
}
