use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;

use crate::{init_repo, init_repo_without_origin, share_cmd};

#[test]
fn remote_prints_owner_and_repo_of_origin() {
    let repo = init_repo();

    share_cmd(repo.path())
        .args(["remote"])
        .assert()
        .success()
        .stdout("acme/share-test\n");
}

#[test]
fn remote_parses_explicit_url_outside_a_repository() {
    let dir = tempfile::tempdir().expect("tempdir");

    share_cmd(dir.path())
        .args(["remote", "git@gitlab.com:user/project.git", "--base-url", "gitlab.com"])
        .assert()
        .success()
        .stdout("user/project\n");
}

#[test]
fn remote_outside_a_repository_reads_global_git_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let home = tempfile::tempdir().expect("home");
    let global = home.path().join(".gitconfig");
    fs::write(&global, "[share-link]\n\tbaseUrl = gitlab.com\n").expect("write gitconfig");

    share_cmd(dir.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("xdg"))
        .env("GIT_CONFIG_GLOBAL", &global)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .args(["remote", "git@gitlab.com:user/project.git"])
        .assert()
        .success()
        .stdout("user/project\n");
}

#[test]
fn remote_rejects_url_for_other_host() {
    let dir = tempfile::tempdir().expect("tempdir");

    share_cmd(dir.path())
        .args(["remote", "https://github.com/user/repo.git", "--base-url", "gitlab.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a gitlab.com repository"));
}

#[test]
fn remote_rejects_malformed_url() {
    let dir = tempfile::tempdir().expect("tempdir");

    share_cmd(dir.path())
        .args(["remote", "not-a-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a github.com repository"));
}

#[test]
fn remote_without_origin_fails() {
    let repo = init_repo_without_origin();

    share_cmd(repo.path())
        .args(["remote"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no 'origin' remote configured"));
}

#[test]
fn remote_porcelain_reports_parsed_fields() {
    let repo = init_repo();

    let output = share_cmd(repo.path())
        .args(["remote", "--porcelain"])
        .output()
        .expect("run share-link remote");
    assert!(
        output.status.success(),
        "remote failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["url"], "https://github.com/acme/share-test.git");
    assert_eq!(json["host"], "github.com");
    assert_eq!(json["owner"], "acme");
    assert_eq!(json["repo"], "share-test");
}
