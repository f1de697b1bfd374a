//! End-to-end tests driving a real git installation.
//!
//! Each test gets a private HOME and global git config so nothing leaks into
//! the developer's environment. Tests return early when git is not installed.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Sandbox {
    root: TempDir,
    project: PathBuf,
}

impl Sandbox {
    fn new() -> Option<Self> {
        let available = std::process::Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false);
        if !available {
            eprintln!("git not installed, skipping");
            return None;
        }

        let root = TempDir::new().unwrap();
        let project = root.path().join("project");
        fs::create_dir(&project).unwrap();
        Some(Self { root, project })
    }

    fn home(&self) -> &Path {
        self.root.path()
    }

    fn isolate<'c>(&self, cmd: &'c mut Command) -> &'c mut Command {
        cmd.env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env("GIT_CONFIG_GLOBAL", self.home().join("gitconfig"))
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_CEILING_DIRECTORIES", self.home())
            .env("CI", "true")
            .env("LC_ALL", "C")
            .env_remove("TUTORIAL_CONFIG")
            .env_remove("TUTORIAL_GIT")
            .env_remove("TUTORIAL_REMOTE")
    }

    fn tutorial(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("tutorial"));
        cmd.current_dir(&self.project);
        self.isolate(&mut cmd);
        cmd
    }

    fn git(&self, dir: &Path, args: &[&str]) -> String {
        let mut cmd = Command::new("git");
        cmd.current_dir(dir).args(args);
        self.isolate(&mut cmd);
        let output = cmd.output().unwrap();
        assert!(output.status.success(), "git {:?} failed", args);
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    fn configure(&self) {
        self.tutorial()
            .args(["config", "--name", "Ada Lovelace", "--email", "ada@example.com"])
            .assert()
            .success();
    }
}

#[test]
fn config_writes_global_identity() {
    let Some(sandbox) = Sandbox::new() else {
        return;
    };

    sandbox
        .tutorial()
        .args(["config", "--name", "Ada Lovelace", "--email", "ada@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Git configured successfully"));

    let config = fs::read_to_string(sandbox.home().join("gitconfig")).unwrap();
    assert!(config.contains("Ada Lovelace"));
    assert!(config.contains("ada@example.com"));
}

#[test]
fn init_creates_repository_and_gitignore_once() {
    let Some(sandbox) = Sandbox::new() else {
        return;
    };

    sandbox
        .tutorial()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains(".gitignore file created"));

    assert!(sandbox.project.join(".git").is_dir());
    let gitignore = fs::read_to_string(sandbox.project.join(".gitignore")).unwrap();
    assert!(gitignore.contains(".ipynb_checkpoints"));

    fs::write(sandbox.project.join(".gitignore"), "custom\n").unwrap();
    sandbox
        .tutorial()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(sandbox.project.join(".gitignore")).unwrap(),
        "custom\n"
    );
}

#[test]
fn init_then_status_in_empty_directory() {
    let Some(sandbox) = Sandbox::new() else {
        return;
    };

    sandbox.tutorial().arg("init").assert().success();

    sandbox
        .tutorial()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No commits yet"))
        .stdout(predicate::str::contains(".gitignore"));

    let porcelain = sandbox.git(&sandbox.project, &["status", "--porcelain"]);
    assert_eq!(porcelain.trim(), "?? .gitignore");
}

#[test]
fn init_inside_git_directory_is_refused() {
    let Some(sandbox) = Sandbox::new() else {
        return;
    };
    sandbox.tutorial().arg("init").assert().success();
    let git_dir = sandbox.project.join(".git");

    sandbox
        .tutorial()
        .arg("-p")
        .arg(&git_dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert!(!git_dir.join(".gitignore").exists());
    assert!(!git_dir.join(".git").exists());
}

#[test]
fn status_outside_repository_keeps_git_exit_code() {
    let Some(sandbox) = Sandbox::new() else {
        return;
    };

    sandbox
        .tutorial()
        .arg("status")
        .assert()
        .code(128)
        .stdout(predicate::str::contains("tutorial init"));
}

#[test]
fn commit_then_nothing_to_commit() {
    let Some(sandbox) = Sandbox::new() else {
        return;
    };
    sandbox.configure();
    sandbox.tutorial().arg("init").assert().success();
    fs::write(sandbox.project.join("analysis.py"), "print('hi')\n").unwrap();

    sandbox
        .tutorial()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("analysis.py"));

    sandbox
        .tutorial()
        .args(["commit", "-m", "First analysis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes committed: 'First analysis'"));

    sandbox
        .tutorial()
        .args(["commit", "-m", "Again"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes to commit"));

    let log = sandbox.git(&sandbox.project, &["log", "--oneline"]);
    assert!(log.contains("First analysis"));
    assert!(!log.contains("Again"));
}

#[test]
fn sync_and_upload_push_to_remote() {
    let Some(sandbox) = Sandbox::new() else {
        return;
    };
    sandbox.configure();
    sandbox.tutorial().arg("init").assert().success();
    fs::write(sandbox.project.join("notes.md"), "# Notes\n").unwrap();
    sandbox
        .tutorial()
        .args(["commit", "-m", "Add notes"])
        .assert()
        .success();

    sandbox
        .tutorial()
        .arg("sync")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No remote repository configured"));

    let remote = sandbox.home().join("remote.git");
    sandbox.git(sandbox.home(), &["init", "--bare", remote.to_str().unwrap()]);
    sandbox.git(
        &sandbox.project,
        &["remote", "add", "origin", remote.to_str().unwrap()],
    );

    sandbox
        .tutorial()
        .arg("upload")
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes pushed to origin/"));

    fs::write(sandbox.project.join("notes.md"), "# Notes\n\nMore.\n").unwrap();
    sandbox
        .tutorial()
        .arg("sync")
        .env("TUTORIAL_PROMPT_COMMIT_MESSAGE", "Expand notes")
        .assert()
        .success();

    let log = sandbox.git(&remote, &["log", "--oneline", "--all"]);
    assert!(log.contains("Add notes"));
    assert!(log.contains("Expand notes"));
}
