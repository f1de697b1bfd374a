//! Integration tests for CLI argument parsing and failure reporting.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MISSING_GIT: &str = "/nonexistent/bin/git-not-installed";

/// A command isolated from the user's settings and running headless.
fn tutorial(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("tutorial"));
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("CI", "true")
        .env_remove("TUTORIAL_CONFIG")
        .env_remove("TUTORIAL_GIT")
        .env_remove("TUTORIAL_REMOTE");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tutorial(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrapper for tutorial students"))
        .stdout(predicate::str::contains("upload"))
        .stdout(predicate::str::contains("tutorial commit -m"));
    Ok(())
}

#[test]
fn cli_no_args_prints_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tutorial(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tutorial(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tutorial(&temp).arg("push").assert().failure();
    Ok(())
}

#[test]
fn empty_commit_message_fails_before_running_git() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    for message in ["", "   "] {
        tutorial(&temp)
            .args(["--git", MISSING_GIT, "commit", "-m", message])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Commit message cannot be empty"))
            .stderr(predicate::str::contains("Could not run").not());
    }
    Ok(())
}

#[test]
fn headless_commit_without_message_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tutorial(&temp)
        .args(["--git", MISSING_GIT, "commit"])
        .env_remove("TUTORIAL_PROMPT_COMMIT_MESSAGE")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TUTORIAL_PROMPT_COMMIT_MESSAGE"));
    Ok(())
}

#[test]
fn missing_git_fails_every_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let subcommands: &[&[&str]] = &[
        &["config", "--name", "Ada", "--email", "ada@example.com"],
        &["init"],
        &["status"],
        &["commit", "-m", "Initial commit"],
        &["sync"],
        &["upload"],
    ];

    for args in subcommands {
        tutorial(&temp)
            .args(["--git", MISSING_GIT])
            .args(*args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Could not run"));
    }
    Ok(())
}

#[test]
fn missing_project_directory_is_named() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let missing = temp.path().join("no-such-project");

    tutorial(&temp)
        .arg("-p")
        .arg(&missing)
        .arg("status")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("not found on PATH").not());
    Ok(())
}

#[test]
fn git_program_can_come_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tutorial(&temp)
        .env("TUTORIAL_GIT", MISSING_GIT)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains(MISSING_GIT));
    Ok(())
}

#[test]
fn settings_file_supplies_git_program() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("settings.yml");
    fs::write(&config, format!("git: {}\n", MISSING_GIT))?;

    tutorial(&temp)
        .arg("--config")
        .arg(&config)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains(MISSING_GIT));
    Ok(())
}

#[test]
fn invalid_settings_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("settings.yml");
    fs::write(&config, "colour: always\n")?;

    tutorial(&temp)
        .arg("--config")
        .arg(&config)
        .arg("status")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn completions_are_generated() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tutorial(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tutorial"));
    Ok(())
}
