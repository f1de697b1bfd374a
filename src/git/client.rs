//! Typed access to the git executable.
//!
//! Every external call the wrapper makes goes through [`Git`], which builds
//! the argument list, hands it to a [`CommandRunner`], and turns non-zero
//! exits into [`TutorialError::ExternalTool`] where the caller needs that.

use std::path::{Path, PathBuf};

use crate::error::{Result, TutorialError};
use crate::shell::{CommandRunner, ToolOutput};

/// Outcome of a commit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A commit was created; holds git's summary output.
    Committed(String),
    /// Git reported there was nothing to commit.
    NothingToCommit,
}

/// Git operations bound to one working directory.
pub struct Git<'a> {
    runner: &'a dyn CommandRunner,
    program: String,
    cwd: PathBuf,
}

impl<'a> Git<'a> {
    /// Create a client that runs `program` in `cwd`.
    pub fn new(runner: &'a dyn CommandRunner, program: impl Into<String>, cwd: &Path) -> Self {
        Self {
            runner,
            program: program.into(),
            cwd: cwd.to_path_buf(),
        }
    }

    /// The working directory commands run in.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Run git and return its output whatever the exit code.
    pub fn run(&self, args: &[&str]) -> Result<ToolOutput> {
        tracing::debug!("Running {} {}", self.program, args.join(" "));
        self.runner.run(&self.program, args, &self.cwd)
    }

    /// Run git and fail with [`TutorialError::ExternalTool`] on a non-zero exit.
    pub fn run_checked(&self, args: &[&str]) -> Result<ToolOutput> {
        let output = self.run(args)?;
        if output.success() {
            Ok(output)
        } else {
            Err(self.failure(args, &output))
        }
    }

    fn failure(&self, args: &[&str], output: &ToolOutput) -> TutorialError {
        let stderr = if output.stderr.trim().is_empty() {
            output.stdout.clone()
        } else {
            output.stderr.clone()
        };
        TutorialError::ExternalTool {
            command: format!("{} {}", self.program, args.join(" ")),
            code: output.exit_code,
            stderr,
        }
    }

    /// Read a global config value. Unset keys yield `None`.
    pub fn global_config(&self, key: &str) -> Result<Option<String>> {
        let output = self.run(&["config", "--global", key])?;
        let value = output.stdout.trim();
        if output.success() && !value.is_empty() {
            Ok(Some(value.to_string()))
        } else {
            Ok(None)
        }
    }

    /// Set a global config value.
    pub fn set_global_config(&self, key: &str, value: &str) -> Result<()> {
        self.run_checked(&["config", "--global", key, value])?;
        Ok(())
    }

    /// Top level of the repository containing the working directory, if any.
    pub fn toplevel(&self) -> Result<Option<PathBuf>> {
        let output = self.run(&["rev-parse", "--show-toplevel"])?;
        let path = output.stdout.trim();
        if output.success() && !path.is_empty() {
            Ok(Some(PathBuf::from(path)))
        } else {
            Ok(None)
        }
    }

    /// Fail with git's own error unless the working directory is inside a repository.
    pub fn ensure_repository(&self) -> Result<()> {
        self.run_checked(&["rev-parse", "--git-dir"])?;
        Ok(())
    }

    /// Whether the working directory is itself the top level of a repository.
    pub fn is_repository_root(&self) -> Result<bool> {
        Ok(match self.toplevel()? {
            Some(top) => same_path(&top, &self.cwd),
            None => false,
        })
    }

    /// Whether the working directory is git's own metadata: a bare
    /// repository or somewhere inside a `.git` directory.
    pub fn is_repository_metadata(&self) -> Result<bool> {
        Ok(self.rev_parse_flag("--is-inside-git-dir")?
            || self.rev_parse_flag("--is-bare-repository")?)
    }

    fn rev_parse_flag(&self, flag: &str) -> Result<bool> {
        let output = self.run(&["rev-parse", flag])?;
        Ok(output.success() && output.stdout.trim() == "true")
    }

    /// Create a repository in the working directory.
    pub fn init(&self) -> Result<ToolOutput> {
        self.run_checked(&["init"])
    }

    /// Human-readable status.
    pub fn status(&self) -> Result<ToolOutput> {
        self.run_checked(&["status"])
    }

    /// Machine-readable status; empty when the tree is clean.
    pub fn porcelain_status(&self) -> Result<String> {
        Ok(self.run_checked(&["status", "--porcelain"])?.stdout)
    }

    /// Stage every change, including deletions and untracked files.
    pub fn stage_all(&self) -> Result<()> {
        self.run_checked(&["add", "-A"])?;
        Ok(())
    }

    /// Commit staged changes.
    ///
    /// Git's "nothing to commit" report is not a failure here.
    pub fn commit(&self, message: &str) -> Result<CommitOutcome> {
        let args = ["commit", "-m", message];
        let output = self.run(&args)?;

        if output.success() {
            return Ok(CommitOutcome::Committed(output.stdout.trim().to_string()));
        }

        if is_nothing_to_commit(&output) {
            tracing::debug!("git reported nothing to commit");
            return Ok(CommitOutcome::NothingToCommit);
        }

        Err(self.failure(&args, &output))
    }

    /// URL of the named remote, or `None` if it is not configured.
    pub fn remote_url(&self, remote: &str) -> Result<Option<String>> {
        let output = self.run(&["remote", "get-url", remote])?;
        let url = output.stdout.trim();
        if output.success() && !url.is_empty() {
            Ok(Some(url.to_string()))
        } else {
            Ok(None)
        }
    }

    /// Name of the checked-out branch; `None` when detached.
    pub fn current_branch(&self) -> Result<Option<String>> {
        let output = self.run_checked(&["branch", "--show-current"])?;
        let branch = output.stdout.trim();
        if branch.is_empty() {
            Ok(None)
        } else {
            Ok(Some(branch.to_string()))
        }
    }

    /// Whether `branch` already tracks an upstream branch.
    pub fn has_upstream(&self, branch: &str) -> Result<bool> {
        let rev = format!("{}@{{upstream}}", branch);
        Ok(self.run(&["rev-parse", "--abbrev-ref", &rev])?.success())
    }

    /// Push the current branch.
    ///
    /// With `set_upstream`, pushes `branch` to `remote` and records it as the
    /// upstream; otherwise a plain `git push` follows the existing upstream.
    pub fn push(&self, remote: &str, branch: &str, set_upstream: bool) -> Result<ToolOutput> {
        if set_upstream {
            self.run_checked(&["push", "-u", remote, branch])
        } else {
            self.run_checked(&["push"])
        }
    }
}

fn is_nothing_to_commit(output: &ToolOutput) -> bool {
    let text = output.combined();
    text.contains("nothing to commit") || text.contains("nothing added to commit")
}

fn same_path(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
