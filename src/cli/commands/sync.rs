//! Sync command implementation.
//!
//! The `tutorial sync` command (also reachable as `tutorial upload`) pushes
//! the current branch to the configured remote. Uncommitted work can be
//! committed first, and a branch without an upstream is pushed with `-u` so
//! later syncs are a plain `git push`.

use crate::error::{Result, TutorialError};
use crate::git::Git;
use crate::ui::{Prompt, UserInterface};

use super::commit::{commit_all, resolve_message};
use super::dispatcher::{Command, CommandResult};
use super::with_repository_hint;

/// The sync command implementation.
pub struct SyncCommand<'a> {
    git: Git<'a>,
    remote: String,
}

impl<'a> SyncCommand<'a> {
    /// Create a new sync command pushing to `remote`.
    pub fn new(git: Git<'a>, remote: &str) -> Self {
        Self {
            git,
            remote: remote.to_string(),
        }
    }

    fn require_remote(&self, ui: &mut dyn UserInterface) -> Result<String> {
        if let Some(url) = self.git.remote_url(&self.remote)? {
            return Ok(url);
        }

        ui.info("To connect to GitHub:");
        ui.show_hint("1. Create a repository on GitHub");
        ui.show_hint(&format!(
            "2. Run: git remote add {} <repository-url>",
            self.remote
        ));
        ui.show_hint("3. Then run `tutorial sync` again");

        Err(TutorialError::NoRemote {
            remote: self.remote.clone(),
        })
    }

    fn commit_pending(&self, ui: &mut dyn UserInterface) -> Result<()> {
        if self.git.porcelain_status()?.trim().is_empty() {
            return Ok(());
        }

        ui.warning("You have uncommitted changes.");
        let commit_first = ui
            .prompt(&Prompt::confirm(
                "commit_first",
                "Would you like to commit them first?",
                true,
            ))?
            .as_bool()
            .unwrap_or(true);

        if !commit_first {
            ui.info("Pushing committed changes only.");
            return Ok(());
        }

        let message = resolve_message(ui, None)?;
        commit_all(&self.git, ui, &message)?;
        Ok(())
    }

    fn push_failed(&self, ui: &mut dyn UserInterface, branch: &str) {
        ui.info("Common issues:");
        ui.show_hint("1. Check your internet connection");
        ui.show_hint("2. Make sure your SSH key or access token is set up for GitHub");
        ui.show_hint(&format!(
            "3. Verify the remote URL with: git remote get-url {}",
            self.remote
        ));
        ui.show_hint("4. Make sure you have push access to the repository");
        ui.show_hint(&format!(
            "5. If the remote has new commits, run: git pull {} {}",
            self.remote, branch
        ));
    }
}

impl Command for SyncCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Sync with GitHub");

        with_repository_hint(ui, self.git.ensure_repository())?;

        let url = self.require_remote(ui)?;
        tracing::debug!("Remote {} is {}", self.remote, url);

        let branch = self.git.current_branch()?.ok_or_else(|| {
            TutorialError::validation(
                "Could not determine the current branch. Make at least one commit first.",
            )
        })?;

        self.commit_pending(ui)?;

        let set_upstream = !self.git.has_upstream(&branch)?;
        if set_upstream {
            ui.info(&format!(
                "Pushing {} to {} for the first time...",
                branch, self.remote
            ));
        } else {
            ui.info("Pushing changes...");
        }

        let output = match self.git.push(&self.remote, &branch, set_upstream) {
            Ok(output) => output,
            Err(e) => {
                self.push_failed(ui, &branch);
                return Err(e);
            }
        };

        if ui.output_mode().shows_command_output() {
            ui.show_output(&output.combined());
        }
        ui.success(&format!("Changes pushed to {}/{}!", self.remote, branch));

        Ok(CommandResult::success())
    }
}
