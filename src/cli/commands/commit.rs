//! Commit command implementation.
//!
//! The `tutorial commit` command stages every change and commits it.

use crate::cli::args::CommitArgs;
use crate::error::{Result, TutorialError};
use crate::git::{CommitOutcome, Git};
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::with_repository_hint;

/// The commit command implementation.
pub struct CommitCommand<'a> {
    git: Git<'a>,
    remote: String,
    args: CommitArgs,
}

impl<'a> CommitCommand<'a> {
    /// Create a new commit command.
    pub fn new(git: Git<'a>, remote: &str, args: CommitArgs) -> Self {
        Self {
            git,
            remote: remote.to_string(),
            args,
        }
    }

    fn show_next_steps(&self, ui: &mut dyn UserInterface) -> Result<()> {
        if self.git.remote_url(&self.remote)?.is_some() {
            ui.show_hint("Next step: use `tutorial sync` to push your changes to GitHub");
        } else {
            ui.info("Next steps:");
            ui.show_hint("1. Create a repository on GitHub");
            ui.show_hint(&format!(
                "2. Connect it: git remote add {} <repository-url>",
                self.remote
            ));
            ui.show_hint("3. Use `tutorial sync` to push your changes");
        }
        Ok(())
    }
}

/// Use the supplied message or ask for one, rejecting blank messages.
pub(crate) fn resolve_message(ui: &mut dyn UserInterface, message: Option<&str>) -> Result<String> {
    let message = match message {
        Some(m) => m.to_string(),
        None => ui
            .prompt(&Prompt::input("commit_message", "Enter commit message"))?
            .as_string(),
    };

    let message = message.trim();
    if message.is_empty() {
        return Err(TutorialError::validation("Commit message cannot be empty!"));
    }
    Ok(message.to_string())
}

/// Stage everything and commit it with `message`.
pub(crate) fn commit_all(
    git: &Git<'_>,
    ui: &mut dyn UserInterface,
    message: &str,
) -> Result<CommitOutcome> {
    ui.info("Adding changes...");
    git.stage_all()?;

    ui.info("Creating commit...");
    let outcome = git.commit(message)?;

    match &outcome {
        CommitOutcome::Committed(summary) => {
            if ui.output_mode().shows_command_output() {
                ui.show_output(&format!("{}\n", summary));
            }
            ui.success(&format!("Changes committed: '{}'", message));
        }
        CommitOutcome::NothingToCommit => {
            ui.info("No changes to commit.");
        }
    }

    Ok(outcome)
}

impl Command for CommitCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Commit Changes");

        let message = resolve_message(ui, self.args.message.as_deref())?;

        with_repository_hint(ui, self.git.ensure_repository())?;

        if let CommitOutcome::Committed(_) = commit_all(&self.git, ui, &message)? {
            self.show_next_steps(ui)?;
        }

        Ok(CommandResult::success())
    }
}
