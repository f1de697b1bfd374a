//! Init command implementation.
//!
//! The `tutorial init` command creates a repository and writes the ignore template.

use crate::error::{Result, TutorialError};
use crate::git::Git;
use crate::templates::{self, TemplateWrite};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand<'a> {
    git: Git<'a>,
}

impl<'a> InitCommand<'a> {
    /// Create a new init command.
    pub fn new(git: Git<'a>) -> Self {
        Self { git }
    }
}

impl Command for InitCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Initialize Git Repository");

        // `git init` happily re-initializes, so check first to report it.
        if self.git.is_repository_root()? || self.git.is_repository_metadata()? {
            return Err(TutorialError::RepositoryExists {
                path: self.git.cwd().to_path_buf(),
            });
        }

        let output = self.git.init()?;
        if ui.output_mode().shows_command_output() {
            ui.show_output(&output.stdout);
        }
        ui.success("Git repository initialized!");

        match templates::write_gitignore(self.git.cwd())? {
            TemplateWrite::Created(_) => ui.success(".gitignore file created!"),
            TemplateWrite::AlreadyPresent(_) => {
                ui.info("Found an existing .gitignore, leaving it unchanged.")
            }
        }

        ui.info("Next steps:");
        ui.show_hint("1. Use `tutorial commit` to save your changes");
        ui.show_hint("2. Create a repository on GitHub");
        ui.show_hint("3. Use `tutorial sync` to push your code");

        Ok(CommandResult::success())
    }
}
