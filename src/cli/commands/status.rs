//! Status command implementation.
//!
//! The `tutorial status` command relays `git status` unchanged.

use crate::error::Result;
use crate::git::Git;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::with_repository_hint;

/// The status command implementation.
pub struct StatusCommand<'a> {
    git: Git<'a>,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command.
    pub fn new(git: Git<'a>) -> Self {
        Self { git }
    }
}

impl Command for StatusCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Repository Status");

        let output = with_repository_hint(ui, self.git.status())?;
        ui.show_output(&output.stdout);

        Ok(CommandResult::success())
    }
}
