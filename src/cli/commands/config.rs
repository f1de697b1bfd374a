//! Config command implementation.
//!
//! The `tutorial config` command sets the global git identity.

use crate::cli::args::ConfigArgs;
use crate::error::{Result, TutorialError};
use crate::git::Git;
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

const NAME_KEY: &str = "user.name";
const EMAIL_KEY: &str = "user.email";

/// The config command implementation.
pub struct ConfigCommand<'a> {
    git: Git<'a>,
    args: ConfigArgs,
}

impl<'a> ConfigCommand<'a> {
    /// Create a new config command.
    pub fn new(git: Git<'a>, args: ConfigArgs) -> Self {
        Self { git, args }
    }

    /// When nothing was passed and an identity already exists, ask before replacing it.
    fn keep_existing(&self, ui: &mut dyn UserInterface) -> Result<bool> {
        if self.args.name.is_some() || self.args.email.is_some() {
            return Ok(false);
        }

        let name = self.git.global_config(NAME_KEY)?;
        let email = self.git.global_config(EMAIL_KEY)?;

        let (Some(name), Some(email)) = (name, email) else {
            return Ok(false);
        };

        ui.info("Current configuration:");
        ui.message(&format!("  Name:  {}", name));
        ui.message(&format!("  Email: {}", email));

        let change = ui
            .prompt(&Prompt::confirm(
                "change_identity",
                "Do you want to change it?",
                false,
            ))?
            .as_bool()
            .unwrap_or(false);

        Ok(!change)
    }

    fn value_or_prompt(
        ui: &mut dyn UserInterface,
        value: Option<&str>,
        key: &str,
        question: &str,
    ) -> Result<String> {
        let value = match value {
            Some(v) => v.to_string(),
            None => ui.prompt(&Prompt::input(key, question))?.as_string(),
        };
        Ok(value.trim().to_string())
    }
}

impl Command for ConfigCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Git Configuration");

        if self.keep_existing(ui)? {
            ui.info("Keeping current configuration.");
            return Ok(CommandResult::success());
        }

        let name = Self::value_or_prompt(
            ui,
            self.args.name.as_deref(),
            "user_name",
            "Your name (e.g., 'Jane Doe')",
        )?;
        let email = Self::value_or_prompt(
            ui,
            self.args.email.as_deref(),
            "user_email",
            "Your email (e.g., 'jane@example.com')",
        )?;

        if name.is_empty() || email.is_empty() {
            return Err(TutorialError::validation("Name and email are required!"));
        }

        self.git.set_global_config(NAME_KEY, &name)?;
        self.git.set_global_config(EMAIL_KEY, &email)?;

        ui.success("Git configured successfully!");
        ui.message(&format!("  Name:  {}", name));
        ui.message(&format!("  Email: {}", email));

        Ok(CommandResult::success())
    }
}
