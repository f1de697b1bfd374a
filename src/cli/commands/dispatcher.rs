//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use clap::CommandFactory;

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::{Result, TutorialError};
use crate::git::Git;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] on success. Failures are returned as errors and
    /// rendered by the caller.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code to use.
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    project_root: PathBuf,
    settings: Settings,
    runner: &'a dyn CommandRunner,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher for the given working directory.
    pub fn new(project_root: PathBuf, settings: Settings, runner: &'a dyn CommandRunner) -> Self {
        Self {
            project_root,
            settings,
            runner,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the resolved settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn git(&self) -> Git<'a> {
        Git::new(self.runner, self.settings.git.clone(), &self.project_root)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Without a subcommand the help text is printed.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("Dispatching {:?} in {}", cli.command, self.project_root.display());

        match &cli.command {
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(self.git(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Init) => {
                let cmd = super::init::InitCommand::new(self.git());
                cmd.execute(ui)
            }
            Some(Commands::Status) => {
                let cmd = super::status::StatusCommand::new(self.git());
                cmd.execute(ui)
            }
            Some(Commands::Commit(args)) => {
                let cmd = super::commit::CommitCommand::new(
                    self.git(),
                    &self.settings.remote,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Sync) => {
                let cmd = super::sync::SyncCommand::new(self.git(), &self.settings.remote);
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                Cli::command()
                    .print_help()
                    .map_err(TutorialError::Io)?;
                Ok(CommandResult::success())
            }
        }
    }
}
