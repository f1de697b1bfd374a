//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::SettingsOverrides;
use crate::ui::OutputMode;

const AFTER_HELP: &str = "\
Examples:
  tutorial config              Configure Git with your name and email
  tutorial init                Initialize a new Git repository
  tutorial status              Check the status of your repository
  tutorial commit              Add and commit all changes
  tutorial commit -m \"message\" Commit with a specific message
  tutorial sync                Push your changes to GitHub";

/// Tutorial CLI - A simple Git wrapper for tutorial students.
#[derive(Debug, Parser)]
#[command(name = "tutorial")]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a settings file (overrides the default location)
    #[arg(short, long, global = true, env = "TUTORIAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory to operate in (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Git executable to run
    #[arg(long, global = true, env = "TUTORIAL_GIT", value_name = "PROGRAM")]
    pub git: Option<String>,

    /// Remote to push to
    #[arg(long, global = true, env = "TUTORIAL_REMOTE", value_name = "NAME")]
    pub remote: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output mode requested by flags, if any.
    pub fn output_mode(&self) -> Option<OutputMode> {
        if self.quiet {
            Some(OutputMode::Quiet)
        } else if self.verbose {
            Some(OutputMode::Verbose)
        } else {
            None
        }
    }

    /// Settings values supplied by flags or environment.
    pub fn settings_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            config: self.config.clone(),
            git: self.git.clone(),
            remote: self.remote.clone(),
            output: self.output_mode(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Configure Git with your name and email
    Config(ConfigArgs),

    /// Initialize a new Git repository
    Init,

    /// Show the status of your repository
    Status,

    /// Add and commit all changes
    Commit(CommitArgs),

    /// Push your changes to GitHub
    #[command(visible_alias = "upload")]
    Sync,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Your name (prompted for if omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Your email (prompted for if omitted)
    #[arg(long)]
    pub email: Option<String>,
}

/// Arguments for the `commit` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CommitArgs {
    /// Commit message (prompted for if omitted)
    #[arg(short, long)]
    pub message: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
