//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command talks to git only
//! through a [`Git`](crate::git::Git) client and to the user only through a
//! [`UserInterface`](crate::ui::UserInterface), so both can be replaced in tests.

pub mod commit;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod init;
pub mod status;
pub mod sync;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::error::{Result, TutorialError};
use crate::ui::UserInterface;

/// Point beginners at `tutorial init` when git says there is no repository.
pub(crate) fn with_repository_hint<T>(ui: &mut dyn UserInterface, result: Result<T>) -> Result<T> {
    if let Err(TutorialError::ExternalTool { stderr, .. }) = &result {
        if stderr.contains("not a git repository") {
            ui.show_hint("Not a Git repository. Run `tutorial init` first.");
        }
    }
    result
}
