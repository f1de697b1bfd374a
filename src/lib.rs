//! Tutorial - A simple Git wrapper for tutorial students.
//!
//! The `tutorial` binary hides git's surface behind a handful of
//! beginner-friendly subcommands (`config`, `init`, `status`, `commit`,
//! `sync`/`upload`). Every subcommand delegates to the git executable and
//! reports failures with git's own message and exit code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file and CLI/env overrides
//! - [`error`] - Error types and result aliases
//! - [`git`] - Typed wrapper around the git executable
//! - [`shell`] - External command execution
//! - [`templates`] - Embedded file templates
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use tutorial::git::Git;
//! use tutorial::shell::{MockRunner, ToolOutput};
//!
//! let runner = MockRunner::new();
//! runner.respond(&["branch", "--show-current"], ToolOutput::ok("main\n"));
//!
//! let git = Git::new(&runner, "git", Path::new("."));
//! assert_eq!(git.current_branch().unwrap(), Some("main".to_string()));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod shell;
pub mod templates;
pub mod ui;

pub use error::{Result, TutorialError};
