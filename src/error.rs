//! Error types for tutorial operations.
//!
//! This module defines [`TutorialError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant belongs to one [`ErrorKind`]: a failure reported by git, a
//!   failed template write, a local validation failure, or anything else
//! - Validation errors are raised before any external call is made
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tutorial operations.
#[derive(Debug, Error)]
pub enum TutorialError {
    /// The external tool exited with a non-zero status.
    #[error("`{command}` failed{}{}", exit_suffix(*code), stderr_suffix(stderr))]
    ExternalTool {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The external tool could not be launched at all.
    #[error("Could not run '{program}': {message}")]
    ToolUnavailable { program: String, message: String },

    /// Pushing needs a remote and none is configured.
    #[error("No remote repository configured (remote '{remote}' not found)")]
    NoRemote { remote: String },

    /// The target directory is already the top level of a repository.
    #[error("A Git repository already exists in {}", path.display())]
    RepositoryExists { path: PathBuf },

    /// The ignore template could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input rejected locally before anything was run.
    #[error("{message}")]
    Validation { message: String },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Broad category of a [`TutorialError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Git failed, is missing, or refused the operation.
    ExternalTool,
    /// The template file could not be written.
    FileWrite,
    /// Input was rejected locally.
    Validation,
    /// Configuration, IO, and anything unexpected.
    Other,
}

impl TutorialError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ExternalTool { .. }
            | Self::ToolUnavailable { .. }
            | Self::NoRemote { .. }
            | Self::RepositoryExists { .. } => ErrorKind::ExternalTool,
            Self::FileWrite { .. } => ErrorKind::FileWrite,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::ConfigParse { .. } | Self::Io(_) | Self::Other(_) => ErrorKind::Other,
        }
    }

    /// Process exit code for this error.
    ///
    /// Failures reported by git keep git's own exit code; everything else
    /// exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ExternalTool {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }

    /// The full tool output behind a one-line message, when there is more
    /// than the line shown in [`Display`](std::fmt::Display).
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::ExternalTool { stderr, .. } => {
                let trimmed = stderr.trim();
                (trimmed.lines().filter(|l| !l.trim().is_empty()).count() > 1).then_some(trimmed)
            }
            _ => None,
        }
    }
}

fn exit_suffix(code: Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    match summary_line(stderr) {
        Some(line) => format!(": {}", line),
        None => String::new(),
    }
}

/// The line of tool output that best explains a failure: git's own
/// `fatal:`/`error:` line, else the first non-blank line.
fn summary_line(stderr: &str) -> Option<&str> {
    let mut lines = stderr.lines().map(str::trim).filter(|l| !l.is_empty());
    let first = lines.clone().next()?;
    Some(
        lines
            .find(|l| l.starts_with("fatal:") || l.starts_with("error:"))
            .unwrap_or(first),
    )
}

/// Result type alias for tutorial operations.
pub type Result<T> = std::result::Result<T, TutorialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_tool_displays_command_code_and_stderr() {
        let err = TutorialError::ExternalTool {
            command: "git push".into(),
            code: Some(128),
            stderr: "fatal: unable to access remote\n".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("git push"));
        assert!(msg.contains("128"));
        assert!(msg.contains("fatal: unable to access remote"));
        assert!(!msg.ends_with('\n'));
    }

    #[test]
    fn external_tool_without_stderr_has_no_trailing_colon() {
        let err = TutorialError::ExternalTool {
            command: "git add -A".into(),
            code: Some(1),
            stderr: "   ".into(),
        };
        assert_eq!(err.to_string(), "`git add -A` failed with exit code 1");
    }

    #[test]
    fn no_remote_mentions_remote_name() {
        let err = TutorialError::NoRemote {
            remote: "origin".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("No remote repository configured"));
        assert!(msg.contains("origin"));
    }

    #[test]
    fn file_write_displays_path() {
        let err = TutorialError::FileWrite {
            path: PathBuf::from("/project/.gitignore"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/project/.gitignore"));
    }

    #[test]
    fn kinds_are_grouped() {
        assert_eq!(
            TutorialError::NoRemote {
                remote: "origin".into()
            }
            .kind(),
            ErrorKind::ExternalTool
        );
        assert_eq!(
            TutorialError::ToolUnavailable {
                program: "git".into(),
                message: "not found".into()
            }
            .kind(),
            ErrorKind::ExternalTool
        );
        assert_eq!(
            TutorialError::RepositoryExists {
                path: PathBuf::from("/p")
            }
            .kind(),
            ErrorKind::ExternalTool
        );
        assert_eq!(
            TutorialError::validation("empty").kind(),
            ErrorKind::Validation
        );
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TutorialError = io_err.into();
        assert_eq!(err.kind(), ErrorKind::Other);
    }

    #[test]
    fn exit_code_propagates_tool_code() {
        let err = TutorialError::ExternalTool {
            command: "git status".into(),
            code: Some(128),
            stderr: String::new(),
        };
        assert_eq!(err.exit_code(), 128);
    }

    #[test]
    fn exit_code_falls_back_to_one() {
        let signal = TutorialError::ExternalTool {
            command: "git push".into(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(signal.exit_code(), 1);

        let out_of_range = TutorialError::ExternalTool {
            command: "git push".into(),
            code: Some(-1),
            stderr: String::new(),
        };
        assert_eq!(out_of_range.exit_code(), 1);

        assert_eq!(TutorialError::validation("empty").exit_code(), 1);
    }

    #[test]
    fn multi_line_stderr_is_summarized_on_one_line() {
        let err = TutorialError::ExternalTool {
            command: "git push".into(),
            code: Some(1),
            stderr: "To github.com:student/notebooks.git\n ! [rejected]        main -> main (fetch first)\nerror: failed to push some refs to 'github.com:student/notebooks.git'\nhint: Updates were rejected because the remote contains work that you do not\n".into(),
        };

        let msg = err.to_string();
        assert!(!msg.contains('\n'));
        assert!(msg.ends_with("error: failed to push some refs to 'github.com:student/notebooks.git'"));
        assert!(err.details().unwrap().contains("Updates were rejected"));
    }

    #[test]
    fn single_line_stderr_has_no_details() {
        let err = TutorialError::ExternalTool {
            command: "git status".into(),
            code: Some(128),
            stderr: "fatal: not a git repository\n".into(),
        };
        assert!(err.to_string().ends_with(": fatal: not a git repository"));
        assert_eq!(err.details(), None);
        assert_eq!(TutorialError::validation("empty").details(), None);
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(TutorialError::validation("test"))
        }
        assert!(returns_error().is_err());
    }
}
