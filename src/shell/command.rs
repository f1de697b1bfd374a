//! External command execution.

use crate::error::{Result, TutorialError};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Result of running an external program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,
}

impl ToolOutput {
    /// Create a successful output with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Create a failed output with the given exit code and stderr.
    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Attach stdout to this output.
    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self
    }

    /// Whether the program exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Stdout and stderr joined, for matching messages git prints on either stream.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Runs external programs.
///
/// The only seam between the dispatcher and the outside world, so tests can
/// substitute [`MockRunner`](super::MockRunner) and never touch a real
/// executable.
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd`, blocking until it exits.
    ///
    /// A non-zero exit is *not* an error here: it is reported through
    /// [`ToolOutput::exit_code`]. Only a program that cannot be started at all
    /// produces `Err`.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<ToolOutput>;
}

/// [`CommandRunner`] backed by `std::process`.
///
/// Output is always captured so stderr can be attached to errors. Stdin is
/// inherited, which lets git ask for credentials when it needs them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<ToolOutput> {
        // A missing cwd also surfaces as NotFound from spawn.
        if !cwd.is_dir() {
            return Err(TutorialError::validation(format!(
                "Working directory {} does not exist",
                cwd.display()
            )));
        }

        let start = Instant::now();

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| TutorialError::ToolUnavailable {
                program: program.to_string(),
                message: match e.kind() {
                    ErrorKind::NotFound => "executable not found on PATH".to_string(),
                    _ => e.to_string(),
                },
            })?;

        let result = ToolOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        tracing::debug!(
            "{} {} exited with {:?} in {:?}",
            program,
            args.join(" "),
            result.exit_code,
            start.elapsed()
        );

        Ok(result)
    }
}
