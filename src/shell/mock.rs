//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything. It
//! records every call and replays responses configured per argument list.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use tutorial::shell::{CommandRunner, MockRunner, ToolOutput};
//!
//! let runner = MockRunner::new();
//! runner.respond(&["status"], ToolOutput::ok("On branch main\n"));
//!
//! let out = runner.run("git", &["status"], Path::new(".")).unwrap();
//! assert_eq!(out.stdout, "On branch main\n");
//! assert_eq!(runner.calls(), vec![vec!["status".to_string()]]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

use crate::error::{Result, TutorialError};

use super::{CommandRunner, ToolOutput};

/// A single recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Mock runner that records calls and replays configured responses.
///
/// Responses are keyed by the space-joined argument list. Queued responses
/// (via `queue`) are consumed first; after that a fixed response (via
/// `respond`) is returned every time. Unconfigured calls succeed with empty
/// output unless `fail_unconfigured` is set.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: RefCell<HashMap<String, ToolOutput>>,
    queues: RefCell<HashMap<String, VecDeque<ToolOutput>>>,
    calls: RefCell<Vec<RecordedCall>>,
    unavailable: bool,
    fail_unconfigured: bool,
}

impl MockRunner {
    /// Create a mock where every unconfigured call succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that behaves as if the program is not installed.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    /// Make unconfigured calls fail with exit code 1.
    pub fn fail_unconfigured(mut self) -> Self {
        self.fail_unconfigured = true;
        self
    }

    /// Always answer `args` with `output`.
    pub fn respond(&self, args: &[&str], output: ToolOutput) {
        self.responses.borrow_mut().insert(key(args), output);
    }

    /// Answer the next call with `args` with `output`, ahead of any fixed response.
    pub fn queue(&self, args: &[&str], output: ToolOutput) {
        self.queues
            .borrow_mut()
            .entry(key(args))
            .or_default()
            .push_back(output);
    }

    /// All recorded calls, as argument lists.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().iter().map(|c| c.args.clone()).collect()
    }

    /// All recorded calls with program and working directory.
    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Check whether a call with exactly `args` was made.
    pub fn was_called(&self, args: &[&str]) -> bool {
        let wanted = key(args);
        self.calls.borrow().iter().any(|c| c.args.join(" ") == wanted)
    }

    /// Check whether any call started with the given subcommand.
    pub fn was_called_with_prefix(&self, prefix: &[&str]) -> bool {
        self.calls.borrow().iter().any(|c| {
            c.args.len() >= prefix.len() && c.args.iter().zip(prefix).all(|(a, p)| a == p)
        })
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<ToolOutput> {
        self.calls.borrow_mut().push(RecordedCall {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        });

        if self.unavailable {
            return Err(TutorialError::ToolUnavailable {
                program: program.to_string(),
                message: "executable not found on PATH".to_string(),
            });
        }

        let key = key(args);

        if let Some(queue) = self.queues.borrow_mut().get_mut(&key) {
            if let Some(output) = queue.pop_front() {
                return Ok(output);
            }
        }

        if let Some(output) = self.responses.borrow().get(&key) {
            return Ok(output.clone());
        }

        if self.fail_unconfigured {
            Ok(ToolOutput::failed(1, format!("unexpected call: {}", key)))
        } else {
            Ok(ToolOutput::ok(""))
        }
    }
}

fn key(args: &[&str]) -> String {
    args.join(" ")
}
