//! Settings discovery, parsing, and layering.
//!
//! Merge order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Settings file (`--config`, or `config.yml` in the platform config dir)
//! 3. Environment variables and CLI flags (clap resolves both)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TutorialError};
use crate::ui::OutputMode;

/// Default git executable.
pub const DEFAULT_GIT: &str = "git";

/// Default remote to push to.
pub const DEFAULT_REMOTE: &str = "origin";

/// On-disk settings file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    /// Git executable to run.
    pub git: Option<String>,
    /// Remote used by `sync`.
    pub remote: Option<String>,
    /// Default output verbosity.
    pub output: Option<OutputMode>,
}

impl SettingsFile {
    /// Parse settings from YAML text.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| TutorialError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TutorialError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub config: Option<PathBuf>,
    pub git: Option<String>,
    pub remote: Option<String>,
    pub output: Option<OutputMode>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Git executable to run.
    pub git: String,
    /// Remote used by `sync`.
    pub remote: String,
    /// Output verbosity.
    pub output: OutputMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            git: DEFAULT_GIT.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            output: OutputMode::Normal,
        }
    }
}

impl Settings {
    /// Resolve settings from all layers.
    ///
    /// An explicitly requested settings file must exist; the default one is
    /// optional.
    pub fn load(overrides: &SettingsOverrides) -> Result<Self> {
        let file = match &overrides.config {
            Some(path) => Some(SettingsFile::load(path)?),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Some(SettingsFile::load(&path)?),
                _ => None,
            },
        };

        Ok(Self::resolve(file, overrides))
    }

    /// Layer a settings file and overrides over the defaults.
    pub fn resolve(file: Option<SettingsFile>, overrides: &SettingsOverrides) -> Self {
        let mut settings = Self::default();

        if let Some(file) = file {
            settings.merge(file);
        }

        if let Some(git) = non_empty(&overrides.git) {
            settings.git = git;
        }
        if let Some(remote) = non_empty(&overrides.remote) {
            settings.remote = remote;
        }
        if let Some(output) = overrides.output {
            settings.output = output;
        }

        settings
    }

    /// Location of the user settings file, e.g. `~/.config/tutorial/config.yml`.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "tutorial")
            .map(|dirs| dirs.config_dir().join("config.yml"))
    }

    fn merge(&mut self, file: SettingsFile) {
        if let Some(git) = non_empty(&file.git) {
            self.git = git;
        }
        if let Some(remote) = non_empty(&file.remote) {
            self.remote = remote;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
