//! User settings.
//!
//! - [`settings`] - Settings file discovery, parsing, and layering with CLI/env overrides

pub mod settings;

pub use settings::{Settings, SettingsFile, SettingsOverrides, DEFAULT_GIT, DEFAULT_REMOTE};
