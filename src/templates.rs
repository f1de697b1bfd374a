//! Files embedded at compile time.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use include_dir::{include_dir, Dir};

use crate::error::{Result, TutorialError};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// File name the ignore template is written to.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// What happened when writing a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateWrite {
    /// The file did not exist and was created.
    Created(PathBuf),
    /// A file was already there and was left untouched.
    AlreadyPresent(PathBuf),
}

/// Contents of the ignore-pattern template.
pub fn gitignore() -> Result<&'static str> {
    TEMPLATES_DIR
        .get_file("gitignore")
        .and_then(|f| f.contents_utf8())
        .ok_or_else(|| TutorialError::Other(anyhow!("embedded gitignore template is missing")))
}

/// Write the ignore template into `dir` unless a `.gitignore` already exists.
///
/// Creation is atomic with respect to the existence check, so a file the
/// user created is never overwritten.
pub fn write_gitignore(dir: &Path) -> Result<TemplateWrite> {
    let path = dir.join(GITIGNORE_FILE);
    let content = gitignore()?;

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!("{} exists, leaving it alone", path.display());
            return Ok(TemplateWrite::AlreadyPresent(path));
        }
        Err(source) => return Err(TutorialError::FileWrite { path, source }),
    };

    file.write_all(content.as_bytes())
        .map_err(|source| TutorialError::FileWrite {
            path: path.clone(),
            source,
        })?;

    Ok(TemplateWrite::Created(path))
}
