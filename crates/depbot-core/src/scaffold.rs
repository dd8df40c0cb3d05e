//! Writes the Dependabot config or workflow for a [`Selection`].
//!
//! Nothing here overwrites an existing file. Every "already there" case comes
//! back as a [`ScaffoldOutcome`] rather than an error.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::io;
use crate::paths;
use crate::templates::{render, DEPENDABOT_CONFIG_TEMPLATE, DEPENDABOT_WORKFLOW_TEMPLATE};
use crate::types::{Interval, Mode, Selection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ScaffoldOutcome {
    /// The target file was written.
    Created { path: PathBuf },
    /// `.github/dependabot.yml` existed before dispatch; nothing was touched.
    AlreadyConfigured { path: PathBuf },
    /// The branch found `.github/dependabot.yml` and skipped its write.
    ConfigExists { path: PathBuf },
    /// The workflow file already existed.
    WorkflowExists { path: PathBuf },
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub mode: Mode,
    pub interval: Interval,
    pub outcome: ScaffoldOutcome,
}

impl ScaffoldReport {
    /// False only when the pre-check stopped the run before dispatch.
    pub fn dispatched(&self) -> bool {
        !matches!(self.outcome, ScaffoldOutcome::AlreadyConfigured { .. })
    }
}

/// Scaffold `selection` under `root`.
///
/// An existing `.github/dependabot.yml` stops the run before any directory
/// is created, whatever the mode.
pub fn run(root: &Path, selection: Selection) -> Result<ScaffoldReport> {
    let config = paths::dependabot_config_path(root);

    let outcome = if config.exists() {
        tracing::debug!(path = %config.display(), "dependabot config present, skipping");
        ScaffoldOutcome::AlreadyConfigured { path: config }
    } else {
        match selection.mode {
            Mode::Local => scaffold_local(root, selection.interval)?,
            Mode::Action => scaffold_action(root, selection.interval)?,
        }
    };

    Ok(ScaffoldReport {
        root: root.to_path_buf(),
        mode: selection.mode,
        interval: selection.interval,
        outcome,
    })
}

/// Write `.github/dependabot.yml` with the given interval.
pub fn scaffold_local(root: &Path, interval: Interval) -> Result<ScaffoldOutcome> {
    io::ensure_dir(&paths::github_dir(root))?;

    let path = paths::dependabot_config_path(root);
    let content = render(DEPENDABOT_CONFIG_TEMPLATE, interval);
    if io::write_if_missing(&path, content.as_bytes())? {
        Ok(ScaffoldOutcome::Created { path })
    } else {
        Ok(ScaffoldOutcome::ConfigExists { path })
    }
}

/// Write `.github/workflows/dependabot-action.yml` with the given interval.
///
/// Skipped when a local config already exists, since the workflow would
/// only regenerate it.
pub fn scaffold_action(root: &Path, interval: Interval) -> Result<ScaffoldOutcome> {
    io::ensure_dir(&paths::github_dir(root))?;
    io::ensure_dir(&paths::workflows_dir(root))?;

    let config = paths::dependabot_config_path(root);
    if config.exists() {
        return Ok(ScaffoldOutcome::ConfigExists { path: config });
    }

    let path = paths::workflow_path(root);
    let content = render(DEPENDABOT_WORKFLOW_TEMPLATE, interval);
    if io::write_if_missing(&path, content.as_bytes())? {
        Ok(ScaffoldOutcome::Created { path })
    } else {
        Ok(ScaffoldOutcome::WorkflowExists { path })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
