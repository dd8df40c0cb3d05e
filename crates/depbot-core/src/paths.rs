use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

pub const GITHUB_DIR: &str = ".github";
pub const WORKFLOWS_DIR: &str = ".github/workflows";

pub const DEPENDABOT_FILE: &str = ".github/dependabot.yml";
pub const WORKFLOW_FILE: &str = ".github/workflows/dependabot-action.yml";

pub const PACKAGE_JSON: &str = "package.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn github_dir(root: &Path) -> PathBuf {
    root.join(GITHUB_DIR)
}

pub fn workflows_dir(root: &Path) -> PathBuf {
    root.join(WORKFLOWS_DIR)
}

pub fn dependabot_config_path(root: &Path) -> PathBuf {
    root.join(DEPENDABOT_FILE)
}

pub fn workflow_path(root: &Path) -> PathBuf {
    root.join(WORKFLOW_FILE)
}

pub fn package_json_path(root: &Path) -> PathBuf {
    root.join(PACKAGE_JSON)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
