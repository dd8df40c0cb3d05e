//! Advisory inspection of the project's `package.json`.
//!
//! Never gates scaffolding; callers only use it to warn.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestStatus {
    /// No `package.json` in the project root.
    Missing,
    NoDependencies,
    HasDependencies,
    /// Present but could not be read or parsed.
    Unreadable(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    #[serde(default)]
    dependencies: Option<Map<String, Value>>,
    #[serde(default)]
    dev_dependencies: Option<Map<String, Value>>,
}

impl PackageJson {
    fn has_dependencies(&self) -> bool {
        let non_empty = |m: &Option<Map<String, Value>>| m.as_ref().is_some_and(|m| !m.is_empty());
        non_empty(&self.dependencies) || non_empty(&self.dev_dependencies)
    }
}

pub fn inspect(root: &Path) -> ManifestStatus {
    let path = paths::package_json_path(root);
    if !path.exists() {
        return ManifestStatus::Missing;
    }
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => return ManifestStatus::Unreadable(e.to_string()),
    };
    match serde_json::from_str::<PackageJson>(&content) {
        Ok(pkg) if pkg.has_dependencies() => ManifestStatus::HasDependencies,
        Ok(_) => ManifestStatus::NoDependencies,
        Err(e) => ManifestStatus::Unreadable(e.to_string()),
    }
}
