use std::path::{Path, PathBuf};

/// Resolve the directory the scaffold is written into.
///
/// `--root` wins; otherwise the current working directory. No upward search:
/// `.github/` always lands where the command was invoked.
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
