use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod commands;

/// Canonicalize the root path if possible, falling back to the given string
/// relative to the current working directory.
pub fn canonicalize_or_current(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    if path == Path::new(".") {
        Ok(env::current_dir().context("Failed to get current directory")?)
    } else {
        // Try to canonicalize; if it fails (e.g., path does not yet exist),
        // join it with the current dir to get an absolute path.
        match path.canonicalize() {
            Ok(p) => Ok(p),
            Err(_) => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                Ok(cwd.join(path))
            }
        }
    }
}

/// Branch name from the CI environment.
///
/// `GITHUB_BASE_REF` wins (pull-request context); otherwise `GITHUB_REF`
/// with its `refs/heads/` prefix stripped (push context). Returns `None`
/// when neither yields a branch, which callers treat as master.
pub fn branch_from_env() -> Option<String> {
    if let Ok(base) = env::var("GITHUB_BASE_REF") {
        if !base.is_empty() {
            return Some(base);
        }
    }
    if let Ok(full_ref) = env::var("GITHUB_REF") {
        if let Some(branch) = full_ref.strip_prefix("refs/heads/") {
            if !branch.is_empty() {
                return Some(branch.to_string());
            }
        }
    }
    None
}
