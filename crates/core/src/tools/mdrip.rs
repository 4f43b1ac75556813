//! Fenced-block extraction via the external `mdrip` binary.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{VerifyError, VerifyResult};
use crate::tools::SnippetExtractor;

/// Shells out to `mdrip [--label <label>] <doc>` and returns stdout split
/// into lines.
pub struct MdripExtractor;

impl SnippetExtractor for MdripExtractor {
    fn extract(&self, doc: &Path, label: Option<&str>) -> VerifyResult<Vec<String>> {
        // Allow tests to feed synthetic output via env to avoid needing
        // mdrip installed. One variable per extraction mode, since the two
        // calls differ only by label.
        let fake_var = match label {
            None => "CV_MDRIP_FAKE_ALL",
            Some(_) => "CV_MDRIP_FAKE_SKIP",
        };
        if let Some(fake) = env::var_os(fake_var) {
            let body = fs::read_to_string(&fake).map_err(|e| VerifyError::SnippetExtraction {
                path: doc.to_path_buf(),
                detail: format!("failed to read {fake_var}: {e}"),
            })?;
            return Ok(split_lines(&body));
        }

        let mdrip = resolve_mdrip_path();
        let mut cmd = Command::new(&mdrip);
        if let Some(label) = label {
            cmd.args(["--label", label]);
        }
        let output = cmd.arg(doc).output().map_err(|e| VerifyError::SnippetExtraction {
            path: doc.to_path_buf(),
            detail: format!("failed to spawn {}: {e}", mdrip.display()),
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            tracing::warn!(doc = %doc.display(), "stderr of mdrip: {}", stderr.trim_end());
        }
        if !output.status.success() {
            return Err(VerifyError::SnippetExtraction {
                path: doc.to_path_buf(),
                detail: format!("mdrip exited with {}", output.status),
            });
        }

        Ok(split_lines(&String::from_utf8_lossy(&output.stdout)))
    }
}

fn resolve_mdrip_path() -> PathBuf {
    env::var_os("MDRIP_BIN").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("mdrip"))
}

fn split_lines(body: &str) -> Vec<String> {
    body.lines().map(|line| line.to_string()).collect()
}
