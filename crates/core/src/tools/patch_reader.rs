//! Latest-patch lookup via the external `patch-reader` binary.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;

use crate::error::{VerifyError, VerifyResult};
use crate::tools::PatchResolver;

/// Payload emitted on stdout by patch-reader.
#[derive(Debug, Deserialize)]
struct PatchPayload {
    latest_patch: String,
    #[serde(default)]
    #[allow(dead_code)]
    lang: Option<String>,
}

/// Shells out to `patch-reader --function <name> --minor <vX.Y>` and reads
/// the `latest_patch` field from its JSON payload.
pub struct PatchReaderResolver;

impl PatchResolver for PatchReaderResolver {
    fn latest_patch(&self, function: &str, minor: &str) -> VerifyResult<String> {
        // Test hook: read the payload from a file instead of spawning.
        if let Some(fake) = env::var_os("CV_PATCH_FAKE_JSON") {
            let body = fs::read_to_string(&fake).map_err(|e| VerifyError::PatchResolution {
                function: function.to_string(),
                detail: format!("failed to read CV_PATCH_FAKE_JSON: {e}"),
            })?;
            return parse_payload(function, &body);
        }

        let reader = resolve_patch_reader_path();
        let output = Command::new(&reader)
            .args(["--function", function, "--minor", minor])
            .output()
            .map_err(|e| VerifyError::PatchResolution {
                function: function.to_string(),
                detail: format!("failed to spawn {}: {e}", reader.display()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VerifyError::PatchResolution {
                function: function.to_string(),
                detail: format!("patch-reader exited with {}: {}", output.status, stderr.trim_end()),
            });
        }

        parse_payload(function, &String::from_utf8_lossy(&output.stdout))
    }
}

fn resolve_patch_reader_path() -> PathBuf {
    env::var_os("PATCH_READER_BIN")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("patch-reader"))
}

fn parse_payload(function: &str, body: &str) -> VerifyResult<String> {
    let payload: PatchPayload =
        serde_json::from_str(body).map_err(|e| VerifyError::PatchResolution {
            function: function.to_string(),
            detail: format!("failed to parse patch-reader payload: {e}"),
        })?;
    Ok(payload.latest_patch)
}
