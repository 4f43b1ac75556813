//! Pipeline descriptor validation.
//!
//! An example may declare a Kptfile whose pipeline references function
//! images. Every referenced image must match the function and tag of the
//! branch under verification. A missing descriptor, an unrecognized schema
//! version, and a descriptor without a pipeline stanza are all valid
//! non-pipeline examples, not errors.

use std::fs;

use serde::Deserialize;

use crate::config::VerifyConfig;
use crate::error::{VerifyError, VerifyResult};
use crate::model::ExampleEntry;
use crate::urls::ImageRef;

/// The slice of a Kptfile this checker cares about; unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Kptfile {
    #[serde(rename = "apiVersion")]
    pub api_version: Option<String>,
    pub pipeline: Option<Pipeline>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub mutators: Vec<FunctionRef>,
    #[serde(default)]
    pub validators: Vec<FunctionRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionRef {
    pub image: Option<String>,
}

/// The slice of an e2e test config this checker cares about.
#[derive(Debug, Clone, Default, Deserialize)]
struct TestConfig {
    #[serde(rename = "testType")]
    test_type: Option<String>,
}

/// Check every pipeline image of an example's descriptor against the
/// expected reference for this function and tag.
pub fn validate_kptfile(
    cfg: &VerifyConfig,
    example: &ExampleEntry,
    tag: &str,
) -> VerifyResult<()> {
    let path = example.path.join(&cfg.kptfile_filename);
    if !path.is_file() {
        return Ok(());
    }
    let body =
        fs::read_to_string(&path).map_err(|source| VerifyError::Io { path: path.clone(), source })?;
    let kptfile: Kptfile = serde_yaml::from_str(&body)
        .map_err(|e| VerifyError::Parse { path, detail: e.to_string() })?;

    let recognized = kptfile
        .api_version
        .as_deref()
        .map_or(false, |schema| cfg.kptfile_schemas.iter().any(|known| known == schema));
    if !recognized {
        return Ok(());
    }
    let Some(pipeline) = &kptfile.pipeline else {
        return Ok(());
    };

    let expected = ImageRef::tagged(example.partition, &example.function, tag);
    for function_ref in pipeline.mutators.iter().chain(pipeline.validators.iter()) {
        // Entries without an image (e.g. exec functions) are not checked.
        let Some(image) = &function_ref.image else {
            continue;
        };
        if image != expected.as_str() {
            return Err(VerifyError::PipelineImage {
                example: example.name.clone(),
                expected: expected.as_str().to_string(),
                actual: image.clone(),
            });
        }
    }

    Ok(())
}

/// Whether descriptor validation is suppressed for this example.
///
/// Examples driven through their own e2e harness (an `eval`-typed test
/// config, or an exec script) pin images there instead of in the Kptfile.
pub fn kptfile_validation_suppressed(cfg: &VerifyConfig, example: &ExampleEntry) -> bool {
    let expected_dir = example.path.join(&cfg.expected_dir);

    let config_path = expected_dir.join(&cfg.test_config_filename);
    if let Ok(body) = fs::read_to_string(&config_path) {
        match serde_yaml::from_str::<TestConfig>(&body) {
            Ok(config) => {
                if config.test_type.as_deref() == Some("eval") {
                    return true;
                }
            }
            Err(e) => {
                tracing::warn!(path = %config_path.display(), "unreadable test config: {e}");
            }
        }
    }

    expected_dir.join(&cfg.exec_script_filename).is_file()
}
