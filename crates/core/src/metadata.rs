//! Metadata record loading and validation.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::VerifyConfig;
use crate::error::{VerifyError, VerifyResult};
use crate::layout::CatalogLayout;
use crate::model::FunctionEntry;
use crate::urls::{ImageRef, PackageUrl, SourceUrl};

/// Typed view of a function's metadata record.
///
/// Every field is optional at parse time: presence is checked by the
/// required-fields rule, not by deserialization errors, so a missing key
/// reports the field name instead of a serde message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionMetadata {
    pub image: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(rename = "sourceURL")]
    pub source_url: Option<String>,
    #[serde(rename = "examplePackageURLs")]
    pub example_package_urls: Option<Vec<String>>,
    pub emails: Option<Vec<String>>,
    pub license: Option<String>,
}

/// A parsed metadata file: the typed record plus the set of keys that were
/// literally present, so `tags: null` and a missing `tags` key stay
/// distinguishable.
#[derive(Debug, Clone)]
pub struct MetadataFile {
    keys: BTreeSet<String>,
    pub record: FunctionMetadata,
}

impl MetadataFile {
    /// Load and parse the metadata file of one function directory.
    pub fn load(function_dir: &Path, cfg: &VerifyConfig, function: &str) -> VerifyResult<Self> {
        let path = function_dir.join(&cfg.metadata_filename);
        if !path.is_file() {
            return Err(VerifyError::MissingMetadata {
                function: function.to_string(),
                path: function_dir.to_path_buf(),
                filename: cfg.metadata_filename.clone(),
            });
        }
        let body = fs::read_to_string(&path)
            .map_err(|source| VerifyError::Io { path: path.clone(), source })?;
        let value: serde_yaml::Value = serde_yaml::from_str(&body)
            .map_err(|e| VerifyError::Parse { path: path.clone(), detail: e.to_string() })?;

        let keys = value
            .as_mapping()
            .map(|mapping| {
                mapping
                    .keys()
                    .filter_map(|key| key.as_str().map(|s| s.to_string()))
                    .collect::<BTreeSet<_>>()
            })
            .unwrap_or_default();
        let record: FunctionMetadata = serde_yaml::from_value(value)
            .map_err(|e| VerifyError::Parse { path, detail: e.to_string() })?;

        Ok(Self { keys, record })
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.keys.contains(field)
    }
}

/// Apply the metadata record rules for one function, failing on the first
/// violation.
///
/// `owned_examples` is the function's on-disk example list; every one of
/// them must be claimed by `examplePackageURLs`. This is a set-containment
/// check: order and extra entries are not this rule's concern.
pub fn validate_metadata(
    cfg: &VerifyConfig,
    layout: &CatalogLayout,
    branch_name: &str,
    function: &FunctionEntry,
    meta: &MetadataFile,
    owned_examples: &[String],
) -> VerifyResult<()> {
    for field in &cfg.required_fields {
        if !meta.has_field(field) {
            return Err(VerifyError::MissingField {
                function: function.name.clone(),
                field: field.clone(),
            });
        }
    }

    let expected_image = ImageRef::base(function.partition, &function.name);
    let actual_image = meta.record.image.as_deref().unwrap_or_default();
    if actual_image != expected_image.as_str() {
        return Err(VerifyError::ImageName {
            function: function.name.clone(),
            expected: expected_image.as_str().to_string(),
            actual: actual_image.to_string(),
        });
    }

    if meta.record.tags.as_deref().map_or(true, |tags| tags.is_empty()) {
        return Err(VerifyError::EmptyField {
            function: function.name.clone(),
            field: "tags".to_string(),
        });
    }

    let expected_source = SourceUrl::new(cfg, branch_name, &function.rel_path);
    let actual_source = meta.record.source_url.as_deref().unwrap_or_default();
    if actual_source != expected_source.as_str() {
        return Err(VerifyError::SourceUrl {
            function: function.name.clone(),
            expected: expected_source.as_str().to_string(),
            actual: actual_source.to_string(),
        });
    }

    let package_urls = meta.record.example_package_urls.as_deref().unwrap_or_default();
    if package_urls.is_empty() {
        return Err(VerifyError::EmptyField {
            function: function.name.clone(),
            field: "examplePackageURLs".to_string(),
        });
    }

    for example in owned_examples {
        let expected =
            PackageUrl::new(cfg, branch_name, &layout.example_rel(function.partition, example));
        if !package_urls.iter().any(|url| url == expected.as_str()) {
            return Err(VerifyError::MissingExampleUrl {
                function: function.name.clone(),
                expected: expected.as_str().to_string(),
            });
        }
    }

    let emails = meta.record.emails.as_deref().unwrap_or_default();
    if !emails.iter().any(|email| email == &cfg.team_email) {
        return Err(VerifyError::MissingTeamEmail {
            function: function.name.clone(),
            email: cfg.team_email.clone(),
        });
    }

    Ok(())
}
