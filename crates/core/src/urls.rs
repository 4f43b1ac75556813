//! Canonical URL and image-reference construction.
//!
//! Expected values are built by rule from the branch context and catalog
//! layout, never parsed out of strings, so every check compares against the
//! same construction.

use crate::config::VerifyConfig;
use crate::model::Partition;

/// Browsable URL of a function's source directory on a given branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrl(String);

impl SourceUrl {
    pub fn new(cfg: &VerifyConfig, branch: &str, function_rel: &str) -> Self {
        Self(format!("{}/{}/{}", cfg.repo_tree_url, branch, function_rel))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Browsable URL of an example package on a given branch, as listed in
/// `examplePackageURLs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUrl(String);

impl PackageUrl {
    pub fn new(cfg: &VerifyConfig, branch: &str, example_rel: &str) -> Self {
        Self(format!("{}/{}/{}", cfg.repo_tree_url, branch, example_rel))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cloneable package URL used in `kpt pkg get` snippets: the clone URL plus
/// the example path, with an `@<branch>` suffix off master.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonePackageUrl(String);

impl ClonePackageUrl {
    pub fn new(cfg: &VerifyConfig, example_rel: &str, branch_suffix: &str) -> Self {
        Self(format!("{}/{}{}", cfg.repo_clone_url, example_rel, branch_suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClonePackageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry image reference for a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    /// Untagged registry path, as declared in metadata (`gcr.io/kpt-fn/foo`).
    pub fn base(partition: Partition, function: &str) -> Self {
        Self(format!("{}{}", partition.registry_prefix(), function))
    }

    /// Tagged reference, as expected in docs and pipeline descriptors
    /// (`gcr.io/kpt-fn/foo:unstable`).
    pub fn tagged(partition: Partition, function: &str, tag: &str) -> Self {
        Self(format!("{}{}:{}", partition.registry_prefix(), function, tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
