//! Branch context: addressing mode and tag derivation.

use crate::catalog::find_function;
use crate::config::VerifyConfig;
use crate::error::{VerifyError, VerifyResult};
use crate::layout::CatalogLayout;
use crate::model::{Language, Partition};
use crate::tools::PatchResolver;

/// Normalized addressing mode for one verification run.
///
/// `Master` checks the whole catalog against the `unstable` tag. `Release`
/// checks the single function named by the branch against the latest patch
/// version of the branch's minor line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchContext {
    Master,
    Release(ReleaseContext),
}

/// Everything derived from a `<fn-name>/v<major>.<minor>` branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseContext {
    /// Full branch name, e.g. `set-namespace/v1.2`.
    pub branch: String,
    pub function: String,
    /// Minor version segment as written in the branch, e.g. `v1.2`.
    pub version: String,
    pub partition: Partition,
    pub language: Language,
    /// Resolved latest patch version for this minor line, without the
    /// leading `v`, e.g. `1.2.5`.
    pub tag: String,
}

impl BranchContext {
    /// Resolve a raw branch identifier into a context.
    ///
    /// Absent, empty, and the configured master name all select `Master`.
    /// Anything else must name a release branch; its function is located in
    /// the catalog tree and its tag is resolved through `resolver`.
    pub fn resolve(
        raw: Option<&str>,
        cfg: &VerifyConfig,
        layout: &CatalogLayout,
        resolver: &dyn PatchResolver,
    ) -> VerifyResult<Self> {
        let branch = match raw {
            None | Some("") => return Ok(BranchContext::Master),
            Some(branch) if branch == cfg.master_branch => return Ok(BranchContext::Master),
            Some(branch) => branch,
        };

        let (function, version) = parse_release_branch(branch)?;
        let (partition, language) = find_function(cfg, layout, function)
            .ok_or_else(|| VerifyError::FunctionNotFound { function: function.to_string() })?;

        let patch = resolver.latest_patch(function, version)?;
        // Image tags are bare versions; tolerate a `v`-prefixed payload.
        let tag = patch.strip_prefix('v').unwrap_or(&patch).to_string();

        Ok(BranchContext::Release(ReleaseContext {
            branch: branch.to_string(),
            function: function.to_string(),
            version: version.to_string(),
            partition,
            language,
            tag,
        }))
    }

    /// Branch name as used in source and package URLs.
    pub fn name<'a>(&'a self, cfg: &'a VerifyConfig) -> &'a str {
        match self {
            BranchContext::Master => &cfg.master_branch,
            BranchContext::Release(release) => &release.branch,
        }
    }

    /// Image tag expected on this branch.
    pub fn tag<'a>(&'a self, cfg: &'a VerifyConfig) -> &'a str {
        match self {
            BranchContext::Master => &cfg.unstable_tag,
            BranchContext::Release(release) => &release.tag,
        }
    }

    /// Suffix appended to cloneable package URLs: empty on master,
    /// `@<branch>` on a release branch.
    pub fn url_suffix(&self) -> String {
        match self {
            BranchContext::Master => String::new(),
            BranchContext::Release(release) => format!("@{}", release.branch),
        }
    }
}

/// Split `<fn-name>/v<major>.<minor>` into its two parts, rejecting any
/// other shape.
fn parse_release_branch(branch: &str) -> VerifyResult<(&str, &str)> {
    let mut parts = branch.split('/');
    let (function, version) = match (parts.next(), parts.next(), parts.next()) {
        (Some(function), Some(version), None) if !function.is_empty() && !version.is_empty() => {
            (function, version)
        }
        _ => return Err(VerifyError::BranchFormat { branch: branch.to_string() }),
    };
    if !is_minor_version(version) {
        return Err(VerifyError::BranchFormat { branch: branch.to_string() });
    }
    Ok((function, version))
}

/// `v<digits>.<digits>`, nothing more.
fn is_minor_version(version: &str) -> bool {
    let Some(rest) = version.strip_prefix('v') else {
        return false;
    };
    let mut parts = rest.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(major), Some(minor), None) => {
            !major.is_empty()
                && !minor.is_empty()
                && major.chars().all(|c| c.is_ascii_digit())
                && minor.chars().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}
