use std::fs;

use catalog_core::branch::BranchContext;
use catalog_core::config::VerifyConfig;
use catalog_core::error::{VerifyError, VerifyResult};
use catalog_core::layout::CatalogLayout;
use catalog_core::model::{Language, Partition};
use catalog_core::tools::PatchResolver;
use tempfile::tempdir;

/// Resolver returning a fixed patch version.
struct FixedPatch(&'static str);

impl PatchResolver for FixedPatch {
    fn latest_patch(&self, _function: &str, _minor: &str) -> VerifyResult<String> {
        Ok(self.0.to_string())
    }
}

/// Resolver that always fails, standing in for a patch-reader error.
struct FailingPatch;

impl PatchResolver for FailingPatch {
    fn latest_patch(&self, function: &str, _minor: &str) -> VerifyResult<String> {
        Err(VerifyError::PatchResolution {
            function: function.to_string(),
            detail: "could not find matching tag for release branch".to_string(),
        })
    }
}

fn catalog_with_function(partition: Partition, language: Language, name: &str) -> (tempfile::TempDir, CatalogLayout) {
    let dir = tempdir().expect("tempdir");
    let layout = CatalogLayout::new(dir.path());
    fs::create_dir_all(layout.function_path(partition, language, name)).expect("function dir");
    (dir, layout)
}

#[test]
fn absent_and_empty_branches_resolve_to_master() {
    let cfg = VerifyConfig::default();
    let dir = tempdir().expect("tempdir");
    let layout = CatalogLayout::new(dir.path());

    for raw in [None, Some(""), Some("master")] {
        let branch = BranchContext::resolve(raw, &cfg, &layout, &FixedPatch("v9.9.9"))
            .expect("master branch");
        assert_eq!(branch, BranchContext::Master);
        assert_eq!(branch.tag(&cfg), "unstable");
        assert_eq!(branch.url_suffix(), "");
        assert_eq!(branch.name(&cfg), "master");
    }
}

#[test]
fn release_branch_resolves_function_and_tag() {
    let cfg = VerifyConfig::default();
    let (_dir, layout) = catalog_with_function(Partition::Curated, Language::Go, "set-namespace");

    let branch =
        BranchContext::resolve(Some("set-namespace/v1.2"), &cfg, &layout, &FixedPatch("v1.2.3"))
            .expect("release branch");

    let BranchContext::Release(release) = &branch else {
        panic!("expected release context, got {branch:?}");
    };
    assert_eq!(release.function, "set-namespace");
    assert_eq!(release.version, "v1.2");
    assert_eq!(release.partition, Partition::Curated);
    assert_eq!(release.language, Language::Go);
    // The payload's leading `v` is stripped to match image tag conventions.
    assert_eq!(release.tag, "1.2.3");
    assert_eq!(branch.tag(&cfg), "1.2.3");
    assert_eq!(branch.name(&cfg), "set-namespace/v1.2");
    assert_eq!(branch.url_suffix(), "@set-namespace/v1.2");
}

#[test]
fn bare_patch_payload_is_used_verbatim() {
    let cfg = VerifyConfig::default();
    let (_dir, layout) = catalog_with_function(Partition::Curated, Language::Go, "foo");

    let branch = BranchContext::resolve(Some("foo/v1.2"), &cfg, &layout, &FixedPatch("1.2.3"))
        .expect("release branch");
    assert_eq!(branch.tag(&cfg), "1.2.3");
}

#[test]
fn contrib_functions_are_found_in_the_contrib_tree() {
    let cfg = VerifyConfig::default();
    let (_dir, layout) = catalog_with_function(Partition::Contrib, Language::Ts, "sops");

    let branch = BranchContext::resolve(Some("sops/v0.1"), &cfg, &layout, &FixedPatch("v0.1.7"))
        .expect("release branch");
    let BranchContext::Release(release) = branch else {
        panic!("expected release context");
    };
    assert_eq!(release.partition, Partition::Contrib);
    assert_eq!(release.language, Language::Ts);
}

#[test]
fn malformed_branches_are_rejected() {
    let cfg = VerifyConfig::default();
    let (_dir, layout) = catalog_with_function(Partition::Curated, Language::Go, "foo");

    for raw in ["foo", "foo/v1.2/extra", "foo/1.2", "/v1.2", "foo/", "foo/v1", "foo/vX.Y", "foo/v1.2.3"] {
        let err = BranchContext::resolve(Some(raw), &cfg, &layout, &FixedPatch("v1.2.3"))
            .expect_err(&format!("branch {raw:?} should be rejected"));
        assert!(
            matches!(err, VerifyError::BranchFormat { .. }),
            "branch {raw:?} should fail with a format error, got {err}"
        );
    }
}

#[test]
fn unknown_function_fails_before_patch_resolution() {
    let cfg = VerifyConfig::default();
    let dir = tempdir().expect("tempdir");
    let layout = CatalogLayout::new(dir.path());

    // The failing resolver proves the lookup short-circuits: a missing
    // function reports NotFound, not a resolution error.
    let err = BranchContext::resolve(Some("ghost/v1.0"), &cfg, &layout, &FailingPatch)
        .expect_err("unknown function");
    assert!(matches!(err, VerifyError::FunctionNotFound { .. }), "got {err}");
}

#[test]
fn resolver_failure_surfaces_as_resolution_error() {
    let cfg = VerifyConfig::default();
    let (_dir, layout) = catalog_with_function(Partition::Curated, Language::Go, "foo");

    let err = BranchContext::resolve(Some("foo/v1.2"), &cfg, &layout, &FailingPatch)
        .expect_err("resolution failure");
    assert!(matches!(err, VerifyError::PatchResolution { .. }), "got {err}");
    assert!(err.to_string().contains("could not find matching tag"));
}
