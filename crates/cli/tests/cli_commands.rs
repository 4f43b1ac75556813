use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

/// A minimal valid catalog: one curated function with one example.
fn write_catalog(root: &Path) {
    let fn_dir = root.join("functions/go/foo");
    fs::create_dir_all(&fn_dir).expect("function dir");
    fs::write(
        fn_dir.join("metadata.yaml"),
        "image: gcr.io/kpt-fn/foo\n\
         description: Test function.\n\
         tags:\n  - test\n\
         sourceURL: https://github.com/GoogleContainerTools/kpt-functions-catalog/tree/master/functions/go/foo\n\
         examplePackageURLs:\n  - https://github.com/GoogleContainerTools/kpt-functions-catalog/tree/master/examples/foo-basic\n\
         emails:\n  - kpt-team@google.com\n\
         license: Apache-2.0\n",
    )
    .expect("metadata file");

    let example_dir = root.join("examples/foo-basic");
    fs::create_dir_all(&example_dir).expect("example dir");
    fs::write(example_dir.join("README.md"), "# foo: Basic\n\nBody.\n").expect("readme");
}

/// Fake mdrip output files so no external binary is spawned.
fn write_snippet_fakes(root: &Path, all_lines: &str) -> (std::path::PathBuf, std::path::PathBuf) {
    let all = root.join("mdrip-all.txt");
    let skip = root.join("mdrip-skip.txt");
    fs::write(&all, all_lines).expect("fake all");
    fs::write(&skip, "").expect("fake skip");
    (all, skip)
}

#[test]
fn verify_succeeds_on_a_valid_catalog() {
    let dir = tempdir().expect("tempdir");
    write_catalog(dir.path());
    let (all, skip) = write_snippet_fakes(
        dir.path(),
        "kpt pkg get https://github.com/GoogleContainerTools/kpt-functions-catalog.git/examples/foo-basic\n\
         docker run gcr.io/kpt-fn/foo:unstable\n",
    );

    cargo_bin_cmd!("catalog-verify")
        .arg("verify")
        .arg("--root")
        .arg(dir.path())
        .env_remove("GITHUB_BASE_REF")
        .env_remove("GITHUB_REF")
        .env("CV_MDRIP_FAKE_ALL", &all)
        .env("CV_MDRIP_FAKE_SKIP", &skip)
        .assert()
        .success()
        .stdout(predicate::str::contains("verifying foo"))
        .stdout(predicate::str::contains("Docs verification succeeded!"));
}

#[test]
fn verify_fails_on_a_malformed_release_branch() {
    let dir = tempdir().expect("tempdir");
    write_catalog(dir.path());

    cargo_bin_cmd!("catalog-verify")
        .arg("verify")
        .arg("--root")
        .arg(dir.path())
        .arg("--branch")
        .arg("not-a-release-branch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("release branch name"));
}

#[test]
fn verify_fails_when_the_branch_function_is_unknown() {
    let dir = tempdir().expect("tempdir");
    write_catalog(dir.path());

    cargo_bin_cmd!("catalog-verify")
        .arg("verify")
        .arg("--root")
        .arg(dir.path())
        .arg("--branch")
        .arg("ghost/v1.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("was not found"));
}

#[test]
fn verify_handles_a_release_branch_with_a_faked_patch_payload() {
    let dir = tempdir().expect("tempdir");

    let fn_dir = dir.path().join("functions/go/foo");
    fs::create_dir_all(&fn_dir).expect("function dir");
    fs::write(
        fn_dir.join("metadata.yaml"),
        "image: gcr.io/kpt-fn/foo\n\
         description: Test function.\n\
         tags:\n  - test\n\
         sourceURL: https://github.com/GoogleContainerTools/kpt-functions-catalog/tree/foo/v1.2/functions/go/foo\n\
         examplePackageURLs:\n  - https://github.com/GoogleContainerTools/kpt-functions-catalog/tree/foo/v1.2/examples/foo-basic\n\
         emails:\n  - kpt-team@google.com\n\
         license: Apache-2.0\n",
    )
    .expect("metadata file");
    let example_dir = dir.path().join("examples/foo-basic");
    fs::create_dir_all(&example_dir).expect("example dir");
    fs::write(example_dir.join("README.md"), "# foo: Basic\n\nBody.\n").expect("readme");

    let (all, skip) = write_snippet_fakes(dir.path(), "docker run gcr.io/kpt-fn/foo:1.2.5\n");
    let patch = dir.path().join("patch.json");
    fs::write(&patch, r#"{"latest_patch": "v1.2.5", "lang": "go"}"#).expect("fake patch");

    cargo_bin_cmd!("catalog-verify")
        .arg("verify")
        .arg("--root")
        .arg(dir.path())
        .arg("--branch")
        .arg("foo/v1.2")
        .env("CV_MDRIP_FAKE_ALL", &all)
        .env("CV_MDRIP_FAKE_SKIP", &skip)
        .env("CV_PATCH_FAKE_JSON", &patch)
        .assert()
        .success()
        .stdout(predicate::str::contains("Docs verification succeeded!"));
}

#[test]
fn verify_reads_the_branch_from_the_ci_environment() {
    let dir = tempdir().expect("tempdir");
    write_catalog(dir.path());

    // A pull-request ref pointing at a malformed release branch must fail
    // even without --branch.
    cargo_bin_cmd!("catalog-verify")
        .arg("verify")
        .arg("--root")
        .arg(dir.path())
        .env("GITHUB_BASE_REF", "still/not/a/release")
        .assert()
        .failure()
        .stderr(predicate::str::contains("release branch name"));
}

#[test]
fn check_metadata_succeeds_without_snippet_extraction() {
    let dir = tempdir().expect("tempdir");
    write_catalog(dir.path());
    // Broken docs are out of scope for the metadata-only check, and no
    // mdrip fakes are provided: the command must not need them.
    fs::write(dir.path().join("examples/foo-basic/README.md"), "not a heading\n")
        .expect("readme");

    cargo_bin_cmd!("catalog-verify")
        .arg("check-metadata")
        .arg("--root")
        .arg(dir.path())
        .env_remove("GITHUB_BASE_REF")
        .env_remove("GITHUB_REF")
        .assert()
        .success()
        .stdout(predicate::str::contains("metadata files check succeeded!"));
}

#[test]
fn check_metadata_reports_missing_fields() {
    let dir = tempdir().expect("tempdir");
    write_catalog(dir.path());
    fs::write(dir.path().join("functions/go/foo/metadata.yaml"), "image: gcr.io/kpt-fn/foo\n")
        .expect("metadata file");

    cargo_bin_cmd!("catalog-verify")
        .arg("check-metadata")
        .arg("--root")
        .arg(dir.path())
        .env_remove("GITHUB_BASE_REF")
        .env_remove("GITHUB_REF")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is required"));
}

#[test]
fn orphaned_example_directories_fail_the_run() {
    let dir = tempdir().expect("tempdir");
    write_catalog(dir.path());
    fs::create_dir_all(dir.path().join("examples/zed-basic")).expect("orphan dir");
    let (all, skip) = write_snippet_fakes(dir.path(), "");

    cargo_bin_cmd!("catalog-verify")
        .arg("verify")
        .arg("--root")
        .arg(dir.path())
        .env_remove("GITHUB_BASE_REF")
        .env_remove("GITHUB_REF")
        .env("CV_MDRIP_FAKE_ALL", &all)
        .env("CV_MDRIP_FAKE_SKIP", &skip)
        .assert()
        .failure()
        .stderr(predicate::str::contains("zed-basic"));
}
