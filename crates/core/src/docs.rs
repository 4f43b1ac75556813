//! Documentation audit for example packages.
//!
//! Example READMEs double as runnable install instructions, so every
//! copy-pasteable command must point at the artifact version of the branch
//! being verified: package URLs carry the right branch suffix and image
//! references carry the right tag. Snippets annotated `skip` are exempt from
//! command-content auditing; their lines may still appear in the document.

use std::collections::HashSet;
use std::fs;

use crate::branch::BranchContext;
use crate::config::VerifyConfig;
use crate::error::{VerifyError, VerifyResult};
use crate::model::ExampleEntry;
use crate::tools::SnippetExtractor;
use crate::urls::{ClonePackageUrl, ImageRef};

/// Audit one example's documentation: naming, title format, and every
/// unskipped command line.
pub fn audit_example_docs(
    cfg: &VerifyConfig,
    branch: &BranchContext,
    extractor: &dyn SnippetExtractor,
    example: &ExampleEntry,
) -> VerifyResult<()> {
    check_example_name(example)?;
    check_title(cfg, example)?;
    check_command_lines(cfg, branch, extractor, example)
}

fn check_example_name(example: &ExampleEntry) -> VerifyResult<()> {
    let prefix = format!("{}-", example.function);
    if !example.name.starts_with(&prefix) {
        return Err(VerifyError::ExampleName {
            function: example.function.clone(),
            example: example.name.clone(),
        });
    }
    Ok(())
}

/// The first line must be a `# ` heading naming the function and the
/// example's label (separators spelled as spaces), case-insensitively.
fn check_title(cfg: &VerifyConfig, example: &ExampleEntry) -> VerifyResult<()> {
    let readme = example.path.join(&cfg.readme_filename);
    let body = fs::read_to_string(&readme)
        .map_err(|source| VerifyError::Io { path: readme.clone(), source })?;
    let first_line = body.lines().next().unwrap_or_default();

    if !first_line.starts_with("# ") {
        return Err(VerifyError::TitleFormat {
            example: example.name.clone(),
            line: first_line.to_string(),
            expected: example.function.clone(),
        });
    }

    let title = first_line.to_lowercase();
    if !title.contains(&example.function.to_lowercase()) {
        return Err(VerifyError::TitleFormat {
            example: example.name.clone(),
            line: first_line.to_string(),
            expected: example.function.clone(),
        });
    }

    let label = example.label().replace('-', " ").to_lowercase();
    if !title.contains(&label) {
        return Err(VerifyError::TitleFormat {
            example: example.name.clone(),
            line: first_line.to_string(),
            expected: label,
        });
    }

    Ok(())
}

fn check_command_lines(
    cfg: &VerifyConfig,
    branch: &BranchContext,
    extractor: &dyn SnippetExtractor,
    example: &ExampleEntry,
) -> VerifyResult<()> {
    let readme = example.path.join(&cfg.readme_filename);
    let all_lines = extractor.extract(&readme, None)?;
    let skipped: HashSet<String> = extractor.extract(&readme, Some("skip"))?.into_iter().collect();

    let expected_pkg_url = ClonePackageUrl::new(cfg, &example.rel_path, &branch.url_suffix());
    let expected_image =
        ImageRef::tagged(example.partition, &example.function, branch.tag(cfg));

    for line in &all_lines {
        if skipped.contains(line) {
            continue;
        }
        // Comments and echoed text are not commands.
        if line.starts_with('#') || line.starts_with("echo") {
            continue;
        }

        for command in &cfg.disallowed_commands {
            if line.contains(command.as_str()) {
                return Err(VerifyError::DisallowedCommand {
                    example: example.name.clone(),
                    command: command.clone(),
                    line: line.clone(),
                });
            }
        }

        for token in line.split_whitespace() {
            if token.starts_with(&cfg.repo_clone_url) {
                // Deeper paths below the canonical package URL are fine; a
                // different core prefix is not.
                if !token.starts_with(expected_pkg_url.as_str()) {
                    return Err(VerifyError::LinkMismatch {
                        example: example.name.clone(),
                        expected: expected_pkg_url.as_str().to_string(),
                        found: token.to_string(),
                    });
                }
            } else if token.contains(cfg.registry_marker())
                && !token.contains(expected_image.as_str())
            {
                return Err(VerifyError::ImageReference {
                    example: example.name.clone(),
                    expected: expected_image.as_str().to_string(),
                    found: token.to_string(),
                });
            }
        }
    }

    Ok(())
}
