//! Error taxonomy for verification runs.
//!
//! Every check fails fast: the first violated rule aborts the whole run with
//! one of these errors. There is no accumulation and no retry; a transient
//! collaborator failure aborts the same way a rule violation does.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for verification operations.
pub type VerifyResult<T> = Result<T, VerifyError>;

#[derive(Debug, Error)]
pub enum VerifyError {
    /// A required metadata key is absent.
    #[error("{function}: field {field} is required")]
    MissingField { function: String, field: String },

    /// The function directory has no metadata file at all.
    #[error("{function}: directory {path} must contain a {filename} file")]
    MissingMetadata { function: String, path: PathBuf, filename: String },

    /// The declared image does not match the partition's registry path.
    #[error("{function}: image name should be \"{expected}\", found \"{actual}\"")]
    ImageName { function: String, expected: String, actual: String },

    /// A list-valued metadata field is present but empty (or null).
    #[error("{function}: \"{field}\" must contain at least one entry")]
    EmptyField { function: String, field: String },

    /// The declared source URL does not match the canonical URL for the
    /// function's path on the active branch.
    #[error("{function}: sourceURL should be \"{expected}\", found \"{actual}\"")]
    SourceUrl { function: String, expected: String, actual: String },

    /// An on-disk example is not listed in the function's metadata.
    #[error("{function}: \"{expected}\" is not listed in examplePackageURLs")]
    MissingExampleUrl { function: String, expected: String },

    /// The team contact address is missing from the emails list.
    #[error("{function}: \"{email}\" should be in the emails list")]
    MissingTeamEmail { function: String, email: String },

    /// An example name is not prefixed by its owning function's name.
    #[error("example \"{example}\" must start with the function name \"{function}-\"")]
    ExampleName { function: String, example: String },

    /// An example directory on disk is not referenced by any function's
    /// metadata.
    #[error("example \"{example}\" at {path} is not referenced by any function's metadata")]
    OrphanExample { example: String, path: PathBuf },

    /// The first line of an example's documentation does not follow the
    /// title convention.
    #[error("{example}: title line {line:?} should be a `# ` heading containing \"{expected}\"")]
    TitleFormat { example: String, line: String, expected: String },

    /// A documentation snippet uses a command form from the deny-list.
    #[error("{example}: command \"{command}\" is not allowed (line: {line:?})")]
    DisallowedCommand { example: String, command: String, line: String },

    /// A documentation snippet references the repository with the wrong
    /// package URL for the active branch.
    #[error("{example}: the desired package url is {expected}, but found {found}")]
    LinkMismatch { example: String, expected: String, found: String },

    /// A documentation snippet references the function image with the wrong
    /// path or tag for the active branch.
    #[error("{example}: image reference should contain \"{expected}\", found \"{found}\"")]
    ImageReference { example: String, expected: String, found: String },

    /// A pipeline descriptor entry references the wrong image.
    #[error("{example}: pipeline image should be \"{expected}\", found \"{actual}\"")]
    PipelineImage { example: String, expected: String, actual: String },

    /// The release branch name is malformed.
    #[error("the release branch name must be `<fn-name>/v<major>.<minor>`, got \"{branch}\"")]
    BranchFormat { branch: String },

    /// The function named by a release branch exists in neither partition.
    #[error("function \"{function}\" was not found in the curated or contrib functions trees")]
    FunctionNotFound { function: String },

    /// The external patch-version lookup failed.
    #[error("failed to resolve the latest patch version for \"{function}\": {detail}")]
    PatchResolution { function: String, detail: String },

    /// The external snippet extractor failed.
    #[error("failed to extract command blocks from {path}: {detail}")]
    SnippetExtraction { path: PathBuf, detail: String },

    /// Filesystem access failed.
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    /// A structured file could not be parsed.
    #[error("failed to parse {path}: {detail}")]
    Parse { path: PathBuf, detail: String },
}
