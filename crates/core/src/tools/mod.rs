//! External collaborator tools.
//!
//! The engine shells out for two things: extracting fenced command blocks
//! from example docs (mdrip) and resolving a minor version to its latest
//! released patch (patch-reader). Both sit behind narrow traits so tests can
//! substitute in-memory fakes.

pub mod mdrip;
pub mod patch_reader;

pub use mdrip::MdripExtractor;
pub use patch_reader::PatchReaderResolver;

use std::path::Path;

use crate::error::VerifyResult;

/// Produces the ordered command lines of a document's fenced code blocks.
///
/// With no label, every fenced block is extracted; with a label, only the
/// blocks annotated with that label.
pub trait SnippetExtractor {
    fn extract(&self, doc: &Path, label: Option<&str>) -> VerifyResult<Vec<String>>;
}

/// Resolves a function's minor version line to its latest released patch
/// version (e.g. `set-namespace`, `v1.2` -> `v1.2.5`).
pub trait PatchResolver {
    fn latest_patch(&self, function: &str, minor: &str) -> VerifyResult<String>;
}
