//! Core data model for catalog functions and their example packages.

use std::path::PathBuf;

/// Which half of the catalog a function lives in.
///
/// Curated functions are owned by the kpt team; contributed functions live
/// under `contrib/` and publish to a separate registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    Curated,
    Contrib,
}

impl Partition {
    /// Registry path prefix for images in this partition.
    pub fn registry_prefix(&self) -> &'static str {
        match self {
            Partition::Curated => "gcr.io/kpt-fn/",
            Partition::Contrib => "gcr.io/kpt-fn-contrib/",
        }
    }

    /// Both partitions, in scan order (curated first).
    pub fn all() -> [Partition; 2] {
        [Partition::Curated, Partition::Contrib]
    }
}

/// Implementation language of a function; determines its directory segment
/// under the functions tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Go,
    Ts,
}

impl Language {
    pub fn dir(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Ts => "ts",
        }
    }
}

/// A function discovered by scanning the catalog tree.
///
/// Entries are read-only snapshots; a verification run never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FunctionEntry {
    pub name: String,
    pub language: Language,
    pub partition: Partition,
    /// Path relative to the catalog root, always forward-slash separated
    /// (e.g. `functions/go/set-namespace`). Used verbatim in source URLs.
    pub rel_path: String,
}

/// An example package claimed by a function's metadata.
///
/// The name carries the owning function as a `<fn-name>-` prefix; the
/// remainder is the human-readable example label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleEntry {
    pub name: String,
    /// Owning function name, derived from the prefix.
    pub function: String,
    pub partition: Partition,
    /// Absolute path of the example directory.
    pub path: PathBuf,
    /// Path relative to the catalog root, forward-slash separated
    /// (e.g. `examples/set-namespace-basic`).
    pub rel_path: String,
}

impl ExampleEntry {
    /// Label part of the example name: everything after the function prefix,
    /// or the full name if the prefix does not match (naming checks catch
    /// that case separately).
    pub fn label(&self) -> &str {
        self.name
            .strip_prefix(&self.function)
            .map(|rest| rest.trim_start_matches('-'))
            .unwrap_or(&self.name)
    }
}
