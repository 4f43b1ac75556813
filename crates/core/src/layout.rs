//! On-disk layout of a function catalog checkout.

use std::path::{Path, PathBuf};

use crate::model::{Language, Partition};

/// Computed paths for a catalog rooted at `root`.
///
/// This is derived from a chosen root path. It does *not* perform any IO
/// itself; scanning and file reads happen in the components that need them.
#[derive(Debug, Clone)]
pub struct CatalogLayout {
    /// Root directory of the catalog checkout.
    pub root: PathBuf,
    /// Curated functions tree (`functions`), one subdirectory per language.
    pub functions_dir: PathBuf,
    /// Contributed functions tree (`contrib/functions`).
    pub contrib_functions_dir: PathBuf,
    /// Curated examples tree (`examples`), one directory per example.
    pub curated_examples_dir: PathBuf,
    /// Contributed examples tree (`contrib/examples`).
    pub contrib_examples_dir: PathBuf,
}

impl CatalogLayout {
    /// Compute the layout for a catalog rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let functions_dir = root.join("functions");
        let contrib_functions_dir = root.join("contrib").join("functions");
        let curated_examples_dir = root.join("examples");
        let contrib_examples_dir = root.join("contrib").join("examples");

        Self { root, functions_dir, contrib_functions_dir, curated_examples_dir, contrib_examples_dir }
    }

    /// Directory holding one partition's functions for one language.
    pub fn function_dir(&self, partition: Partition, language: Language) -> PathBuf {
        match partition {
            Partition::Curated => self.functions_dir.join(language.dir()),
            Partition::Contrib => self.contrib_functions_dir.join(language.dir()),
        }
    }

    /// Directory of a single function.
    pub fn function_path(&self, partition: Partition, language: Language, name: &str) -> PathBuf {
        self.function_dir(partition, language).join(name)
    }

    /// Examples tree for a partition.
    pub fn examples_dir(&self, partition: Partition) -> &Path {
        match partition {
            Partition::Curated => &self.curated_examples_dir,
            Partition::Contrib => &self.contrib_examples_dir,
        }
    }

    /// Directory of a single example.
    pub fn example_path(&self, partition: Partition, name: &str) -> PathBuf {
        self.examples_dir(partition).join(name)
    }

    /// Root-relative function path with forward slashes, as it appears in
    /// source URLs (e.g. `contrib/functions/ts/sops`).
    pub fn function_rel(&self, partition: Partition, language: Language, name: &str) -> String {
        match partition {
            Partition::Curated => format!("functions/{}/{}", language.dir(), name),
            Partition::Contrib => format!("contrib/functions/{}/{}", language.dir(), name),
        }
    }

    /// Root-relative example path with forward slashes, as it appears in
    /// package URLs (e.g. `examples/set-namespace-basic`).
    pub fn example_rel(&self, partition: Partition, name: &str) -> String {
        match partition {
            Partition::Curated => format!("examples/{name}"),
            Partition::Contrib => format!("contrib/examples/{name}"),
        }
    }
}
