//! Function <-> example referential integrity.
//!
//! A function's metadata is the authoritative statement of which examples it
//! owns: the claimed example list is derived from `examplePackageURLs`, not
//! from a second directory scan. The disk is consulted once, at the end of a
//! partition pass, to catch example directories nobody claims. The reverse
//! direction needs no separate check: every claimed example is opened by the
//! documentation audit, which fails if the directory is absent.

use std::collections::BTreeSet;

use crate::catalog::list_example_dirs;
use crate::config::VerifyConfig;
use crate::error::{VerifyError, VerifyResult};
use crate::layout::CatalogLayout;
use crate::metadata::MetadataFile;
use crate::model::Partition;

/// Accumulates the example names claimed by all functions in one partition.
#[derive(Debug, Default)]
pub struct ClaimedExamples {
    claimed: BTreeSet<String>,
}

impl ClaimedExamples {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive one function's example names from its metadata and add them to
    /// the claimed set.
    ///
    /// The name is the last path segment of each package URL and must carry
    /// the `<fn-name>-` prefix. Returns the derived list so the caller can
    /// audit each example.
    pub fn claim(&mut self, function: &str, meta: &MetadataFile) -> VerifyResult<Vec<String>> {
        let prefix = format!("{function}-");
        let mut names = Vec::new();
        for url in meta.record.example_package_urls.as_deref().unwrap_or_default() {
            let name = url.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
            if !name.starts_with(&prefix) {
                return Err(VerifyError::ExampleName {
                    function: function.to_string(),
                    example: name.to_string(),
                });
            }
            self.claimed.insert(name.to_string());
            names.push(name.to_string());
        }
        Ok(names)
    }

    /// Fail on the first on-disk example directory that no function's
    /// metadata references.
    pub fn find_orphans(
        &self,
        cfg: &VerifyConfig,
        layout: &CatalogLayout,
        partition: Partition,
    ) -> VerifyResult<()> {
        for name in list_example_dirs(cfg, layout, partition)? {
            if !self.claimed.contains(&name) {
                return Err(VerifyError::OrphanExample {
                    path: layout.example_path(partition, &name),
                    example: name,
                });
            }
        }
        Ok(())
    }
}
