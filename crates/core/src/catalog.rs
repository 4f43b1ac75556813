//! Directory scans over the catalog tree.
//!
//! These are thin listing wrappers: they discover entries and apply the
//! configured skip-lists, nothing more. All rule checking lives in the
//! validator modules. Listings are sorted by name so a run over an unchanged
//! tree always visits entries in the same order.

use std::fs;
use std::path::Path;

use crate::config::VerifyConfig;
use crate::error::{VerifyError, VerifyResult};
use crate::layout::CatalogLayout;
use crate::model::{FunctionEntry, Language, Partition};

/// All function entries in one partition, across every configured language.
///
/// Language directories that do not exist are skipped; a partition with no
/// functions tree simply yields no entries.
pub fn list_function_entries(
    cfg: &VerifyConfig,
    layout: &CatalogLayout,
    partition: Partition,
) -> VerifyResult<Vec<FunctionEntry>> {
    let mut entries = Vec::new();
    for language in &cfg.languages {
        let dir = layout.function_dir(partition, *language);
        if !dir.is_dir() {
            continue;
        }
        for name in list_subdirs(&dir)? {
            if cfg.function_dirs_to_skip.iter().any(|skip| skip == &name) {
                continue;
            }
            entries.push(FunctionEntry {
                rel_path: layout.function_rel(partition, *language, &name),
                name,
                language: *language,
                partition,
            });
        }
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Names of the example directories in one partition, minus the skip-list.
///
/// A missing examples tree yields an empty list.
pub fn list_example_dirs(
    cfg: &VerifyConfig,
    layout: &CatalogLayout,
    partition: Partition,
) -> VerifyResult<Vec<String>> {
    let dir = layout.examples_dir(partition);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut names: Vec<String> = list_subdirs(dir)?
        .into_iter()
        .filter(|name| !cfg.example_dirs_to_skip.iter().any(|skip| skip == name))
        .collect();
    names.sort();
    Ok(names)
}

/// On-disk examples owned by one function: the partition's example
/// directories whose names carry the `<fn-name>-` prefix.
pub fn owned_examples(
    cfg: &VerifyConfig,
    layout: &CatalogLayout,
    partition: Partition,
    function: &str,
) -> VerifyResult<Vec<String>> {
    let prefix = format!("{function}-");
    Ok(list_example_dirs(cfg, layout, partition)?
        .into_iter()
        .filter(|name| name.starts_with(&prefix))
        .collect())
}

/// Locate a function by name across both partitions and all languages.
///
/// Curated wins over contrib when a name exists in both.
pub fn find_function(
    cfg: &VerifyConfig,
    layout: &CatalogLayout,
    name: &str,
) -> Option<(Partition, Language)> {
    for partition in Partition::all() {
        for language in &cfg.languages {
            if layout.function_path(partition, *language, name).is_dir() {
                return Some((partition, *language));
            }
        }
    }
    None
}

fn list_subdirs(dir: &Path) -> VerifyResult<Vec<String>> {
    let mut names = Vec::new();
    let read_dir = fs::read_dir(dir)
        .map_err(|source| VerifyError::Io { path: dir.to_path_buf(), source })?;
    for entry in read_dir {
        let entry =
            entry.map_err(|source| VerifyError::Io { path: dir.to_path_buf(), source })?;
        let file_type = entry
            .file_type()
            .map_err(|source| VerifyError::Io { path: entry.path(), source })?;
        if !file_type.is_dir() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    Ok(names)
}
