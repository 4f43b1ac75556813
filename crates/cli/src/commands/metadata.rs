use anyhow::Result;
use catalog_core::Verifier;

use crate::{branch_from_env, canonicalize_or_current};

/// Run the metadata-only check over every function in both partitions.
pub fn check_metadata_command(root: &str, branch: Option<String>) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let branch = branch.or_else(branch_from_env).unwrap_or_else(|| "master".to_string());

    let verifier = Verifier::new(&root_path);
    verifier.check_metadata(&branch)?;

    println!("metadata files check succeeded!");
    Ok(())
}
