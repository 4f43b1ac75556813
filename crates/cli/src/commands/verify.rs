use anyhow::Result;
use catalog_core::Verifier;

use crate::{branch_from_env, canonicalize_or_current};

/// Run the full verification: metadata, example registry, documentation,
/// and pipeline descriptors for the active branch.
pub fn verify_command(root: &str, branch: Option<String>) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let branch = branch.or_else(branch_from_env);

    let verifier = Verifier::new(&root_path);
    verifier.run(branch.as_deref())?;

    println!("Docs verification succeeded!");
    Ok(())
}
