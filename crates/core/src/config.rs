//! Run configuration: naming conventions, required fields, and deny-lists.
//!
//! A `VerifyConfig` is built once per run and passed by reference into every
//! check. There are no ambient globals; tests construct their own config when
//! they need to deviate from the catalog defaults.

use crate::model::Language;

/// Immutable configuration for one verification run.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Metadata file expected in every function directory.
    pub metadata_filename: String,
    /// Documentation file expected in every example directory.
    pub readme_filename: String,
    /// Pipeline descriptor file, optional per example.
    pub kptfile_filename: String,
    /// Reserved per-example directory holding e2e test fixtures.
    pub expected_dir: String,
    /// Test configuration file inside the reserved directory.
    pub test_config_filename: String,
    /// Execution script inside the reserved directory.
    pub exec_script_filename: String,
    /// Languages scanned under each functions tree.
    pub languages: Vec<Language>,
    /// Directory names ignored when scanning the functions trees.
    pub function_dirs_to_skip: Vec<String>,
    /// Directory names ignored when scanning the examples trees.
    pub example_dirs_to_skip: Vec<String>,
    /// Keys that must be present in every metadata file.
    pub required_fields: Vec<String>,
    /// Email that must appear in every function's contact list.
    pub team_email: String,
    /// Browsable repository URL prefix (`.../tree`), without trailing slash.
    pub repo_tree_url: String,
    /// Cloneable repository URL used in `kpt pkg get` snippets.
    pub repo_clone_url: String,
    /// Legacy command forms that must not appear in example docs.
    pub disallowed_commands: Vec<String>,
    /// Branch name that triggers a catalog-wide check.
    pub master_branch: String,
    /// Image tag expected on the master branch.
    pub unstable_tag: String,
    /// Pipeline descriptor schema identifiers this checker understands.
    pub kptfile_schemas: Vec<String>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            metadata_filename: "metadata.yaml".to_string(),
            readme_filename: "README.md".to_string(),
            kptfile_filename: "Kptfile".to_string(),
            expected_dir: ".expected".to_string(),
            test_config_filename: "config.yaml".to_string(),
            exec_script_filename: "exec.sh".to_string(),
            languages: vec![Language::Go, Language::Ts],
            function_dirs_to_skip: vec![
                "_template".to_string(),
                "dist".to_string(),
                "node_modules".to_string(),
            ],
            example_dirs_to_skip: vec!["_template".to_string()],
            required_fields: vec![
                "image".to_string(),
                "description".to_string(),
                "tags".to_string(),
                "sourceURL".to_string(),
                "examplePackageURLs".to_string(),
                "emails".to_string(),
                "license".to_string(),
            ],
            team_email: "kpt-team@google.com".to_string(),
            repo_tree_url: "https://github.com/GoogleContainerTools/kpt-functions-catalog/tree"
                .to_string(),
            repo_clone_url: "https://github.com/GoogleContainerTools/kpt-functions-catalog.git"
                .to_string(),
            disallowed_commands: vec![
                "kpt fn run".to_string(),
                "kpt cfg".to_string(),
                "kpt fn source".to_string(),
                "kpt fn sink".to_string(),
            ],
            master_branch: "master".to_string(),
            unstable_tag: "unstable".to_string(),
            kptfile_schemas: vec!["kpt.dev/v1alpha2".to_string(), "kpt.dev/v1".to_string()],
        }
    }
}

impl VerifyConfig {
    /// Substring that marks a token as a catalog image reference, regardless
    /// of partition.
    pub fn registry_marker(&self) -> &'static str {
        "gcr.io/kpt-fn"
    }
}
