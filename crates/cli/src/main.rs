use anyhow::Result;
use catalog_verify::commands::{check_metadata_command, verify_command};
use clap::{Parser, Subcommand};

/// Cross-artifact consistency checker for the kpt function catalog.
///
/// This CLI is a thin wrapper around `catalog-core` (exposed in code as
/// `catalog_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "catalog-verify",
    version,
    about = "Verify catalog metadata, examples, and image references",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify the whole catalog (master) or one function (release branch).
    ///
    /// This checks, per function:
    /// - The metadata record against the branch's URLs and registry paths.
    /// - The function<->example mapping, including orphaned example dirs.
    /// - Every example's documentation snippets and pipeline descriptor.
    Verify {
        /// Catalog root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Branch to verify against. Defaults to the CI environment
        /// (GITHUB_BASE_REF / GITHUB_REF), then to master.
        #[arg(long)]
        branch: Option<String>,
    },

    /// Check only the metadata records of every function.
    CheckMetadata {
        /// Catalog root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Branch used when constructing expected URLs. Defaults to the CI
        /// environment, then to master.
        #[arg(long)]
        branch: Option<String>,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr through tracing; stdout carries only the
    // progress and outcome markers.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Default to the Verify command if none is provided.
    match cli.command.unwrap_or(Command::Verify { root: ".".to_string(), branch: None }) {
        Command::Verify { root, branch } => verify_command(&root, branch)?,
        Command::CheckMetadata { root, branch } => check_metadata_command(&root, branch)?,
    }

    Ok(())
}
