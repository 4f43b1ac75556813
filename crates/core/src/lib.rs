//! catalog-core
//!
//! Consistency-verification engine for the kpt function catalog: proves that
//! each function's metadata record, example packages, and registry image
//! references agree with each other for a given branch context.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, CI harnesses, etc.). The engine
//! never builds or runs images; its only external effects are read-only
//! scans and the two collaborator tool invocations in [`tools`].

pub mod branch;
pub mod catalog;
pub mod config;
pub mod crosscheck;
pub mod docs;
pub mod error;
pub mod kptfile;
pub mod layout;
pub mod metadata;
pub mod model;
pub mod tools;
pub mod urls;
pub mod verify;

pub use config::VerifyConfig;
pub use error::{VerifyError, VerifyResult};
pub use verify::Verifier;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
