//! Verification orchestrator.
//!
//! Sequences the per-function and per-example checks for one branch context
//! and aborts on the first failure. Runs are read-only: re-running against an
//! unchanged tree and branch yields the same outcome.

use std::path::Path;

use crate::branch::{BranchContext, ReleaseContext};
use crate::catalog::{list_function_entries, owned_examples};
use crate::config::VerifyConfig;
use crate::crosscheck::ClaimedExamples;
use crate::docs::audit_example_docs;
use crate::error::VerifyResult;
use crate::kptfile::{kptfile_validation_suppressed, validate_kptfile};
use crate::layout::CatalogLayout;
use crate::metadata::{validate_metadata, MetadataFile};
use crate::model::{ExampleEntry, FunctionEntry, Partition};
use crate::tools::{MdripExtractor, PatchReaderResolver, PatchResolver, SnippetExtractor};

/// One verification run over a catalog checkout.
pub struct Verifier {
    cfg: VerifyConfig,
    layout: CatalogLayout,
    extractor: Box<dyn SnippetExtractor>,
    resolver: Box<dyn PatchResolver>,
}

impl Verifier {
    /// Verifier with the default configuration and the real external tools.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_tools(
            root,
            VerifyConfig::default(),
            Box::new(MdripExtractor),
            Box::new(PatchReaderResolver),
        )
    }

    /// Verifier with explicit configuration and collaborators; tests inject
    /// in-memory fakes here.
    pub fn with_tools(
        root: impl AsRef<Path>,
        cfg: VerifyConfig,
        extractor: Box<dyn SnippetExtractor>,
        resolver: Box<dyn PatchResolver>,
    ) -> Self {
        let layout = CatalogLayout::new(root);
        Self { cfg, layout, extractor, resolver }
    }

    pub fn config(&self) -> &VerifyConfig {
        &self.cfg
    }

    pub fn layout(&self) -> &CatalogLayout {
        &self.layout
    }

    /// Run the full verification for a raw branch identifier.
    pub fn run(&self, raw_branch: Option<&str>) -> VerifyResult<()> {
        let branch =
            BranchContext::resolve(raw_branch, &self.cfg, &self.layout, self.resolver.as_ref())?;
        match &branch {
            BranchContext::Master => self.verify_catalog(&branch),
            BranchContext::Release(release) => self.verify_release(&branch, release),
        }
    }

    /// Catalog mode: every function and example in both partitions.
    fn verify_catalog(&self, branch: &BranchContext) -> VerifyResult<()> {
        for partition in Partition::all() {
            let functions = list_function_entries(&self.cfg, &self.layout, partition)?;
            let mut claimed = ClaimedExamples::new();
            let mut audits: Vec<(&FunctionEntry, Vec<String>)> = Vec::new();

            for function in &functions {
                println!("verifying {}", function.name);
                let examples = self.check_function(branch, function, &mut claimed)?;
                audits.push((function, examples));
            }

            claimed.find_orphans(&self.cfg, &self.layout, partition)?;

            for (function, examples) in audits {
                for example in examples {
                    self.check_example(branch, function, &example)?;
                }
            }
        }
        Ok(())
    }

    /// Release mode: only the function named by the branch and its own
    /// examples.
    fn verify_release(&self, branch: &BranchContext, release: &ReleaseContext) -> VerifyResult<()> {
        let function = FunctionEntry {
            name: release.function.clone(),
            language: release.language,
            partition: release.partition,
            rel_path: self.layout.function_rel(
                release.partition,
                release.language,
                &release.function,
            ),
        };

        println!("verifying {}", function.name);
        let mut claimed = ClaimedExamples::new();
        let examples = self.check_function(branch, &function, &mut claimed)?;
        for example in examples {
            self.check_example(branch, &function, &example)?;
        }
        Ok(())
    }

    /// Metadata-only pass over both partitions; no example content checks.
    ///
    /// Mirrors the full run's metadata rules against an arbitrary branch
    /// name, for CI contexts that only gate on metadata correctness.
    pub fn check_metadata(&self, branch_name: &str) -> VerifyResult<()> {
        for partition in Partition::all() {
            for function in list_function_entries(&self.cfg, &self.layout, partition)? {
                println!("verifying {}", function.name);
                let function_dir = self.layout.function_path(
                    function.partition,
                    function.language,
                    &function.name,
                );
                let meta = MetadataFile::load(&function_dir, &self.cfg, &function.name)?;
                let owned =
                    owned_examples(&self.cfg, &self.layout, partition, &function.name)?;
                validate_metadata(&self.cfg, &self.layout, branch_name, &function, &meta, &owned)?;
            }
        }
        Ok(())
    }

    /// Validate one function's metadata and claim its examples.
    fn check_function(
        &self,
        branch: &BranchContext,
        function: &FunctionEntry,
        claimed: &mut ClaimedExamples,
    ) -> VerifyResult<Vec<String>> {
        let function_dir =
            self.layout.function_path(function.partition, function.language, &function.name);
        let meta = MetadataFile::load(&function_dir, &self.cfg, &function.name)?;
        let owned =
            owned_examples(&self.cfg, &self.layout, function.partition, &function.name)?;
        validate_metadata(
            &self.cfg,
            &self.layout,
            branch.name(&self.cfg),
            function,
            &meta,
            &owned,
        )?;
        claimed.claim(&function.name, &meta)
    }

    /// Audit one claimed example: documentation first, then the pipeline
    /// descriptor unless the example's own test harness covers it.
    fn check_example(
        &self,
        branch: &BranchContext,
        function: &FunctionEntry,
        example_name: &str,
    ) -> VerifyResult<()> {
        let example = ExampleEntry {
            name: example_name.to_string(),
            function: function.name.clone(),
            partition: function.partition,
            path: self.layout.example_path(function.partition, example_name),
            rel_path: self.layout.example_rel(function.partition, example_name),
        };

        audit_example_docs(&self.cfg, branch, self.extractor.as_ref(), &example)?;
        if !kptfile_validation_suppressed(&self.cfg, &example) {
            validate_kptfile(&self.cfg, &example, branch.tag(&self.cfg))?;
        }
        Ok(())
    }
}
