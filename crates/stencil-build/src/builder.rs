//! Build-script entry point

use crate::manifest::{Inputs, Manifest};
use crate::output::write_artifacts;
use crate::pipeline::{self, Report};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use stencil_core::GeneratorConfig;
use tracing::info;

/// Configures and runs the generators
///
/// ```ignore
/// stencil_build::Builder::new()
///     .schema("api.json")
///     .sources("src")
///     .generate()?;
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    inputs: Inputs,
    config: GeneratorConfig,
    manifest_path: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    emit_directives: bool,
    deny_failures: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            inputs: Inputs::default(),
            config: GeneratorConfig::default(),
            manifest_path: None,
            out_dir: None,
            emit_directives: true,
            deny_failures: false,
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a `stencil.toml` manifest
    ///
    /// The manifest's inputs and `[generator]` section replace anything set
    /// before; later calls can still override them.
    pub fn manifest(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let manifest = Manifest::from_file(path)?;
        manifest
            .validate()
            .with_context(|| format!("Invalid manifest: {}", path.display()))?;

        self.inputs = manifest.inputs;
        self.config = manifest.generator;
        self.manifest_path = Some(path.to_path_buf());
        Ok(self)
    }

    /// JSON schema for the API generator
    pub fn schema(mut self, path: impl Into<PathBuf>) -> Self {
        self.inputs.schema = Some(path.into());
        self
    }

    /// Source root for the mapping and handler generators
    pub fn sources(mut self, path: impl Into<PathBuf>) -> Self {
        self.inputs.sources = Some(path.into());
        self
    }

    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Where to write artifacts. Defaults to `OUT_DIR`.
    pub fn out_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(path.into());
        self
    }

    /// Print `cargo:rerun-if-changed` lines for every input (default: on)
    pub fn emit_directives(mut self, emit: bool) -> Self {
        self.emit_directives = emit;
        self
    }

    /// Fail the build when any entity or candidate was left out (default: off)
    pub fn deny_failures(mut self, deny: bool) -> Self {
        self.deny_failures = deny;
        self
    }

    /// Run every configured generator and write the artifacts
    pub fn generate(self) -> Result<Report> {
        if self.inputs.is_empty() {
            anyhow::bail!("No inputs configured; call schema(), sources() or manifest()");
        }

        let out_dir = match &self.out_dir {
            Some(dir) => dir.clone(),
            None => std::env::var_os("OUT_DIR")
                .map(PathBuf::from)
                .context("OUT_DIR is not set; call out_dir() outside of build scripts")?,
        };

        if self.emit_directives {
            for line in self.directives() {
                println!("{line}");
            }
        }

        let report = pipeline::run(&self.inputs, &self.config)?;
        let summary = write_artifacts(&out_dir, &report.artifacts)?;
        info!(
            written = summary.written.len(),
            unchanged = summary.unchanged.len(),
            out_dir = %out_dir.display(),
            "artifacts written"
        );

        if self.deny_failures && !report.is_clean() {
            anyhow::bail!(
                "{} entities or candidates failed to generate",
                report.failures.len()
            );
        }

        Ok(report)
    }

    fn directives(&self) -> Vec<String> {
        self.manifest_path
            .iter()
            .map(PathBuf::as_path)
            .chain(self.inputs.paths())
            .map(|path| format!("cargo:rerun-if-changed={}", path.display()))
            .collect()
    }
}

#[cfg(test)]
#[path = "builder/builder_tests.rs"]
mod builder_tests;
