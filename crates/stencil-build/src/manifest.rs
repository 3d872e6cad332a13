//! Manifest parsing and validation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stencil_core::GeneratorConfig;

/// stencil.toml manifest structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub inputs: Inputs,

    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// What the generators read
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// JSON schema document for API generation
    #[serde(default)]
    pub schema: Option<PathBuf>,

    /// Source root scanned for mapping registrations and handlers
    #[serde(default)]
    pub sources: Option<PathBuf>,
}

impl Inputs {
    /// Resolve relative paths against `base`
    ///
    /// Empty paths stay empty so that validation still rejects them.
    pub fn rooted_at(&self, base: &Path) -> Inputs {
        let root = |p: &PathBuf| {
            if p.as_os_str().is_empty() {
                p.clone()
            } else {
                base.join(p)
            }
        };
        Inputs {
            schema: self.schema.as_ref().map(root),
            sources: self.sources.as_ref().map(root),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.schema.is_none() && self.sources.is_none()
    }

    /// Every input path, for change tracking
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.schema
            .iter()
            .chain(self.sources.iter())
            .map(PathBuf::as_path)
    }
}

impl Manifest {
    /// Load manifest from a file
    ///
    /// Input paths are resolved relative to the manifest's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

        let mut manifest = Self::from_str(&content)?;
        if let Some(base) = path.parent() {
            manifest.inputs = manifest.inputs.rooted_at(base);
        }
        Ok(manifest)
    }

    /// Parse manifest from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            anyhow::bail!("Manifest names no inputs; set [inputs] schema or sources");
        }

        for path in self.inputs.paths() {
            if path.as_os_str().is_empty() {
                anyhow::bail!("Input paths cannot be empty");
            }
        }

        self.generator
            .validate()
            .context("Invalid [generator] section")?;

        Ok(())
    }
}
