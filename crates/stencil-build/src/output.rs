//! Writing artifacts to disk

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use stencil_core::GeneratedArtifact;
use tracing::debug;

/// Outcome of [`write_artifacts`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// Files created or replaced
    pub written: Vec<PathBuf>,

    /// Files that already held the generated text
    pub unchanged: Vec<PathBuf>,
}

/// Write each artifact to `out_dir/<artifact_id>`
///
/// A file whose content already matches is not touched, so its modification
/// time only changes when its text does.
pub fn write_artifacts(out_dir: &Path, artifacts: &[GeneratedArtifact]) -> Result<WriteSummary> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let mut summary = WriteSummary::default();
    for artifact in artifacts {
        let id = &artifact.artifact_id;
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            anyhow::bail!("Artifact id is not a plain file name: {id:?}");
        }

        let path = out_dir.join(id);
        let current = fs::read_to_string(&path).ok();
        if current.as_deref() == Some(artifact.text.as_str()) {
            debug!(path = %path.display(), "artifact unchanged");
            summary.unchanged.push(path);
            continue;
        }

        fs::write(&path, &artifact.text)
            .with_context(|| format!("Failed to write artifact: {}", path.display()))?;
        debug!(path = %path.display(), bytes = artifact.text.len(), "wrote artifact");
        summary.written.push(path);
    }

    Ok(summary)
}
