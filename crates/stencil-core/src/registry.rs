//! Artifact collection.

use crate::error::{GenerateError, GenerateResult};
use crate::model::GeneratedArtifact;
use std::collections::HashSet;

/// Artifacts of one run, in insertion order, with unique ids.
#[derive(Debug, Default)]
pub struct ArtifactRegistry {
    artifacts: Vec<GeneratedArtifact>,
    ids: HashSet<String>,
}

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an artifact. Its id must not have been seen before.
    pub fn insert(&mut self, artifact: GeneratedArtifact) -> GenerateResult<()> {
        if !self.ids.insert(artifact.artifact_id.clone()) {
            return Err(GenerateError::DuplicateArtifact(artifact.artifact_id));
        }
        self.artifacts.push(artifact);
        Ok(())
    }

    pub fn get(&self, artifact_id: &str) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|a| a.artifact_id == artifact_id)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.artifacts.iter()
    }

    pub fn into_artifacts(self) -> Vec<GeneratedArtifact> {
        self.artifacts
    }
}
