//! Running every generator over one set of inputs

use crate::manifest::Inputs;
use anyhow::{Context, Result};
use std::fs;
use stencil_core::{
    ArtifactRegistry, GenerateError, GeneratedArtifact, Generation, GeneratorConfig,
    generate_api, generate_handlers, generate_mappings, schema,
};
use stencil_syn::SourceTree;
use tracing::{debug, info, warn};

/// Everything one pipeline run produced
#[derive(Debug, Default)]
pub struct Report {
    /// Artifacts of all generators, API first, then mappings, then handlers
    pub artifacts: Vec<GeneratedArtifact>,

    /// Entities and candidates that were left out
    pub failures: Vec<GenerateError>,
}

impl Report {
    pub fn artifact(&self, artifact_id: &str) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|a| a.artifact_id == artifact_id)
    }

    /// True when nothing was left out
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run the API generator on `inputs.schema` and the mapping and handler
/// generators on `inputs.sources`
///
/// Artifact ids must be unique across generators.
pub fn run(inputs: &Inputs, config: &GeneratorConfig) -> Result<Report> {
    config
        .validate()
        .context("Invalid generator configuration")?;

    let mut collector = Collector::default();

    if let Some(path) = &inputs.schema {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema: {}", path.display()))?;
        let entities = schema::from_json(&text)
            .with_context(|| format!("Failed to parse schema: {}", path.display()))?;
        debug!(entities = entities.len(), schema = %path.display(), "loaded schema");

        let generation = generate_api(&entities, config).context("API generation failed")?;
        collector.add("api", generation)?;
    }

    if let Some(path) = &inputs.sources {
        let tree = SourceTree::from_dir(path)
            .with_context(|| format!("Failed to load sources: {}", path.display()))?;
        debug!(files = tree.corpus().len(), sources = %path.display(), "loaded sources");

        let generation = generate_mappings(tree.corpus(), &tree, config)
            .context("Mapping generation failed")?;
        collector.add("mapping", generation)?;

        let generation = generate_handlers(tree.corpus(), &tree, config)
            .context("Handler generation failed")?;
        collector.add("handler", generation)?;
    }

    let report = collector.finish();
    info!(
        artifacts = report.artifacts.len(),
        failures = report.failures.len(),
        "generation finished"
    );
    Ok(report)
}

#[derive(Default)]
struct Collector {
    registry: ArtifactRegistry,
    failures: Vec<GenerateError>,
}

impl Collector {
    fn add(&mut self, generator: &str, generation: Generation) -> Result<()> {
        for failure in &generation.failures {
            warn!(generator, code = failure.code(), "{failure}");
        }
        self.failures.extend(generation.failures);

        for artifact in generation.artifacts {
            debug!(generator, artifact = %artifact.artifact_id, "generated");
            self.registry
                .insert(artifact)
                .with_context(|| format!("{generator} generator output collides"))?;
        }
        Ok(())
    }

    fn finish(self) -> Report {
        Report {
            artifacts: self.registry.into_artifacts(),
            failures: self.failures,
        }
    }
}
