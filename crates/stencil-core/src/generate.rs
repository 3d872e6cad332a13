//! Generator entry points.
//!
//! Each generator runs the full pipeline for its kind and returns every
//! artifact it produced plus the failures it could contain. Failures scoped
//! to a single entity or candidate are collected; anything that would leave
//! the artifact set inconsistent is returned as `Err`.

use crate::config::{GeneratorConfig, InvalidEntityPolicy};
use crate::corpus::SyntaxCorpus;
use crate::error::{ErrorScope, GenerateError, GenerateResult};
use crate::model::{EntityDescription, GeneratedArtifact};
use crate::registry::ArtifactRegistry;
use crate::resolver::{SymbolResolver, TypeResolver};
use crate::scanner::{MarkedDeclaration, RegistrationCall, Scanner};
use crate::synth::{api, handler, mapping};

/// Result of one generator run.
#[derive(Debug, Default)]
pub struct Generation {
    /// Artifacts in emission order.
    pub artifacts: Vec<GeneratedArtifact>,

    /// Entities or candidates left out of `artifacts`.
    pub failures: Vec<GenerateError>,
}

impl Generation {
    pub fn artifact(&self, artifact_id: &str) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|a| a.artifact_id == artifact_id)
    }
}

/// Generate repositories, models and controllers for `entities`, followed by
/// the bootstrap artifact.
///
/// With [`InvalidEntityPolicy::Abort`] the first invalid entity fails the run.
/// With [`InvalidEntityPolicy::Skip`] it is reported in
/// [`Generation::failures`] and left out of the bootstrap.
pub fn generate_api(
    entities: &[EntityDescription],
    config: &GeneratorConfig,
) -> GenerateResult<Generation> {
    config.validate()?;

    let mut registry = ArtifactRegistry::new();
    let mut failures = Vec::new();
    let mut registered = Vec::with_capacity(entities.len());

    for entity in entities {
        match api::synthesize_entity(entity, config) {
            Ok(artifact) => {
                registry.insert(artifact)?;
                registered.push(entity);
            }
            Err(e)
                if e.scope() == ErrorScope::Entity
                    && config.api.on_invalid_entity == InvalidEntityPolicy::Skip =>
            {
                failures.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    registry.insert(api::synthesize_bootstrap(&registered, config)?)?;

    Ok(Generation {
        artifacts: registry.into_artifacts(),
        failures,
    })
}

/// Generate mapping extensions for every registration call in `corpus`.
///
/// The mapping artifact is always produced, even when empty.
pub fn generate_mappings<H>(
    corpus: &SyntaxCorpus,
    host: &H,
    config: &GeneratorConfig,
) -> GenerateResult<Generation>
where
    H: TypeResolver + ?Sized,
{
    config.validate()?;

    let candidates = Scanner::new(RegistrationCall::from_config(&config.mapping)).scan(corpus);
    let resolved = SymbolResolver::new(host).resolve_mappings(&candidates);
    let output = mapping::synthesize_mappings(&resolved.items)?;

    let mut failures = resolved.failures;
    failures.extend(output.failures);

    Ok(Generation {
        artifacts: vec![output.artifact],
        failures,
    })
}

/// Generate handler plumbing for every marked declaration in `corpus`.
pub fn generate_handlers<H>(
    corpus: &SyntaxCorpus,
    host: &H,
    config: &GeneratorConfig,
) -> GenerateResult<Generation>
where
    H: TypeResolver + ?Sized,
{
    config.validate()?;

    let candidates = Scanner::new(MarkedDeclaration::from_config(&config.handler)).scan(corpus);
    let resolved = SymbolResolver::new(host).resolve_handlers(&candidates);

    let mut registry = ArtifactRegistry::new();
    let mut failures = resolved.failures;

    for description in &resolved.items {
        match handler::synthesize_handler(description) {
            Ok(artifact) => registry.insert(artifact)?,
            Err(e) if e.scope() != ErrorScope::Run => failures.push(e),
            Err(e) => return Err(e),
        }
    }

    Ok(Generation {
        artifacts: registry.into_artifacts(),
        failures,
    })
}
