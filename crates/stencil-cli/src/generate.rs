//! Generator commands

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use stencil_build::{Builder, Manifest, WriteSummary, write_artifacts};
use stencil_core::{GenerateError, Generation, GeneratorConfig, schema};
use stencil_syn::SourceTree;
use tracing::debug;

/// Which source-driven generator to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Mappings,
    Handlers,
}

/// Load the `[generator]` section of a manifest, or the defaults
///
/// Only the generator settings are used; the manifest's inputs are ignored.
pub fn load_config(manifest: Option<&str>) -> Result<GeneratorConfig> {
    let Some(path) = manifest else {
        return Ok(GeneratorConfig::default());
    };
    let config = Manifest::from_file(path)?.generator;
    config
        .validate()
        .with_context(|| format!("Invalid [generator] section in {path}"))?;
    Ok(config)
}

/// `stencil api`
pub fn api(schema_path: &str, output: &str, manifest: Option<String>) -> Result<()> {
    let config = load_config(manifest.as_deref())?;

    println!("Generating API from: {schema_path}");

    let text = fs::read_to_string(schema_path)
        .with_context(|| format!("Failed to read schema: {schema_path}"))?;
    let entities = schema::from_json(&text)
        .with_context(|| format!("Failed to parse schema: {schema_path}"))?;
    debug!(entities = entities.len(), "loaded schema");
    let generation = stencil_core::generate_api(&entities, &config)?;

    finish(generation, Path::new(output))
}

/// `stencil mappings` and `stencil handlers`
pub fn from_sources(
    kind: SourceKind,
    source: &str,
    output: &str,
    manifest: Option<String>,
) -> Result<()> {
    let config = load_config(manifest.as_deref())?;

    println!("Scanning sources: {source}");

    let tree = SourceTree::from_dir(source)?;
    debug!(files = tree.corpus().len(), ?kind, "loaded sources");
    let generation = match kind {
        SourceKind::Mappings => stencil_core::generate_mappings(tree.corpus(), &tree, &config)?,
        SourceKind::Handlers => stencil_core::generate_handlers(tree.corpus(), &tree, &config)?,
    };

    finish(generation, Path::new(output))
}

/// `stencil generate`
pub fn all(output: &str, manifest: Option<String>, deny_failures: bool) -> Result<()> {
    let path = manifest.unwrap_or_else(|| "stencil.toml".to_string());

    println!("Generating from manifest: {path}");

    let report = Builder::new()
        .manifest(&path)?
        .out_dir(output)
        .emit_directives(false)
        .deny_failures(deny_failures)
        .generate()?;

    for failure in &report.failures {
        println!("{}", failure_line(failure));
    }
    println!(
        "\n✓ {} artifacts in {output}, {} skipped",
        report.artifacts.len(),
        report.failures.len()
    );
    Ok(())
}

fn finish(generation: Generation, output: &Path) -> Result<()> {
    for failure in &generation.failures {
        println!("{}", failure_line(failure));
    }

    let summary = write_artifacts(output, &generation.artifacts)?;
    print_summary(&summary);
    println!("\n✓ {} skipped", generation.failures.len());
    Ok(())
}

fn print_summary(summary: &WriteSummary) {
    for path in &summary.written {
        println!("✓ Wrote {}", path.display());
    }
    for path in &summary.unchanged {
        println!("  Unchanged {}", path.display());
    }
}

/// One printable line per left-out entity or candidate
pub fn failure_line(failure: &GenerateError) -> String {
    format!("⚠ [{}] {failure}", failure.code())
}
