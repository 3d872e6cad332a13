//! `stencil check`

use anyhow::Result;
use stencil_build::Manifest;

/// Validate a manifest and print what it configures
pub fn run(manifest_path: Option<String>) -> Result<()> {
    let path = manifest_path.unwrap_or_else(|| "stencil.toml".to_string());

    println!("Checking manifest: {}", path);

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;

    for line in describe(&manifest) {
        println!("{line}");
    }
    println!("\nManifest is valid!");

    Ok(())
}

fn describe(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(schema) = &manifest.inputs.schema {
        lines.push(format!("✓ Schema: {}", schema.display()));
    }
    if let Some(sources) = &manifest.inputs.sources {
        lines.push(format!("✓ Sources: {}", sources.display()));
    }

    let generator = &manifest.generator;
    lines.push(format!("✓ Runtime: {}", generator.runtime_path));
    lines.push(format!(
        "✓ Invalid entities: {:?}",
        generator.api.on_invalid_entity
    ));
    lines.push(format!(
        "✓ Registration: {}::{}",
        generator.mapping.receivers.join("|"),
        generator.mapping.method
    ));
    lines.push(format!("✓ Handler markers: {}", generator.handler.markers.join(", ")));
    lines
}
