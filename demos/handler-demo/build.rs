fn main() -> anyhow::Result<()> {
    stencil_build::init_logging();

    stencil_build::Builder::new()
        .manifest("stencil.toml")?
        .generate()?;

    Ok(())
}
