fn main() -> anyhow::Result<()> {
    stencil_build::init_logging();

    stencil_build::Builder::new()
        .schema("api.json")
        .deny_failures(true)
        .generate()?;

    Ok(())
}
