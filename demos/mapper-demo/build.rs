fn main() -> anyhow::Result<()> {
    stencil_build::init_logging();

    stencil_build::Builder::new()
        .sources("src")
        .deny_failures(true)
        .generate()?;

    Ok(())
}
