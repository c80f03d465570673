fn main() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(marquee_lib::run())?;
    Ok(())
}
