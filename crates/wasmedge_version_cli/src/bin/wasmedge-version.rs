use clap::Parser;
use wasmedge_version_cli::{trace, WasmEdgeVersion};

/// Main `wasmedge-version` executable entrypoint.
pub fn main() -> anyhow::Result<()> {
    let cmd = WasmEdgeVersion::parse();
    trace::init_fmt(cmd.structured.clone())?;
    cmd.run(&mut std::io::stdout().lock())?;
    Ok(())
}
