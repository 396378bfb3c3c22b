use anyhow::Result;
use binfile::writer::write_fixed_bytes;
use clap::Parser;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Write the bytes 00 FF 10 A7 to binaryFile.bin in the current directory"
)]
struct Cli {}

fn main() -> Result<()> {
    binfile::telemetry::init()?;
    let _cli = Cli::parse();

    write_fixed_bytes()?;

    Ok(())
}
