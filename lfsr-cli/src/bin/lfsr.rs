// Prints LFSR sequences and Gold codes.
// 2 sub-commands
// - plain: full register states of one Galois LFSR
// - gold: bit 0 of two Galois LFSRs XORed at a cyclic offset
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lfsr_cli::common::{cli, output, utils};
use log::info;

fn main() -> Result<()> {
    utils::init_logging("warn");
    let args = cli::LfsrCli::parse();
    let config = args.command.to_config();

    let start = Instant::now();
    let seq = lfsr::generate(&config)
        .with_context(|| format!("cannot generate {} sequence", args.command.name()))?;
    info!(
        "Generated {} {} elements in {:.1?}",
        seq.len(),
        args.command.name(),
        start.elapsed()
    );

    let mut w = utils::open_output(&args.output)?;
    output::write_sequence(&mut *w, args.format, &config, &seq)?;
    if !args.output.is_empty() {
        info!("Wrote sequence to {}", args.output);
    }
    Ok(())
}
