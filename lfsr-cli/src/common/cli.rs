use clap::{Parser, Subcommand, ValueEnum};
use lfsr::SequenceConfig;

use super::utils::parse_hex;

const EXAMPLES: &str = "\
Examples:
  lfsr plain 16 0xB400 0x0001
  lfsr plain 4 0x9 0x01
  lfsr plain 5 0x14 0x01
  lfsr plain 6 0x30 0x01
  lfsr gold 1 5 0x14 0x17 0x01

Taps use the Galois right-shift convention, see https://users.ece.cmu.edu/~koopman/lfsr/";

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the maximal-length sequence of register states
    Plain {
        /// Register width in bits
        #[arg(value_parser = clap::value_parser!(u32).range(1..=32))]
        bits: u32,

        /// Feedback tap mask (hex)
        #[arg(value_parser = parse_hex)]
        taps: u32,

        /// Initial register state (hex)
        #[arg(value_parser = parse_hex)]
        init: u32,
    },
    /// Print a Gold code built from two LFSRs
    Gold {
        /// Code index: cyclic shift applied to the second sequence
        #[arg(allow_negative_numbers = true)]
        offset: i64,

        /// Register width in bits
        #[arg(value_parser = clap::value_parser!(u32).range(1..=32))]
        bits: u32,

        /// Tap mask of the first register (hex)
        #[arg(value_parser = parse_hex)]
        taps1: u32,

        /// Tap mask of the second register (hex)
        #[arg(value_parser = parse_hex)]
        taps2: u32,

        /// Initial state of both registers (hex)
        #[arg(value_parser = parse_hex)]
        init: u32,
    },
}

impl Command {
    pub fn to_config(&self) -> SequenceConfig {
        match *self {
            Command::Plain { bits, taps, init } => SequenceConfig::plain(bits, taps, init),
            Command::Gold {
                offset,
                bits,
                taps1,
                taps2,
                init,
            } => SequenceConfig::gold(bits, taps1, taps2, init, offset),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Plain { .. } => "plain",
            Command::Gold { .. } => "gold",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One value per line, each followed by a comma
    Text,
    /// A JSON report with the configuration and the sequence
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "lfsr", version, about = "Galois LFSR sequences and Gold codes", after_help = EXAMPLES)]
pub struct LfsrCli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    /// Output filename; stdout if empty
    #[arg(short, long, default_value = "", global = true)]
    pub output: String,
}
