//! Run configuration for the Sequence Composer.
//!
//! A [`SequenceConfig`] fixes everything one invocation needs: register
//! width, seed and a [`Mode`] carrying the mode-specific parameters. The
//! CLI builds one from its arguments and also serializes it into the JSON
//! report next to the produced sequence.

use serde::Serialize;

use crate::def::{sequence_length, Register};
use crate::engine::check_width;
use crate::error::Result;

/// Output mode of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Mode {
    /// Full register states of a single LFSR.
    Plain { taps: Register },
    /// Bit 0 of two LFSRs XORed, the second one rotated by `offset`.
    Gold {
        taps_a: Register,
        taps_b: Register,
        offset: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequenceConfig {
    /// Register width in bits (0 to 32)
    pub width: u32,
    /// Initial register state, shared by both registers in Gold mode
    pub initial: Register,
    #[serde(flatten)]
    pub mode: Mode,
}

impl SequenceConfig {
    pub fn plain(width: u32, taps: Register, initial: Register) -> Self {
        Self {
            width,
            initial,
            mode: Mode::Plain { taps },
        }
    }

    pub fn gold(
        width: u32,
        taps_a: Register,
        taps_b: Register,
        initial: Register,
        offset: i64,
    ) -> Self {
        Self {
            width,
            initial,
            mode: Mode::Gold {
                taps_a,
                taps_b,
                offset,
            },
        }
    }

    /// Checks the width fits the register word.
    pub fn validate(&self) -> Result<()> {
        check_width(self.width)
    }

    /// Length of the sequence this configuration produces.
    pub fn length(&self) -> Result<usize> {
        self.validate()?;
        Ok(sequence_length(self.width))
    }
}
