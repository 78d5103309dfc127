//! Sequence Composer.
//!
//! Builds the final output sequence from one Register Engine run (plain
//! mode) or two (Gold mode). Both modes always produce `2^width - 1`
//! elements.
//!
//! # Gold codes
//! Both registers start from the same seed. Only bit 0 of each recorded
//! state is kept, and output `i` is `a[i] ^ b[(i + offset) mod length]`.
//! The offset is reduced with Euclidean modulo, so any `i64` is accepted
//! and `-1` selects the same code as `length - 1`.
//!
//! Low cross-correlation across a code family only holds when the two tap
//! masks form a preferred pair (see [`crate::taps::PREFERRED_PAIRS`]). That
//! is the caller's concern and is not checked here.

use log::{debug, warn};
use serde::Serialize;

use crate::config::{Mode, SequenceConfig};
use crate::def::{sequence_length, Chip, Register, LARGE_WIDTH};
use crate::engine::{advance, check_width};
use crate::error::Result;

/// Output of a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Sequence {
    Plain(Vec<Register>),
    Gold(Vec<Chip>),
}

impl Sequence {
    pub fn len(&self) -> usize {
        match self {
            Sequence::Plain(states) => states.len(),
            Sequence::Gold(chips) => chips.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements widened to `u64`, in order, without copying the buffer.
    pub fn values(&self) -> Box<dyn Iterator<Item = u64> + '_> {
        match self {
            Sequence::Plain(states) => Box::new(states.iter().map(|&s| s as u64)),
            Sequence::Gold(chips) => Box::new(chips.iter().map(|&c| c as u64)),
        }
    }
}

/// Runs the mode selected by `config`.
pub fn generate(config: &SequenceConfig) -> Result<Sequence> {
    match config.mode {
        Mode::Plain { taps } => {
            generate_plain(config.width, taps, config.initial).map(Sequence::Plain)
        }
        Mode::Gold {
            taps_a,
            taps_b,
            offset,
        } => generate_gold(config.width, taps_a, taps_b, config.initial, offset)
            .map(Sequence::Gold),
    }
}

/// Full masked register states of one LFSR, `2^width - 1` of them.
pub fn generate_plain(width: u32, taps: Register, initial: Register) -> Result<Vec<Register>> {
    let length = checked_length(width, taps)?;
    debug!(
        "plain: width={} taps={:#x} initial={:#x} length={}",
        width, taps, initial, length
    );
    advance(width, taps, initial, length)
}

/// Gold code of `2^width - 1` bits from two LFSRs sharing `initial`.
pub fn generate_gold(
    width: u32,
    taps_a: Register,
    taps_b: Register,
    initial: Register,
    offset: i64,
) -> Result<Vec<Chip>> {
    let length = checked_length(width, taps_a)?;
    if taps_b == 0 && width > 0 {
        warn!("second tap mask is zero; its sequence decays to all zeros");
    }
    if length == 0 {
        return Ok(Vec::new());
    }
    let shift = normalize_offset(offset, length);
    debug!(
        "gold: width={} taps_a={:#x} taps_b={:#x} initial={:#x} offset={} (normalized {})",
        width, taps_a, taps_b, initial, offset, shift
    );

    // The two runs are independent; only the combination needs both.
    let (seq_a, seq_b) = rayon::join(
        || advance(width, taps_a, initial, length),
        || advance(width, taps_b, initial, length),
    );
    let bits_a = low_bits(&seq_a?);
    let bits_b = low_bits(&seq_b?);

    let chips = (0..length)
        .map(|i| bits_a[i] ^ bits_b[(i + shift) % length])
        .collect();
    Ok(chips)
}

/// Periodic bipolar correlation of two bit sequences at a cyclic `shift`.
///
/// Positions where the bits agree count +1 and positions where they differ
/// count -1, comparing `a[i]` with `b[(i + shift) mod len]`. Sequences of
/// unequal length are compared over the shorter one.
pub fn cross_correlation(a: &[Chip], b: &[Chip], shift: usize) -> i64 {
    let len = a.len().min(b.len());
    if len == 0 {
        return 0;
    }
    (0..len)
        .map(|i| {
            if (a[i] & 1) == (b[(i + shift) % len] & 1) {
                1
            } else {
                -1
            }
        })
        .sum()
}

/// Reduces any signed offset into `[0, length)`. `length` must be non-zero.
fn normalize_offset(offset: i64, length: usize) -> usize {
    offset.rem_euclid(length as i64) as usize
}

fn low_bits(states: &[Register]) -> Vec<Chip> {
    states.iter().map(|&s| (s & 1) as Chip).collect()
}

fn checked_length(width: u32, taps: Register) -> Result<usize> {
    check_width(width)?;
    if taps == 0 && width > 0 {
        warn!("tap mask is zero; the sequence decays to all zeros");
    }
    if width > LARGE_WIDTH {
        warn!(
            "width {} produces {} elements per sequence",
            width,
            sequence_length(width)
        );
    }
    Ok(sequence_length(width))
}
