//! Core definitions and constants.
//!
//! Register state lives in a `u32` word, which bounds the register width.
//! Sequence lengths are `2^width - 1`, the period of a maximal-length
//! `width`-bit LFSR.

/// Machine word holding the register state.
pub type Register = u32;

/// A single Gold code output bit (0 or 1).
pub type Chip = u8;

/// Largest supported register width, in bits.
pub const MAX_WIDTH: u32 = Register::BITS;

/// Widths above this produce sequences large enough to be worth a warning.
pub const LARGE_WIDTH: u32 = 24;

/// Mask covering the low `width` bits.
///
/// `width` must not exceed [`MAX_WIDTH`]; width 32 yields `u32::MAX` and
/// width 0 yields 0.
pub fn output_mask(width: u32) -> Register {
    ((1u64 << width) - 1) as Register
}

/// Output length of both plain and Gold sequences: `2^width - 1`.
pub fn sequence_length(width: u32) -> usize {
    ((1u64 << width) - 1) as usize
}
