//! Built-in tap masks.
//!
//! Masks use the Galois right-shift convention of [`crate::engine`]: bit
//! `k` set means the register bit `k` is flipped when a 1 is shifted out.
//! Every entry of [`MAXIMAL_TAPS`] produces a maximal-length sequence and
//! every pair in [`PREFERRED_PAIRS`] has the three-valued cross-correlation
//! that makes it a Gold code generator.

use crate::def::Register;
use crate::engine::check_width;
use crate::error::{LfsrError, Result};

/// Maximal-length taps indexed by register width, for widths 1 to 32.
pub const MAXIMAL_TAPS: [(u32, Register); 32] = [
    (1, 0x1),
    (2, 0x3),
    (3, 0x6),
    (4, 0xC),
    (5, 0x14),
    (6, 0x30),
    (7, 0x60),
    (8, 0xB8),
    (9, 0x110),
    (10, 0x240),
    (11, 0x500),
    (12, 0xE08),
    (13, 0x1C80),
    (14, 0x3802),
    (15, 0x6000),
    (16, 0xD008),
    (17, 0x12000),
    (18, 0x20400),
    (19, 0x72000),
    (20, 0x90000),
    (21, 0x140000),
    (22, 0x300000),
    (23, 0x420000),
    (24, 0xE10000),
    (25, 0x1200000),
    (26, 0x3880000),
    (27, 0x7200000),
    (28, 0x9000000),
    (29, 0x14000000),
    (30, 0x32800000),
    (31, 0x48000000),
    (32, 0xA3000000),
];

/// Preferred pairs of maximal taps. Widths divisible by 4 have none.
pub const PREFERRED_PAIRS: [(u32, Register, Register); 5] = [
    (5, 0x14, 0x17),
    (6, 0x30, 0x36),
    (7, 0x60, 0x44),
    (9, 0x110, 0x119),
    (10, 0x240, 0x279),
];

/// Looks up maximal-length taps for `width`.
pub fn maximal_taps(width: u32) -> Result<Register> {
    check_width(width)?;
    MAXIMAL_TAPS
        .iter()
        .find(|(w, _)| *w == width)
        .map(|(_, taps)| *taps)
        .ok_or(LfsrError::UnknownTaps(width))
}

/// Looks up a Gold code preferred pair for `width`.
pub fn preferred_pair(width: u32) -> Result<(Register, Register)> {
    check_width(width)?;
    PREFERRED_PAIRS
        .iter()
        .find(|(w, _, _)| *w == width)
        .map(|(_, a, b)| (*a, *b))
        .ok_or(LfsrError::UnknownTaps(width))
}

/// Three-valued cross-correlation bound t(n) of a degree-`width` Gold family.
pub fn cross_correlation_bound(width: u32) -> i64 {
    if width % 2 == 1 {
        (1i64 << ((width + 1) / 2)) + 1
    } else {
        (1i64 << ((width + 2) / 2)) + 1
    }
}
