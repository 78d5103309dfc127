//! Galois Linear Feedback Shift Register.
//!
//! In Galois form the register shifts right by one each step, and when the
//! bit shifted out was 1 the whole tap mask is XORed into the register. The
//! feedback is applied after the shift, keyed on the pre-shift LSB.
//!
//! For terms and maximal tap tables, see
//! <https://users.ece.cmu.edu/~koopman/lfsr/>.

use crate::def::{output_mask, Register, MAX_WIDTH};
use crate::error::{LfsrError, Result};

/// A Galois LFSR of 1 to 32 bits holding its state in a `u32` word.
///
/// Taps and seed are masked to the register width on construction, so the
/// state never exceeds `2^width - 1`. Iterating yields the current state
/// and then advances, which makes `lfsr.take(n)` the first `n` states of
/// the sequence starting at the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaloisLfsr {
    /// Current state of the LFSR
    state: Register,
    /// Tap positions encoded as a bit mask
    taps: Register,
    /// Register width in bits
    width: u32,
    /// Mask of the low `width` bits
    mask: Register,
}

impl GaloisLfsr {
    /// Creates a new Galois LFSR.
    ///
    /// # Arguments
    /// * `width` - Number of bits in the register (0 to 32)
    /// * `taps` - Feedback tap mask; bits above `width` are ignored
    /// * `seed` - Initial state; bits above `width` are ignored
    ///
    /// # Errors
    /// [`LfsrError::InvalidWidth`] if `width` exceeds 32.
    ///
    /// A zero width is accepted and yields a register stuck at zero. A zero
    /// seed likewise stays at zero forever, whatever the taps.
    pub fn new(width: u32, taps: Register, seed: Register) -> Result<Self> {
        check_width(width)?;
        let mask = output_mask(width);
        Ok(Self {
            state: seed & mask,
            taps: taps & mask,
            width,
            mask,
        })
    }

    /// Advances the LFSR by one step and returns the new state.
    #[inline]
    pub fn step(&mut self) -> Register {
        let lsb = self.state & 1;
        self.state >>= 1;
        if lsb == 1 {
            self.state ^= self.taps;
        }
        self.state
    }

    /// Gets the current state of the LFSR.
    pub fn state(&self) -> Register {
        self.state & self.mask
    }

    /// Gets the (masked) feedback taps.
    pub fn taps(&self) -> Register {
        self.taps
    }

    /// Gets the register width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Longest possible period for this width: `2^width - 1`.
    pub fn max_period(&self) -> u64 {
        (1u64 << self.width) - 1
    }

    /// Restarts the register from `seed`.
    pub fn reset(&mut self, seed: Register) {
        self.state = seed & self.mask;
    }
}

impl Iterator for GaloisLfsr {
    type Item = Register;

    fn next(&mut self) -> Option<Register> {
        let out = self.state & self.mask;
        self.step();
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

pub(crate) fn check_width(width: u32) -> Result<()> {
    if width > MAX_WIDTH {
        return Err(LfsrError::InvalidWidth {
            width,
            max: MAX_WIDTH,
        });
    }
    Ok(())
}
