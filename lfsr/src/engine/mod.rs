//! Register Engine.
//!
//! Runs a single Galois LFSR and records the masked register state at each
//! step. [`advance`] is the eager form; [`GaloisLfsr`] is also an iterator
//! for callers that want the sequence lazily.

mod galois;

pub use galois::GaloisLfsr;
pub(crate) use galois::check_width;

use crate::def::Register;
use crate::error::Result;

/// Runs a Galois LFSR for `steps` steps and returns every recorded state.
///
/// Element `i` is the register contents (masked to `width` bits) before the
/// `i`-th shift, so the first element is the masked `initial` value.
///
/// # Errors
/// [`crate::LfsrError::InvalidWidth`] if `width` exceeds 32. Degenerate
/// taps are not an error; they just give a short or all-zero sequence.
pub fn advance(
    width: u32,
    taps: Register,
    initial: Register,
    steps: usize,
) -> Result<Vec<Register>> {
    let lfsr = GaloisLfsr::new(width, taps, initial)?;
    Ok(lfsr.take(steps).collect())
}

/// Number of steps until the register first returns to `initial`.
///
/// Returns `None` when `initial` is never revisited within `2^width` steps,
/// which happens for non-invertible tap masks (top tap bit clear).
pub fn find_period(width: u32, taps: Register, initial: Register) -> Result<Option<u64>> {
    let mut lfsr = GaloisLfsr::new(width, taps, initial)?;
    let start = lfsr.state();
    let limit = 1u64 << width;
    for count in 1..=limit {
        if lfsr.step() == start {
            return Ok(Some(count));
        }
    }
    Ok(None)
}

/// Whether `taps` yields a maximal-length sequence: starting from state 1,
/// all `2^width - 1` non-zero states are visited before repeating.
pub fn is_maximal(width: u32, taps: Register) -> Result<bool> {
    if width == 0 {
        check_width(width)?;
        return Ok(false);
    }
    let period = find_period(width, taps, 1)?;
    Ok(period == Some((1u64 << width) - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LfsrError;

    #[test]
    fn test_advance_width_4() {
        let seq = advance(4, 0x9, 0x1, 16).unwrap();
        assert_eq!(
            seq,
            vec![1, 9, 13, 15, 14, 7, 10, 5, 11, 12, 6, 3, 8, 4, 2, 1]
        );
    }

    #[test]
    fn test_advance_zero_steps() {
        assert!(advance(4, 0x9, 0x1, 0).unwrap().is_empty());
    }

    #[test]
    fn test_advance_zero_taps_drains() {
        let seq = advance(4, 0x0, 0xF, 6).unwrap();
        assert_eq!(seq, vec![15, 7, 3, 1, 0, 0]);
    }

    #[test]
    fn test_advance_zero_width() {
        let seq = advance(0, 0x9, 0x1, 3).unwrap();
        assert_eq!(seq, vec![0, 0, 0]);
    }

    #[test]
    fn test_advance_rejects_wide_register() {
        assert!(matches!(
            advance(64, 0x9, 0x1, 3),
            Err(LfsrError::InvalidWidth { width: 64, max: 32 })
        ));
    }

    #[test]
    fn test_advance_matches_iterator() {
        let eager = advance(7, 0x60, 0x5, 200).unwrap();
        let lazy: Vec<u32> = GaloisLfsr::new(7, 0x60, 0x5)
            .unwrap()
            .take(200)
            .collect();
        assert_eq!(eager, lazy);
    }

    #[test]
    fn test_find_period() {
        assert_eq!(find_period(4, 0x9, 0x1).unwrap(), Some(15));
        assert_eq!(find_period(5, 0x14, 0x3).unwrap(), Some(31));
        // zero taps never come back to a non-zero seed
        assert_eq!(find_period(4, 0x0, 0x1).unwrap(), None);
        // zero is a fixed point
        assert_eq!(find_period(4, 0x9, 0x0).unwrap(), Some(1));
    }

    #[test]
    fn test_is_maximal() {
        assert!(is_maximal(1, 0x1).unwrap());
        assert!(is_maximal(4, 0x9).unwrap());
        assert!(is_maximal(5, 0x14).unwrap());
        assert!(is_maximal(5, 0x17).unwrap());
        assert!(is_maximal(16, 0xB400).unwrap());
        // x^4 + x^3 + x^2 + x + 1 has period 5
        assert!(!is_maximal(4, 0xF).unwrap());
        assert!(!is_maximal(0, 0x0).unwrap());
        assert!(is_maximal(33, 0x1).is_err());
    }
}
