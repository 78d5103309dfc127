//! Galois-form Linear Feedback Shift Registers and Gold codes.
//!
//! # Overview
//! The crate is split into two strictly layered components:
//!
//! - [`engine`]: the Register Engine. Advances a single Galois LFSR for a
//!   number of steps and records the masked register state at every step,
//!   either eagerly ([`engine::advance`]) or lazily through the
//!   [`engine::GaloisLfsr`] iterator.
//! - [`composer`]: the Sequence Composer. Runs the engine once for a plain
//!   maximal-length sequence, or twice for a Gold code, where bit 0 of both
//!   runs is XOR-combined at a cyclic offset.
//!
//! Supporting modules hold the constants ([`def`]), error type ([`error`]),
//! run configuration ([`config`]) and built-in tap tables ([`taps`]).
//!
//! # Example Usage
//! ```
//! use lfsr::{generate_gold, generate_plain};
//!
//! // 4-bit register, taps 0x9, seed 0x01: visits all 15 non-zero states.
//! let plain = generate_plain(4, 0x9, 0x01).unwrap();
//! assert_eq!(plain.len(), 15);
//!
//! // Gold code from the degree-5 preferred pair, code offset 1.
//! let gold = generate_gold(5, 0x14, 0x17, 0x01, 1).unwrap();
//! assert_eq!(gold.len(), 31);
//! assert!(gold.iter().all(|&b| b <= 1));
//! ```

pub mod composer;
pub mod config;
pub mod def;
pub mod engine;
pub mod error;
pub mod taps;

pub use composer::{cross_correlation, generate, generate_gold, generate_plain, Sequence};
pub use config::{Mode, SequenceConfig};
pub use engine::{advance, GaloisLfsr};
pub use error::{LfsrError, Result};
