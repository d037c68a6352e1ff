//! Analysis Module - Pure domain services for decision scoring.
//!
//! This module contains stateless functions that operate on domain objects
//! to rank the alternatives on a board.
//!
//! # Components
//!
//! - `WaddCalculator` - Weighted-additive (WADD) score computation
//! - `build_rank_lookup` - Descending-score rank assignment
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod ranking;
mod wadd;

pub use ranking::{build_rank_lookup, Rank};
pub use wadd::WaddCalculator;
