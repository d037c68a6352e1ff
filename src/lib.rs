//! Choice Canvas - Weighted Decision-Matrix Engine
//!
//! This crate implements the scoring, reconciliation, and layout-geometry
//! kernel behind an interactive decision board: candidate alternatives are
//! evaluated against weighted factors, ranked by a normalized weighted-additive
//! decision (WADD) score, and laid out as proportionally sized rows and columns
//! for direct-manipulation editing.

pub mod application;
pub mod config;
pub mod domain;
