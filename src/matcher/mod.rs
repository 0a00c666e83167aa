//! Pattern matching for Solana addresses.
//!
//! A pattern carries an optional prefix and an optional suffix (at least one
//! of them set), matched case-sensitively or with case folding.

mod pattern;

pub use pattern::{MatchResult, Pattern};
