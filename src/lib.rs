//! # sol_vanity
//!
//! High-performance Solana vanity address generator.
//!
//! ## Architecture
//!
//! - `crypto`: ed25519 key generation and Base58 address derivation
//! - `matcher`: Prefix/suffix pattern matching
//! - `worker`: Parallel search, cancellation and result handoff
//! - `config`: Runtime configuration
//! - `report`: Final report rendering
//! - `logging`: Diagnostic logging setup

pub mod config;
pub mod crypto;
pub mod logging;
pub mod matcher;
pub mod report;
pub mod worker;

pub use config::{Config, ConfigError, SearchConfig};
pub use crypto::{
    Address, AddressEncoder, Base58Encoder, KeyGenerationError, KeySource, Keypair,
    ThreadRngKeySource,
};
pub use matcher::{MatchResult, Pattern};
pub use report::ReportError;
pub use worker::{
    search, CancelToken, SearchError, SearchOutcome, SearchStats, VanityResult, WorkerPool,
};
