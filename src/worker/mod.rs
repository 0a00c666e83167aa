//! Worker pool for parallel vanity address search.
//!
//! This module provides:
//! - Multi-threaded CPU workers
//! - First-match-wins cancellation and single-slot result handoff
//! - Progress tracking and the search coordinator

mod cancel;
mod cpu;
mod pool;
mod search;

pub use cancel::CancelToken;
pub use cpu::{CpuWorker, WorkerExit, WorkerStats};
pub use pool::{VanityResult, WorkerPool};
pub use search::{search, SearchError, SearchOutcome, SearchStats};
