//! CPU-based worker for vanity address search.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::{Sender, TrySendError};
use tracing::{debug, warn};

use crate::crypto::{AddressEncoder, KeySource};
use crate::matcher::Pattern;

use super::{CancelToken, VanityResult};

/// Counters shared by every worker in a pool.
#[derive(Debug, Default)]
pub struct WorkerStats {
    /// Loop iterations started, including failed key generations
    pub attempts: AtomicU64,
    /// Matching addresses seen, including ones that lost the publish race
    pub matches_found: AtomicU64,
    /// Key generations that failed and were skipped
    pub key_failures: AtomicU64,
}

impl WorkerStats {
    /// Creates new worker stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total attempts.
    ///
    /// Only exact once every worker has been joined.
    pub fn total_attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Returns the total matches found.
    pub fn total_matches(&self) -> u64 {
        self.matches_found.load(Ordering::Relaxed)
    }

    /// Returns the number of failed key generations.
    pub fn total_key_failures(&self) -> u64 {
        self.key_failures.load(Ordering::Relaxed)
    }
}

/// How a worker's loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    /// Published the search result
    Found,
    /// Found a match after another worker (or the operator) had cancelled
    Lost,
    /// Saw the cancellation before finding anything
    Cancelled,
}

/// A CPU worker that generates and tests keypairs.
pub struct CpuWorker<K, E> {
    /// Worker ID
    id: usize,
    /// The pattern to match against
    pattern: Arc<Pattern>,
    /// Where keypairs come from
    source: Arc<K>,
    /// Public key to address
    encoder: Arc<E>,
    /// Single-slot result channel
    result_tx: Sender<VanityResult>,
    /// Shared cancellation flag
    cancel: CancelToken,
    /// Shared statistics
    stats: Arc<WorkerStats>,
}

impl<K: KeySource, E: AddressEncoder> CpuWorker<K, E> {
    /// Creates a new CPU worker.
    pub fn new(
        id: usize,
        pattern: Arc<Pattern>,
        source: Arc<K>,
        encoder: Arc<E>,
        result_tx: Sender<VanityResult>,
        cancel: CancelToken,
        stats: Arc<WorkerStats>,
    ) -> Self {
        Self {
            id,
            pattern,
            source,
            encoder,
            result_tx,
            cancel,
            stats,
        }
    }

    /// Runs the worker loop.
    ///
    /// Generates keypairs and tests them against the pattern until either a
    /// match is found or the cancel token is set. The token is checked once
    /// per iteration, before any work is done.
    pub fn run(&self) -> WorkerExit {
        loop {
            if self.cancel.is_cancelled() {
                return WorkerExit::Cancelled;
            }

            self.stats.attempts.fetch_add(1, Ordering::Relaxed);

            let keypair = match self.source.generate() {
                Ok(keypair) => keypair,
                Err(e) => {
                    self.stats.key_failures.fetch_add(1, Ordering::Relaxed);
                    debug!(worker = self.id, error = %e, "key generation failed, skipping");
                    continue;
                }
            };

            let address = self.encoder.encode(keypair.public_key());
            if !self.pattern.matches(&address).is_match() {
                continue;
            }

            self.stats.matches_found.fetch_add(1, Ordering::Relaxed);

            return self.publish(VanityResult {
                address,
                keypair,
                worker_id: self.id,
            });
        }
    }

    /// Hands a match to the coordinator if this worker is the first to cancel.
    ///
    /// Only the claimant ever sends, so the capacity-one slot is always free
    /// and `try_send` cannot block.
    fn publish(&self, result: VanityResult) -> WorkerExit {
        if !self.cancel.cancel() {
            debug!(worker = self.id, address = %result.address, "match discarded, search already over");
            return WorkerExit::Lost;
        }

        match self.result_tx.try_send(result) {
            Ok(()) => WorkerExit::Found,
            Err(TrySendError::Full(result)) => {
                warn!(worker = self.id, address = %result.address, "result slot unexpectedly full");
                WorkerExit::Lost
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!(worker = self.id, "coordinator gone, dropping result");
                WorkerExit::Lost
            }
        }
    }

    /// Returns the worker ID.
    pub fn id(&self) -> usize {
        self.id
    }
}
