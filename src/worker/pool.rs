//! Worker pool management.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver};
use tracing::{debug, error};

use crate::config::ConfigError;
use crate::crypto::{AddressEncoder, KeySource, Keypair, PUBLIC_KEY_LEN, SECRET_KEY_LEN};
use crate::matcher::Pattern;

use super::cpu::{CpuWorker, WorkerExit, WorkerStats};
use super::{CancelToken, SearchError};

/// Result of a successful vanity address search.
#[derive(Debug, Clone)]
pub struct VanityResult {
    /// The matching address
    pub address: String,
    /// The keypair behind the address
    pub keypair: Keypair,
    /// The ID of the worker that found this result
    pub worker_id: usize,
}

impl VanityResult {
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LEN] {
        self.keypair.public_key()
    }

    pub fn private_key(&self) -> &[u8; SECRET_KEY_LEN] {
        self.keypair.private_key()
    }
}

/// Manages a pool of workers for parallel vanity address search.
pub struct WorkerPool {
    /// Number of workers
    num_workers: usize,
    /// The pattern to search for
    pattern: Arc<Pattern>,
    /// Worker thread handles (Option to allow taking during join)
    handles: Option<Vec<JoinHandle<WorkerExit>>>,
    /// Receiving end of the single-slot result channel
    result_rx: Receiver<VanityResult>,
    /// Shared cancellation flag
    cancel: CancelToken,
    /// Shared statistics
    stats: Arc<WorkerStats>,
    /// Start time
    start_time: Instant,
}

impl WorkerPool {
    /// Spawns `num_workers` workers searching for `pattern`.
    ///
    /// Setting `cancel` from outside stops the pool the same way a match does.
    pub fn spawn<K, E>(
        num_workers: usize,
        pattern: Pattern,
        source: Arc<K>,
        encoder: Arc<E>,
        cancel: CancelToken,
    ) -> Result<Self, SearchError>
    where
        K: KeySource + 'static,
        E: AddressEncoder + 'static,
    {
        if num_workers == 0 {
            return Err(ConfigError::NoWorkers.into());
        }

        // Capacity one: only the worker that claims the cancel token ever sends.
        let (result_tx, result_rx) = bounded(1);
        let pattern = Arc::new(pattern);
        let stats = Arc::new(WorkerStats::new());
        let start_time = Instant::now();

        let mut handles = Vec::with_capacity(num_workers);
        for id in 0..num_workers {
            let worker = CpuWorker::new(
                id,
                pattern.clone(),
                source.clone(),
                encoder.clone(),
                result_tx.clone(),
                cancel.clone(),
                stats.clone(),
            );

            let spawned = thread::Builder::new()
                .name(format!("vanity-worker-{}", id))
                .spawn(move || worker.run());

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    cancel.cancel();
                    for handle in handles {
                        let _ = handle.join();
                    }
                    return Err(SearchError::Spawn(e));
                }
            }
        }

        Ok(Self {
            num_workers,
            pattern,
            handles: Some(handles),
            result_rx,
            cancel,
            stats,
            start_time,
        })
    }

    /// Waits for a result with a timeout.
    ///
    /// Returns `Some(result)` if a match is found, `None` if the timeout
    /// expires or every worker is gone.
    pub fn wait_for_result(&self, timeout: Duration) -> Option<VanityResult> {
        self.result_rx.recv_timeout(timeout).ok()
    }

    /// Attempts to receive a result without blocking.
    pub fn try_recv(&self) -> Option<VanityResult> {
        self.result_rx.try_recv().ok()
    }

    /// Signals all workers to stop.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Stops the workers and waits for every one of them to exit.
    ///
    /// Returns each worker's exit state, skipping workers that panicked.
    /// Later calls return an empty list.
    pub fn join(&mut self) -> Vec<WorkerExit> {
        self.cancel();

        let Some(handles) = self.handles.take() else {
            return Vec::new();
        };

        let mut exits = Vec::with_capacity(handles.len());
        for (id, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(exit) => {
                    debug!(worker = id, ?exit, "worker exited");
                    exits.push(exit);
                }
                Err(_) => error!(worker = id, "worker panicked"),
            }
        }
        exits
    }

    /// Returns true once every worker thread has returned.
    pub fn all_exited(&self) -> bool {
        self.handles
            .as_ref()
            .map_or(true, |handles| handles.iter().all(JoinHandle::is_finished))
    }

    /// Returns the number of workers.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Returns the pattern being searched for.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the total attempts across all workers.
    ///
    /// A lower bound while workers are running.
    pub fn total_attempts(&self) -> u64 {
        self.stats.total_attempts()
    }

    /// Returns the total matches seen.
    pub fn total_matches(&self) -> u64 {
        self.stats.total_matches()
    }

    /// Returns the number of skipped key generations.
    pub fn total_key_failures(&self) -> u64 {
        self.stats.total_key_failures()
    }

    /// Returns the elapsed time since the workers were spawned.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the current search rate (attempts per second).
    pub fn attempts_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.total_attempts() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Returns a clone of the cancel token for external use (e.g., signal handlers).
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Returns true if the pool has been signaled to stop.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.join();
    }
}
