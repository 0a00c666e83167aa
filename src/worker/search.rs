//! Search coordinator: runs a pool until the first match and reports it.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::{ConfigError, SearchConfig};
use crate::crypto::{AddressEncoder, KeySource};
use crate::report::format_number;

use super::{CancelToken, VanityResult, WorkerPool};

/// Telemetry for one finished search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Attempts across all workers, read after every worker exited
    pub total_attempts: u64,
    /// Wall-clock time from spawning the workers to the last one exiting
    pub elapsed: Duration,
}

impl SearchStats {
    pub fn attempts_per_second(&self) -> f64 {
        let elapsed = self.elapsed.as_secs_f64();
        if elapsed > 0.0 {
            self.total_attempts as f64 / elapsed
        } else {
            0.0
        }
    }
}

/// The winning result together with the run's telemetry.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub result: VanityResult,
    pub stats: SearchStats,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("search interrupted after {attempts} attempts")]
    Interrupted { attempts: u64 },

    #[error("all workers exited without finding a match")]
    WorkersExited,
}

/// Searches until some worker finds an address matching `config.pattern`.
///
/// Blocks until the first result arrives, then cancels and joins every
/// worker before returning, so the reported attempt count is final. There is
/// no attempt limit; the only other way out is `cancel` being set by the
/// caller, which yields [`SearchError::Interrupted`].
pub fn search<K, E>(
    config: &SearchConfig,
    source: Arc<K>,
    encoder: Arc<E>,
    cancel: CancelToken,
) -> Result<SearchOutcome, SearchError>
where
    K: KeySource + 'static,
    E: AddressEncoder + 'static,
{
    let mut pool = WorkerPool::spawn(
        config.workers,
        config.pattern.clone(),
        source,
        encoder,
        cancel,
    )?;

    info!(
        workers = pool.num_workers(),
        pattern = %pool.pattern(),
        "search started"
    );

    let (mut result, interrupted) = loop {
        if let Some(result) = pool.wait_for_result(config.report_interval) {
            break (Some(result), false);
        }
        if pool.is_cancelled() {
            break (None, true);
        }
        if pool.all_exited() {
            break (None, false);
        }

        let rate = format!("{}/s", format_number(pool.attempts_per_second() as u64));
        info!(
            elapsed_secs = pool.elapsed().as_secs(),
            attempts = %format_number(pool.total_attempts()),
            rate = %rate,
            "searching"
        );
    };

    pool.join();

    // The winner sets the token before handing off its result, so the slot
    // can only be trusted to be empty once every worker is joined.
    if result.is_none() {
        result = pool.try_recv();
    }

    let stats = SearchStats {
        total_attempts: pool.total_attempts(),
        elapsed: pool.elapsed(),
    };

    match result {
        Some(result) => {
            let rate = format!("{}/s", format_number(stats.attempts_per_second() as u64));
            info!(
                worker = result.worker_id,
                attempts = stats.total_attempts,
                elapsed_ms = stats.elapsed.as_millis() as u64,
                rate = %rate,
                key_failures = pool.total_key_failures(),
                "match found"
            );
            Ok(SearchOutcome { result, stats })
        }
        None if interrupted => Err(SearchError::Interrupted {
            attempts: stats.total_attempts,
        }),
        None => Err(SearchError::WorkersExited),
    }
}
