//! Runtime configuration for the vanity address generator.

use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::crypto::{base58_case_variants, MAX_ADDRESS_LEN};
use crate::matcher::Pattern;

/// Solana Vanity Address Generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Required address prefix
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Required address suffix
    #[arg(short = 's', long, visible_alias = "suffix")]
    pub postfix: Option<String>,

    /// Case sensitive matching
    #[arg(short = 'c', long, default_value_t = true, action = ArgAction::Set)]
    pub case_sensitive: bool,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Progress report interval in seconds
    #[arg(short = 'r', long, default_value = "5")]
    pub report_interval: u64,
}

impl Config {
    /// Returns the number of workers, defaulting to CPU count
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [("prefix", &self.prefix), ("postfix", &self.postfix)];

        if fields
            .iter()
            .all(|(_, value)| value.as_deref().unwrap_or("").is_empty())
        {
            return Err(ConfigError::MissingPattern);
        }

        for (field, value) in fields {
            let Some(value) = value.as_deref() else {
                continue;
            };

            if let Some(character) = value
                .chars()
                .find(|&c| base58_case_variants(c, self.case_sensitive) == 0)
            {
                return Err(ConfigError::InvalidCharacter { field, character });
            }

            let len = value.chars().count();
            if len > MAX_ADDRESS_LEN {
                return Err(ConfigError::PatternTooLong { field, len });
            }
        }

        if self.worker_count() == 0 {
            return Err(ConfigError::NoWorkers);
        }

        if self.report_interval == 0 {
            return Err(ConfigError::InvalidReportInterval);
        }

        Ok(())
    }

    /// Validates and converts the command line into a search configuration.
    pub fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        self.validate()?;

        let pattern = Pattern::new(
            self.prefix.as_deref(),
            self.postfix.as_deref(),
            self.case_sensitive,
        )?;

        SearchConfig::new(
            pattern,
            self.worker_count(),
            Duration::from_secs(self.report_interval),
        )
    }
}

/// Validated, read-only configuration for one search run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// The pattern addresses must satisfy
    pub pattern: Pattern,
    /// Number of worker threads
    pub workers: usize,
    /// How often the coordinator logs progress
    pub report_interval: Duration,
}

impl SearchConfig {
    pub fn new(
        pattern: Pattern,
        workers: usize,
        report_interval: Duration,
    ) -> Result<Self, ConfigError> {
        if workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if report_interval.is_zero() {
            return Err(ConfigError::InvalidReportInterval);
        }

        Ok(Self {
            pattern,
            workers,
            report_interval,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("at least one of --prefix or --postfix must be given")]
    MissingPattern,

    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("report interval must be at least 1 second")]
    InvalidReportInterval,

    #[error("{field} contains '{character}', which never appears in a Base58 address")]
    InvalidCharacter {
        field: &'static str,
        character: char,
    },

    #[error("{field} is {len} characters long, addresses have at most {}", MAX_ADDRESS_LEN)]
    PatternTooLong { field: &'static str, len: usize },
}
