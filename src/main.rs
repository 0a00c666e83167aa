//! Solana Vanity Address Generator CLI
//!
//! Usage:
//!   sol_vanity -p Sol               # Find address starting with "Sol"
//!   sol_vanity -s pump              # Find address ending with "pump"
//!   sol_vanity -p ab -s cd -c false # Both, ignoring case

use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use sol_vanity::report::{self, format_number};
use sol_vanity::{
    logging, search, Base58Encoder, CancelToken, Config, SearchError, ThreadRngKeySource,
};

fn main() {
    let config = Config::parse();
    logging::init();

    // Validate configuration
    let search_config = match config.search_config() {
        Ok(search_config) => search_config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    let pattern = &search_config.pattern;
    info!(
        pattern = %pattern,
        difficulty = %pattern.difficulty_description(),
        expected_attempts = %format_number(pattern.estimated_difficulty()),
        workers = search_config.workers,
        "Solana vanity address generator"
    );

    let cancel = CancelToken::new();
    ctrlc_handler(cancel.clone());

    let outcome = match search(
        &search_config,
        Arc::new(ThreadRngKeySource),
        Arc::new(Base58Encoder),
        cancel,
    ) {
        Ok(outcome) => outcome,
        Err(SearchError::Interrupted { attempts }) => {
            eprintln!("Stopped by user after {} attempts.", format_number(attempts));
            process::exit(130);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match report::render(&outcome) {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn ctrlc_handler(cancel: CancelToken) {
    if let Err(e) = ctrlc::set_handler(move || {
        cancel.cancel();
    }) {
        warn!(error = %e, "could not install Ctrl-C handler");
    }
}
