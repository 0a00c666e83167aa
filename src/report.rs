//! Final report rendering.

use std::fmt::Write;

use crate::worker::SearchOutcome;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to render private key as JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Renders a private key as a JSON array of byte values, the format Solana
/// wallet tooling imports.
pub fn private_key_json(private_key: &[u8]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(private_key)
}

/// Renders the full report for a finished search.
///
/// Nothing is returned unless every part rendered, so a failure never leaves
/// half a report on stdout.
pub fn render(outcome: &SearchOutcome) -> Result<String, ReportError> {
    let result = &outcome.result;
    let private_key_json = private_key_json(result.private_key())?;

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "Found address: {}", result.address);
    let _ = writeln!(
        out,
        "Attempts: {}, elapsed: {:.2?}",
        outcome.stats.total_attempts, outcome.stats.elapsed
    );
    let _ = writeln!(out, "Public key (Base58): {}", result.keypair.address());
    let _ = writeln!(
        out,
        "Private key (Base58): {}",
        result.keypair.private_key_base58()
    );
    let _ = writeln!(out, "Private key (JSON array): {}", private_key_json);

    Ok(out)
}

/// Formats a count with a K/M/B suffix.
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.2}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::crypto::Keypair;
    use crate::worker::{SearchStats, VanityResult};

    #[test]
    fn test_private_key_json_round_trip() {
        let key: Vec<u8> = (0..=255u8).step_by(4).collect();
        let json = private_key_json(&key).unwrap();
        let parsed: Vec<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn test_private_key_json_layout() {
        assert_eq!(private_key_json(&[1, 255]).unwrap(), "[\n  1,\n  255\n]");
    }

    #[test]
    fn test_render_order() {
        let keypair = Keypair::from_seed([0u8; 32]);
        let address = keypair.address().to_base58();
        let outcome = SearchOutcome {
            result: VanityResult {
                address: address.clone(),
                keypair: keypair.clone(),
                worker_id: 0,
            },
            stats: SearchStats {
                total_attempts: 42,
                elapsed: Duration::from_millis(1500),
            },
        };

        let report = render(&outcome).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], format!("Found address: {}", address));
        assert_eq!(lines[1], "Attempts: 42, elapsed: 1.50s");
        assert_eq!(lines[2], format!("Public key (Base58): {}", address));
        assert_eq!(
            lines[3],
            format!("Private key (Base58): {}", keypair.private_key_base58())
        );
        assert_eq!(lines[4], "Private key (JSON array): [");
        // 64 byte lines plus the closing bracket
        assert_eq!(lines.len(), 5 + 64 + 1);
        assert_eq!(*lines.last().unwrap(), "]");

        let json_start = report.find('[').unwrap();
        let parsed: Vec<u8> = serde_json::from_str(report[json_start..].trim()).unwrap();
        assert_eq!(parsed, keypair.private_key().to_vec());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.50K");
        assert_eq!(format_number(2_000_000), "2.00M");
        assert_eq!(format_number(3_250_000_000), "3.25B");
    }
}
