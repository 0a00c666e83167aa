//! Pattern matching implementation.

use std::fmt;

use crate::config::ConfigError;
use crate::crypto::{base58_case_variants, BASE58_ALPHABET};

/// Result of a pattern match operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Full match found
    Match,
    /// No match
    NoMatch,
}

impl MatchResult {
    #[inline]
    pub fn is_match(self) -> bool {
        matches!(self, MatchResult::Match)
    }
}

/// A compiled prefix/suffix pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Required prefix (normalized)
    prefix: Option<String>,
    /// Required suffix (normalized)
    suffix: Option<String>,
    /// Whether matching is case sensitive
    case_sensitive: bool,
}

impl Pattern {
    /// Creates a new pattern. Empty strings count as absent.
    ///
    /// Fails if neither a prefix nor a suffix remains.
    pub fn new(
        prefix: Option<&str>,
        suffix: Option<&str>,
        case_sensitive: bool,
    ) -> Result<Self, ConfigError> {
        let normalize = |s: Option<&str>| {
            s.filter(|s| !s.is_empty()).map(|s| {
                if case_sensitive {
                    s.to_owned()
                } else {
                    s.to_lowercase()
                }
            })
        };

        let prefix = normalize(prefix);
        let suffix = normalize(suffix);
        if prefix.is_none() && suffix.is_none() {
            return Err(ConfigError::MissingPattern);
        }

        Ok(Self {
            prefix,
            suffix,
            case_sensitive,
        })
    }

    /// Returns the prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Returns the suffix, if any.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Returns whether matching is case sensitive.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Matches an address against this pattern.
    #[inline]
    pub fn matches(&self, address: &str) -> MatchResult {
        let folded;
        let address = if self.case_sensitive {
            address
        } else {
            folded = address.to_lowercase();
            folded.as_str()
        };

        if let Some(prefix) = &self.prefix {
            if !address.starts_with(prefix.as_str()) {
                return MatchResult::NoMatch;
            }
        }
        if let Some(suffix) = &self.suffix {
            if !address.ends_with(suffix.as_str()) {
                return MatchResult::NoMatch;
            }
        }

        MatchResult::Match
    }

    /// Returns the estimated number of attempts to find a match.
    ///
    /// Each pattern character that `k` alphabet characters satisfy contributes
    /// a factor of `58 / k`. A character no address can contain makes the
    /// estimate `u64::MAX`.
    pub fn estimated_difficulty(&self) -> u64 {
        let alphabet = BASE58_ALPHABET.len() as f64;
        let mut expected = 1.0f64;

        for c in self.chars() {
            let variants = base58_case_variants(c, self.case_sensitive);
            if variants == 0 {
                return u64::MAX;
            }
            expected *= alphabet / variants as f64;
        }

        if expected >= u64::MAX as f64 {
            u64::MAX
        } else {
            expected.round() as u64
        }
    }

    /// Returns a human-readable difficulty estimate.
    pub fn difficulty_description(&self) -> String {
        let diff = self.estimated_difficulty();
        match diff {
            0..=10_000 => "Very Easy (< 1 second)".into(),
            10_001..=10_000_000 => "Easy (seconds)".into(),
            10_000_001..=1_000_000_000 => "Medium (minutes)".into(),
            1_000_000_001..=100_000_000_000 => "Hard (hours)".into(),
            _ => "Very Hard (days or more)".into(),
        }
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.prefix
            .iter()
            .chain(self.suffix.iter())
            .flat_map(|s| s.chars())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.prefix, &self.suffix) {
            (Some(p), Some(s)) => write!(f, "{}...{}", p, s)?,
            (Some(p), None) => write!(f, "{}...", p)?,
            (None, Some(s)) => write!(f, "...{}", s)?,
            (None, None) => {}
        }
        if !self.case_sensitive {
            write!(f, " (case-insensitive)")?;
        }
        Ok(())
    }
}
