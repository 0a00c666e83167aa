//! Solana address representation and utilities.

use std::fmt;

use super::PUBLIC_KEY_LEN;

/// The Base58 alphabet used by Solana (Bitcoin ordering).
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Longest Base58 rendering of a 32-byte public key.
pub const MAX_ADDRESS_LEN: usize = 44;

/// Maps a public key to its display address.
///
/// Must be pure: equal bytes always give the same string.
pub trait AddressEncoder: Send + Sync {
    fn encode(&self, public_key: &[u8; PUBLIC_KEY_LEN]) -> String;
}

/// The canonical Solana encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base58Encoder;

impl AddressEncoder for Base58Encoder {
    #[inline]
    fn encode(&self, public_key: &[u8; PUBLIC_KEY_LEN]) -> String {
        Address::from_bytes(*public_key).to_base58()
    }
}

/// A Solana address (an ed25519 public key).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; PUBLIC_KEY_LEN]);

impl Address {
    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the address as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    /// Returns the Base58 string form.
    #[inline]
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

/// Returns true if `c` is part of the Base58 alphabet.
pub fn is_base58_char(c: char) -> bool {
    BASE58_ALPHABET.contains(c)
}

/// Counts the alphabet characters that `c` matches under the given case policy.
///
/// Zero means the character can never appear in an address.
pub fn base58_case_variants(c: char, case_sensitive: bool) -> usize {
    if case_sensitive {
        return usize::from(is_base58_char(c));
    }
    BASE58_ALPHABET
        .chars()
        .filter(|a| a.eq_ignore_ascii_case(&c))
        .count()
}
