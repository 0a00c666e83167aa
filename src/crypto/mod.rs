//! Cryptographic operations for Solana key and address generation.
//!
//! This module provides:
//! - Secure random ed25519 key generation
//! - Base58 address derivation
//! - Keypair management

mod address;
mod keypair;

#[cfg(test)]
pub(crate) mod mock;

pub use address::{
    base58_case_variants, is_base58_char, Address, AddressEncoder, Base58Encoder,
    BASE58_ALPHABET, MAX_ADDRESS_LEN,
};
pub use keypair::{
    KeyGenerationError, KeySource, Keypair, ThreadRngKeySource, PUBLIC_KEY_LEN, SECRET_KEY_LEN,
};
