//! Solana (ed25519) keypair generation.

use std::fmt;

use ed25519_dalek::SigningKey;
use rand::RngCore;

use super::Address;

/// Length of an ed25519 public key in bytes.
pub const PUBLIC_KEY_LEN: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;

/// Length of a Solana private key in bytes (32-byte seed followed by the public key).
pub const SECRET_KEY_LEN: usize = ed25519_dalek::KEYPAIR_LENGTH;

/// Failure to produce a single keypair.
///
/// Transient: a worker skips the attempt and keeps searching.
#[derive(Debug, thiserror::Error)]
pub enum KeyGenerationError {
    #[error("entropy source unavailable: {0}")]
    Entropy(#[from] rand::Error),
}

/// A source of fresh keypairs.
///
/// Implementations are shared by every worker, so each call must be
/// independent of the others.
pub trait KeySource: Send + Sync {
    /// Produces one new keypair.
    fn generate(&self) -> Result<Keypair, KeyGenerationError>;
}

/// Key source backed by the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngKeySource;

impl KeySource for ThreadRngKeySource {
    #[inline]
    fn generate(&self) -> Result<Keypair, KeyGenerationError> {
        let mut seed = [0u8; ed25519_dalek::SECRET_KEY_LENGTH];
        rand::thread_rng().try_fill_bytes(&mut seed)?;
        Ok(Keypair::from_seed(seed))
    }
}

/// Represents a Solana keypair (public key + 64-byte private key).
#[derive(Clone, PartialEq, Eq)]
pub struct Keypair {
    /// The ed25519 public key
    public_key: [u8; PUBLIC_KEY_LEN],
    /// Seed followed by public key, the layout Solana wallets import
    secret_key: [u8; SECRET_KEY_LEN],
}

impl Keypair {
    /// Derives a keypair from a 32-byte ed25519 seed.
    pub fn from_seed(seed: [u8; ed25519_dalek::SECRET_KEY_LENGTH]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);

        Self {
            public_key: signing_key.verifying_key().to_bytes(),
            secret_key: signing_key.to_keypair_bytes(),
        }
    }

    /// Builds a keypair from raw parts without checking that they belong together.
    pub const fn from_parts(
        public_key: [u8; PUBLIC_KEY_LEN],
        secret_key: [u8; SECRET_KEY_LEN],
    ) -> Self {
        Self {
            public_key,
            secret_key,
        }
    }

    /// Returns the public key bytes.
    #[inline]
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public_key
    }

    /// Returns the private key bytes.
    pub fn private_key(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.secret_key
    }

    /// Returns the address of the public key.
    pub fn address(&self) -> Address {
        Address::from_bytes(self.public_key)
    }

    /// Returns the private key in Base58, as printed by Solana tooling.
    pub fn private_key_base58(&self) -> String {
        bs58::encode(self.secret_key).into_string()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032, section 7.1, test 1
    const SEED: [u8; 32] = [
        0x9d, 0x61, 0xb1, 0x9d, 0xef, 0xfd, 0x5a, 0x60, 0xba, 0x84, 0x4a, 0xf4, 0x92, 0xec, 0x2c,
        0xc4, 0x44, 0x49, 0xc5, 0x69, 0x7b, 0x32, 0x69, 0x19, 0x70, 0x3b, 0xac, 0x03, 0x1c, 0xae,
        0x7f, 0x60,
    ];
    const PUBLIC: [u8; 32] = [
        0xd7, 0x5a, 0x98, 0x01, 0x82, 0xb1, 0x0a, 0xb7, 0xd5, 0x4b, 0xfe, 0xd3, 0xc9, 0x64, 0x07,
        0x3a, 0x0e, 0xe1, 0x72, 0xf3, 0xda, 0xa6, 0x23, 0x25, 0xaf, 0x02, 0x1a, 0x68, 0xf7, 0x07,
        0x51, 0x1a,
    ];

    #[test]
    fn test_keypair_generation() {
        let keypair = ThreadRngKeySource.generate().unwrap();
        assert_eq!(keypair.public_key().len(), PUBLIC_KEY_LEN);
        assert_eq!(keypair.private_key().len(), SECRET_KEY_LEN);
        assert_eq!(&keypair.private_key()[32..], keypair.public_key());
    }

    #[test]
    fn test_generated_keys_differ() {
        let a = ThreadRngKeySource.generate().unwrap();
        let b = ThreadRngKeySource.generate().unwrap();
        assert_ne!(a.public_key(), b.public_key());
    }

    #[test]
    fn test_deterministic_keypair() {
        let keypair = Keypair::from_seed(SEED);
        assert_eq!(keypair.public_key(), &PUBLIC);
        assert_eq!(&keypair.private_key()[..32], &SEED);
        assert_eq!(&keypair.private_key()[32..], &PUBLIC);
        assert_eq!(
            keypair.address().to_base58(),
            "FVen3X669xLzsi6N2V91DoiyzHzg1uAgqiT8jZ9nS96Z"
        );
        assert_eq!(
            keypair.private_key_base58(),
            "49W385L4rePHy6PAaQUovbD2aacgN4HsKXSMeUzRg4fmwXszN91JuMFrQRj3vMDpZuRF3ZknQBuRBoWQJEfXstMw"
        );
    }

    #[test]
    fn test_debug_hides_private_key() {
        let keypair = Keypair::from_seed(SEED);
        let debug = format!("{:?}", keypair);
        assert!(debug.contains("FVen3X669xLzsi6N2V91DoiyzHzg1uAgqiT8jZ9nS96Z"));
        assert!(!debug.contains("secret_key"));
    }
}
