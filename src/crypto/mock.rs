//! Deterministic key sources and encoders for tests.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{AddressEncoder, KeyGenerationError, KeySource, Keypair, PUBLIC_KEY_LEN};

/// A keypair whose bytes are all `tag`. The mock encoder keys off the first byte.
pub(crate) fn tagged(tag: u8) -> Keypair {
    Keypair::from_parts([tag; 32], [tag; 64])
}

/// Hands out a fixed script of keypairs in order, then tag 0 forever.
pub(crate) struct ScriptedSource {
    keys: Vec<Keypair>,
    next: AtomicUsize,
}

impl ScriptedSource {
    pub(crate) fn new(tags: impl IntoIterator<Item = u8>) -> Self {
        Self {
            keys: tags.into_iter().map(tagged).collect(),
            next: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

impl KeySource for ScriptedSource {
    fn generate(&self) -> Result<Keypair, KeyGenerationError> {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(self.keys.get(i).cloned().unwrap_or_else(|| tagged(0)))
    }
}

/// Returns the same keypair on every call.
pub(crate) struct FixedSource(pub(crate) Keypair);

impl KeySource for FixedSource {
    fn generate(&self) -> Result<Keypair, KeyGenerationError> {
        Ok(self.0.clone())
    }
}

/// Fails the first `failures` calls, then behaves like [`FixedSource`].
pub(crate) struct FlakySource {
    remaining: AtomicUsize,
    inner: FixedSource,
}

impl FlakySource {
    pub(crate) fn new(failures: usize, keypair: Keypair) -> Self {
        Self {
            remaining: AtomicUsize::new(failures),
            inner: FixedSource(keypair),
        }
    }
}

impl KeySource for FlakySource {
    fn generate(&self) -> Result<Keypair, KeyGenerationError> {
        let failed = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            let err = io::Error::new(io::ErrorKind::Other, "entropy exhausted");
            return Err(KeyGenerationError::Entropy(rand::Error::new(err)));
        }
        self.inner.generate()
    }
}

/// Encodes a key as `labels[first byte]`, or the empty string past the end.
pub(crate) struct LabelEncoder(pub(crate) Vec<&'static str>);

impl AddressEncoder for LabelEncoder {
    fn encode(&self, public_key: &[u8; PUBLIC_KEY_LEN]) -> String {
        self.0
            .get(usize::from(public_key[0]))
            .copied()
            .unwrap_or_default()
            .to_string()
    }
}
