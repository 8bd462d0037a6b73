//! Randomness expander: AES-256-CTR keystream repacked into 32/64/192-bit words.
//!
//! The expander is seeded once from 48 bytes (32-byte key, 16-byte IV) drawn
//! from any [`rand_core::CryptoRng`], then produces an unbounded deterministic
//! stream. Two expanders seeded with the same bytes produce byte-identical
//! output; this is what makes `generate_keypair` reproducible from a fixed
//! seed for testing while remaining unpredictable when seeded from a real
//! entropy source.

use aes::cipher::{KeyIvInit, StreamCipher};
use aes::Aes256;
use ctr::Ctr128BE;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::KexError;

type Aes256Ctr = Ctr128BE<Aes256>;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

/// Size in bytes of the seed this expander consumes at construction.
pub const SEED_LEN: usize = KEY_LEN + IV_LEN;

/// Deterministic randomness expander used by the sampler and reconciliation.
pub struct Expander {
    cipher: Aes256Ctr,
}

impl Expander {
    /// Seed the expander by drawing [`SEED_LEN`] bytes from `rng`.
    pub fn from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, KexError> {
        let mut seed = [0u8; SEED_LEN];
        rng.try_fill_bytes(&mut seed).map_err(|_| KexError::RandomnessFailure {
            actual: 0,
            requested: SEED_LEN,
        })?;
        let expander = Self::from_seed(&seed);
        seed.zeroize();
        Ok(expander)
    }

    /// Seed the expander from an explicit 48-byte key||IV pair.
    ///
    /// Intended for deterministic tests; production callers should prefer
    /// [`Expander::from_rng`] with a real entropy source.
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        let (key, iv) = seed.split_at(KEY_LEN);
        let cipher = Aes256Ctr::new(key.into(), iv.into());
        Self { cipher }
    }

    fn next_bytes<const N: usize>(&mut self) -> [u8; N] {
        let mut block = [0u8; N];
        self.cipher.apply_keystream(&mut block);
        block
    }

    /// Draw the next 32 bits as a little-endian word.
    pub fn next32(&mut self) -> u32 {
        u32::from_le_bytes(self.next_bytes::<4>())
    }

    /// Draw the next 64 bits as a little-endian word.
    pub fn next64(&mut self) -> u64 {
        u64::from_le_bytes(self.next_bytes::<8>())
    }

    /// Draw the next 192 bits as three little-endian 64-bit limbs, limb 0 first.
    pub fn next192(&mut self, out: &mut [u64; 3]) {
        for limb in out.iter_mut() {
            *limb = self.next64();
        }
    }
}
