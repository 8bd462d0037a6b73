//! Fixed-size wire wrapper types for the four sized protocol artifacts.
//!
//! Each type is a thin newtype over a byte array with a length-checked
//! `TryFrom<&[u8]>`, matching the `PublicKey<const N: usize>` /
//! `SecretKey<const N: usize>` pattern this crate's reference material uses
//! for its own signature artifacts.

use subtle::{Choice, ConstantTimeEq};

use crate::error::KexError;
use crate::params::N;
use crate::poly::Ring;
use crate::reconcile::PackedBits;
use crate::utils::secure_zeroize;

const PUBKEY_LEN: usize = N * 4;
const PRIVKEY_LEN: usize = N * 4;
const RECDATA_LEN: usize = (N / 64) * 8;
const SHARED_SECRET_LEN: usize = (N / 64) * 8;

fn ring_to_bytes(r: &Ring) -> [u8; PUBKEY_LEN] {
    let mut out = [0u8; PUBKEY_LEN];
    for (chunk, &coeff) in out.chunks_exact_mut(4).zip(r.iter()) {
        chunk.copy_from_slice(&coeff.to_le_bytes());
    }
    out
}

fn bytes_to_ring(bytes: &[u8]) -> Result<Ring, KexError> {
    if bytes.len() != PUBKEY_LEN {
        return Err(KexError::InvalidPublicKeySize { actual: bytes.len() });
    }
    let mut out = [0u32; N];
    for (coeff, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
        *coeff = u32::from_le_bytes(chunk.try_into().unwrap());
    }
    Ok(out)
}

fn packed_to_bytes(p: &PackedBits) -> [u8; RECDATA_LEN] {
    let mut out = [0u8; RECDATA_LEN];
    for (chunk, &word) in out.chunks_exact_mut(8).zip(p.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

fn bytes_to_packed(bytes: &[u8]) -> Result<PackedBits, KexError> {
    if bytes.len() != RECDATA_LEN {
        return Err(KexError::InvalidRecDataSize { actual: bytes.len() });
    }
    let mut out = [0u64; N / 64];
    for (word, chunk) in out.iter_mut().zip(bytes.chunks_exact(8)) {
        *word = u64::from_le_bytes(chunk.try_into().unwrap());
    }
    Ok(out)
}

/// A serialized public share: 4096 bytes, little-endian u32 coefficients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(pub Ring);

impl PublicKey {
    /// Serialize to the 4096-byte wire format.
    pub fn as_bytes(&self) -> [u8; PUBKEY_LEN] {
        ring_to_bytes(&self.0)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = KexError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(bytes_to_ring(bytes)?))
    }
}

impl ConstantTimeEq for PublicKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.as_bytes().ct_eq(&other.as_bytes())
    }
}

/// A serialized private key (secret polynomial): 4096 bytes, same layout as
/// [`PublicKey`]. Zeroized on drop.
#[derive(Clone, Debug)]
pub struct PrivateKey(pub Ring);

impl PrivateKey {
    /// Serialize to the 4096-byte wire format.
    pub fn as_bytes(&self) -> [u8; PRIVKEY_LEN] {
        ring_to_bytes(&self.0)
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = KexError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(bytes_to_ring(bytes)?))
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        secure_zeroize(&mut self.0);
    }
}

/// Reconciliation data: 128 bytes, 1024 bits packed as 16 little-endian u64 words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecData(pub PackedBits);

impl RecData {
    /// Serialize to the 128-byte wire format.
    pub fn as_bytes(&self) -> [u8; RECDATA_LEN] {
        packed_to_bytes(&self.0)
    }
}

impl TryFrom<&[u8]> for RecData {
    type Error = KexError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(bytes_to_packed(bytes)?))
    }
}

impl ConstantTimeEq for RecData {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.as_bytes().ct_eq(&other.as_bytes())
    }
}

/// The derived shared secret: 128 bytes, same layout as [`RecData`].
/// Zeroized on drop.
#[derive(Clone, Debug)]
pub struct SharedSecret(pub PackedBits);

impl SharedSecret {
    /// Serialize to the 128-byte wire format.
    pub fn as_bytes(&self) -> [u8; SHARED_SECRET_LEN] {
        packed_to_bytes(&self.0)
    }
}

impl TryFrom<&[u8]> for SharedSecret {
    type Error = KexError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != SHARED_SECRET_LEN {
            return Err(KexError::InvalidRecDataSize { actual: bytes.len() });
        }
        Ok(Self(bytes_to_packed(bytes)?))
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.as_bytes().ct_eq(&other.as_bytes())
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        secure_zeroize(&mut self.0);
    }
}
