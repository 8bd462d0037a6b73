//! Composes sampling, multiplication, and reconciliation into the
//! initiator/responder key-exchange flows.
//!
//! Unauthenticated: nothing here binds a run to an identity or channel.
//! Authentication, transport framing, and parameter negotiation are the
//! caller's responsibility.

use rand_core::{CryptoRng, RngCore};

use crate::error::KexError;
use crate::params::{a_ref, N};
use crate::poly::{self, Ring};
use crate::rand::Expander;
use crate::reconcile::{cross_round2, rec, round2, PackedBits};
use crate::sampler::sample;
use crate::utils::secure_zeroize;

/// A keypair: the secret polynomial `s` and the public share `b = A*s + e`.
pub struct KeyPair {
    /// Secret ring element. Zeroized on drop.
    pub s: Ring,
    /// Public ring element, safe to publish.
    pub b: Ring,
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        secure_zeroize(&mut self.s);
    }
}

/// Generate a fresh keypair against the shared parameter `a`, seeding the
/// internal expander from `rng`.
pub fn generate_keypair<R: RngCore + CryptoRng>(a: &Ring, rng: &mut R) -> Result<KeyPair, KexError> {
    #[cfg(feature = "std")]
    let _span = tracing::trace_span!("generate_keypair", coefficients = N).entered();

    let mut expander = Expander::from_rng(rng)?;
    generate_keypair_from_expander(a, &mut expander)
}

fn generate_keypair_from_expander(a: &Ring, expander: &mut Expander) -> Result<KeyPair, KexError> {
    let s = sample(expander);
    let mut e = sample(expander);

    let mut b = [0u32; N];
    poly::mul(&mut b, a, &s);
    poly::add(&mut b, &b, &e);

    secure_zeroize(&mut e);
    Ok(KeyPair { s, b })
}

/// The responder's half of the exchange: given the initiator's public share
/// and a fresh keypair of its own, produce reconciliation data and the
/// shared secret.
///
/// `own` is the responder's own keypair (its `s`/`b` were generated via
/// [`generate_keypair`] against the same `a`). `alice_pk` is the initiator's
/// public share.
pub fn compute_key_responder<R: RngCore + CryptoRng>(
    alice_pk: &Ring,
    own: &KeyPair,
    rng: &mut R,
) -> Result<(PackedBits, PackedBits), KexError> {
    #[cfg(feature = "std")]
    let _span = tracing::trace_span!("compute_key_responder").entered();

    let mut expander = Expander::from_rng(rng)?;
    let mut e_double_prime = sample(&mut expander);

    let mut v = [0u32; N];
    poly::mul(&mut v, alice_pk, &own.s);
    poly::add(&mut v, &v, &e_double_prime);
    secure_zeroize(&mut e_double_prime);

    let mut c = [0u64; N / 64];
    cross_round2(&mut c, &v, &mut expander);

    let mut k = [0u64; N / 64];
    round2(&mut k, &v);

    secure_zeroize(&mut v);
    Ok((c, k))
}

/// The initiator's half: given the responder's public share, its own secret
/// `s`, and the reconciliation data, recover the shared secret.
pub fn compute_key_initiator(bob_pk: &Ring, s: &Ring, c: &PackedBits) -> PackedBits {
    let mut w = [0u32; N];
    poly::mul(&mut w, bob_pk, s);

    let mut k = [0u64; N / 64];
    rec(&mut k, &w, c);
    secure_zeroize(&mut w);
    k
}

/// Convenience: `a_ref()` wrapped for callers that don't want to manage the
/// shared parameter themselves.
pub fn default_parameter() -> Ring {
    a_ref()
}
