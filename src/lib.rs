#![cfg_attr(not(feature = "std"), no_std)]

//! Constant-time Ring-LWE (BCNS) unauthenticated key exchange.
//!
//! Implements the arithmetic and protocol engine from Bos, Costello,
//! Naehrig, and Stebila, "Post-quantum key exchange for the TLS protocol
//! from the ring learning with errors problem" (ePrint 2014/599): a
//! constant-time Nussbaumer FFT polynomial multiplier over a redundant
//! representation of Z/(2^32-1), a table-based discrete error sampler, and
//! the doubling/rounding/reconciliation mechanism that turns two
//! close-but-not-identical ring elements into one identical shared secret.
//!
//! This crate is unauthenticated by design: it exchanges a shared secret,
//! nothing more. Binding that secret to an identity, transporting it over a
//! concrete wire format, and negotiating parameters are the caller's job.
//!
//! ```no_run
//! use rand_core::OsRng;
//! use rlwe_kex::kex;
//!
//! let a = kex::default_parameter();
//! let mut rng = OsRng;
//!
//! // Alice generates a keypair and publishes `alice.b`.
//! let alice = kex::generate_keypair(&a, &mut rng)?;
//!
//! // Bob generates his own keypair, then reconciles against Alice's share.
//! let bob = kex::generate_keypair(&a, &mut rng)?;
//! let (c, k_bob) = kex::compute_key_responder(&alice.b, &bob, &mut rng)?;
//!
//! // Alice recovers the same secret using Bob's public share and the hint `c`.
//! let k_alice = kex::compute_key_initiator(&bob.b, &alice.s, &c);
//! assert_eq!(k_alice, k_bob);
//! # Ok::<(), rlwe_kex::error::KexError>(())
//! ```

extern crate alloc;

pub mod arith;
pub mod ct;
pub mod error;
pub mod kex;
pub mod params;
pub mod poly;
pub mod rand;
pub mod reconcile;
pub mod sampler;
pub mod types;
pub mod utils;

pub use error::KexError;
pub use kex::{compute_key_initiator, compute_key_responder, generate_keypair, KeyPair};
pub use types::{PrivateKey, PublicKey, RecData, SharedSecret};
