//! End-to-end key exchange: initiator and responder must agree, and
//! `generate_keypair` must be deterministic for a fixed seed.

use rand_core::{CryptoRng, Error, RngCore};
use rlwe_kex::{compute_key_initiator, compute_key_responder, generate_keypair, kex};

struct CountingRng(u64);

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let v = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&v[..chunk.len()]);
        }
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for CountingRng {}

#[test]
fn initiator_and_responder_agree_over_many_seedings() {
    let a = kex::default_parameter();
    for trial in 0..64u64 {
        let mut alice_rng = CountingRng(trial * 2 + 1);
        let mut bob_rng = CountingRng(trial * 2 + 2);

        let alice = generate_keypair(&a, &mut alice_rng).unwrap();
        let bob = generate_keypair(&a, &mut bob_rng).unwrap();

        let (c, k_bob) = compute_key_responder(&alice.b, &bob, &mut bob_rng).unwrap();
        let k_alice = compute_key_initiator(&bob.b, &alice.s, &c);

        assert_eq!(k_alice, k_bob, "trial {trial} disagreed");
    }
}

#[test]
fn generate_keypair_is_deterministic_for_fixed_seed() {
    let a = kex::default_parameter();
    let kp1 = generate_keypair(&a, &mut CountingRng(99)).unwrap();
    let kp2 = generate_keypair(&a, &mut CountingRng(99)).unwrap();
    assert_eq!(kp1.b, kp2.b);
    assert_eq!(kp1.s, kp2.s);
}
