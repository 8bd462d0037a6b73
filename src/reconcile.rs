//! Reconciliation: `dbl`, `round2`, `cross_round2`, `rec` — turning two
//! close-but-not-identical ring elements into one identical bit string.
//!
//! All four operations are constant time; the interval bounds below are
//! part of the wire protocol and must be used exactly as given.

use crate::params::N;
use crate::poly::Ring;
use crate::rand::Expander;

/// Packed bits: 1024 bits as 16 little-endian 64-bit words, bit `i` at
/// word `i/64`, position `i % 64`.
pub type PackedBits = [u64; N / 64];

/// Double `inp` with a randomized rounding term drawn from `e`'s two low
/// bits: epsilon = ((e>>1)&1) - (e&1) in {-1, 0, 0, 1}.
#[inline(always)]
pub fn dbl(inp: u32, e: u32) -> u64 {
    let b0 = (e & 1) as i64;
    let b1 = ((e >> 1) & 1) as i64;
    let epsilon = b1 - b0;
    ((inp as i64) << 1).wrapping_sub(epsilon) as u64
}

fn set_bit(out: &mut PackedBits, i: usize, bit: bool) {
    if bit {
        out[i / 64] |= 1u64 << (i % 64);
    }
}

/// Round `inp` to one bit per coefficient: `b = [2^30 <= in <= 3*2^30-1]`.
pub fn round2(out: &mut PackedBits, inp: &Ring) {
    *out = [0u64; N / 64];
    const LO: u32 = 1 << 30;
    const HI: u32 = 3 * (1 << 30) - 1;
    for (i, &c) in inp.iter().enumerate() {
        let bit = c >= LO && c <= HI;
        set_bit(out, i, bit);
    }
}

/// Cross-rounding: one hint bit per coefficient, drawn from two random bits
/// per coefficient (16 coefficients consumed per `next32`).
pub fn cross_round2(out: &mut PackedBits, inp: &Ring, expander: &mut Expander) {
    *out = [0u64; N / 64];
    // Literal wire-protocol bounds; the second interval's lower edge is
    // 3*2^31 - 2, not 3*2^31, and must be reproduced exactly.
    const LO1: u64 = 2_147_483_648;
    const HI1: u64 = 4_294_967_295;
    const LO2: u64 = 6_442_450_942;
    const HI2: u64 = 8_589_934_590;

    let mut word = 0u32;
    let mut remaining = 0u32;
    for (i, &c) in inp.iter().enumerate() {
        if remaining == 0 {
            word = expander.next32();
            remaining = 16;
        }
        let e = word & 0b11;
        word >>= 2;
        remaining -= 1;

        let dd = dbl(c, e);
        let bit = (LO1..=HI1).contains(&dd) || (LO2..=HI2).contains(&dd);
        set_bit(out, i, bit);
    }
}

fn get_bit(bits: &PackedBits, i: usize) -> u32 {
    ((bits[i / 64] >> (i % 64)) & 1) as u32
}

/// Recover the shared bit string from `w` and the peer's cross-rounding hint `b`.
pub fn rec(out: &mut PackedBits, w: &Ring, b: &PackedBits) {
    *out = [0u64; N / 64];
    const LO_B0: u64 = 3u64 << 30;
    const HI_B0: u64 = (7u64 << 30) - 2;
    const LO_B1: u64 = 1u64 << 30;
    const HI_B1: u64 = (5u64 << 30) - 2;

    for (i, &w_i) in w.iter().enumerate() {
        let cosw = (w_i as u64) << 1;
        let bi = get_bit(b, i);
        let bit = if bi == 0 {
            (LO_B0..=HI_B0).contains(&cosw)
        } else {
            (LO_B1..=HI_B1).contains(&cosw)
        };
        set_bit(out, i, bit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dbl_epsilon_range() {
        // e in {0,1,2,3} maps epsilon to {0,-1,1,0}; check the magnitude bound.
        for inp in [0u32, 5, 100] {
            for e in 0u32..4 {
                let d = dbl(inp, e);
                let base = (inp as i64) << 1;
                assert!((d as i64 - base).abs() <= 1);
            }
        }
    }

    #[test]
    fn round_trip_alice_bob_agree_without_noise() {
        // With zero rounding noise (e == 0 throughout), w == v implies rec(w, cross_round(v)) == round(v).
        let mut v = [0u32; N];
        for (i, c) in v.iter_mut().enumerate() {
            *c = (i as u32).wrapping_mul(2_654_435_761);
        }
        let mut cr = [0u64; N / 64];
        let mut expander = Expander::from_seed(&[0u8; crate::rand::SEED_LEN]);
        cross_round2(&mut cr, &v, &mut expander);

        let mut k_alice = [0u64; N / 64];
        round2(&mut k_alice, &v);

        let mut k_bob = [0u64; N / 64];
        rec(&mut k_bob, &v, &cr);

        assert_eq!(k_alice, k_bob);
    }
}
