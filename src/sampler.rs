//! Discrete error sampler: draws a ring element whose coefficients follow
//! the distribution encoded by the 52-entry CDF table, in constant time.

use crate::ct::{ct_eq, less_than_192, select};
use crate::params::{cdf_table, N, TABLE_SIZE};
use crate::rand::Expander;

/// Draw one coefficient from the table-defined distribution, given 192 bits
/// of fresh randomness. Scans all 52 table entries unconditionally.
fn single_sample(r: &[u64; 3], table: &[[u64; 3]; TABLE_SIZE]) -> u32 {
    let mut index: u64 = 0;
    for i in 0..TABLE_SIZE {
        let lt = less_than_192(r, &table[i]);
        index = select(index, i as u64, lt);
    }
    index as u32
}

/// Sample a full 1024-coefficient ring element from the error distribution.
///
/// Sign bits are drawn 64 at a time (one `next64` feeds 64 coefficients) to
/// minimize calls into the expander. Per block of 64 coefficients, the sign
/// word is drawn *before* the 64 magnitude draws that consume it, matching
/// the upstream `sample()`'s `r := rand.random64()` preceding its inner loop
/// of `rand.random192()` calls.
pub fn sample(expander: &mut Expander) -> [u32; N] {
    let table = cdf_table();
    let mut out = [0u32; N];

    for block in out.chunks_mut(64) {
        let mut sign_bits = expander.next64();
        for coeff in block.iter_mut() {
            let mut r = [0u64; 3];
            expander.next192(&mut r);
            let magnitude = single_sample(&r, &table);

            let sign = sign_bits & 1;
            sign_bits >>= 1;

            let negated = crate::arith::Q.wrapping_sub(magnitude);
            *coeff = select(negated as u64, magnitude as u64, ct_eq(sign, 0)) as u32;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_deterministic_for_fixed_seed() {
        let seed = [3u8; crate::rand::SEED_LEN];
        let mut a = Expander::from_seed(&seed);
        let mut b = Expander::from_seed(&seed);
        assert_eq!(sample(&mut a), sample(&mut b));
    }

    #[test]
    fn sample_coefficients_are_small_magnitude() {
        let mut e = Expander::from_seed(&[11u8; crate::rand::SEED_LEN]);
        let poly = sample(&mut e);
        for &c in poly.iter() {
            let mag = core::cmp::min(c, crate::arith::Q - c);
            assert!(mag < TABLE_SIZE as u32);
        }
    }
}
