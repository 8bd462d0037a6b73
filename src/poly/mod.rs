//! Polynomial arithmetic in Z_q[X]/(X^1024+1): Nussbaumer FFT multiply plus
//! pointwise addition.

mod nussbaumer;

pub use nussbaumer::{naive, FftWorkspace};

use crate::arith::modadd;
use crate::params::N;

/// A ring element: 1024 coefficients mod 2^32-1, redundant zero.
pub type Ring = [u32; N];

/// z = x + y, pointwise, over the full ring.
pub fn add(z: &mut Ring, x: &Ring, y: &Ring) {
    for i in 0..N {
        z[i] = modadd(x[i], y[i]);
    }
}

/// z = x * y in Z_q[X]/(X^1024+1), via the Nussbaumer transform.
///
/// Allocates its own [`FftWorkspace`]; callers on a hot path that run many
/// multiplications may instead construct one workspace and call
/// [`FftWorkspace::multiply`] directly to reuse the buffers.
pub fn mul(z: &mut Ring, x: &Ring, y: &Ring) {
    let mut ws = FftWorkspace::new();
    ws.multiply(z, x, y);
}
