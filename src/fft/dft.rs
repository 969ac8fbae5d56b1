use core::f64::consts::PI;

use super::Direction;
use crate::Complex64;

/// Direct O(N²) evaluation of the transform definition.
///
/// Twiddles are indexed by `(k·n) mod N` instead of being accumulated, so every term carries
/// only the rounding error of a single `sin_cos`. This is the reference every other backend is
/// tested against.
pub(crate) fn dft(direction: Direction, input: &mut [Complex64], output: &mut [Complex64]) {
    let n = input.len();
    let step = direction.sign() * 2.0 * PI / n as f64;

    for (k, bin) in output.iter_mut().enumerate() {
        let mut sum = Complex64::zero();
        for (i, x) in input.iter().enumerate() {
            let twiddle = Complex64::expi(step * ((k * i) % n) as f64);
            sum = sum.add(&x.mul(&twiddle));
        }
        *bin = sum;
    }

    direction.normalize(output);
}
