use core::f64::consts::PI;

use super::{Direction, radix2::radix2};
use crate::Complex64;

/// Chirp `e^{sign·iπ·k²/N}`.
///
/// The phase is periodic in `k²` with period `2N`, so the square is reduced before it is
/// turned into an angle. This keeps the angle below `2π` for any `k`.
#[inline]
fn chirp(sign: f64, k: usize, n: usize) -> Complex64 {
    let square = (k as u128 * k as u128) % (2 * n as u128);
    Complex64::expi(sign * PI * square as f64 / n as f64)
}

/// Bluestein's algorithm: any length `N` as a length-`P` circular convolution, `P` the
/// smallest power of two with `P ≥ 2N − 1`.
///
/// The padded sequences are taken through the unnormalized inverse radix-2 transform, multiplied
/// pointwise, and brought back with the normalized forward radix-2 transform, which yields the
/// plain convolution. This is the only backend that allocates.
pub(crate) fn bluestein(direction: Direction, input: &[Complex64], output: &mut [Complex64]) {
    let n = input.len();
    let padded_len = (2 * n - 1).next_power_of_two();
    let sign = direction.sign();

    let mut a = vec![Complex64::zero(); padded_len];
    let mut b = vec![Complex64::zero(); padded_len];
    let mut kernel = vec![Complex64::zero(); padded_len];

    for (i, (x, (a, b))) in input.iter().zip(a.iter_mut().zip(b.iter_mut())).enumerate() {
        *a = x.mul(&chirp(sign, i, n));
        *b = chirp(-sign, i, n);
    }
    for i in 1..n {
        b[padded_len - i] = b[i];
    }

    radix2(Direction::Inverse, &b, &mut kernel);
    radix2(Direction::Inverse, &a, &mut b);

    for (x, k) in b.iter_mut().zip(kernel.iter()) {
        *x = x.mul(k);
    }

    radix2(Direction::Forward, &b, &mut a);

    for (k, (bin, convolved)) in output.iter_mut().zip(a.iter()).enumerate() {
        *bin = chirp(sign, k, n).mul(convolved);
    }

    direction.normalize(output);
}
