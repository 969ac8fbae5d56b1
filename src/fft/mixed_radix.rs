use core::f64::consts::PI;

use super::{Direction, transform, transpose::transpose};
use crate::Complex64;

/// Cooley-Tukey split of `N = radix · m` with twiddle factors between the two passes.
///
/// 1. Gather the input into `radix` decimated groups of length `m` (input → output)
/// 2. Transform every group (output → input)
/// 3. Interleave back to natural order (input → output)
/// 4. Multiply by `W_N^(n·k)` and transform every group of `radix` (output → input)
/// 5. Stride reorder into natural output order (input → output)
///
/// Both buffers alternate as source and destination; every sub-transform receives disjoint
/// chunks of the two.
pub(crate) fn mixed_radix(
    direction: Direction,
    radix: usize,
    input: &mut [Complex64],
    output: &mut [Complex64],
) {
    let n = input.len();
    assert_eq!(n % radix, 0, "Radix {radix} does not divide {n}");
    let m = n / radix;

    transpose(input, output, radix, m);

    for (group, spectrum) in output.chunks_exact_mut(m).zip(input.chunks_exact_mut(m)) {
        transform(direction, group, spectrum);
    }

    transpose(input, output, m, radix);

    let step = direction.sign() * 2.0 * PI / n as f64;
    for (k, (group, spectrum)) in output
        .chunks_exact_mut(radix)
        .zip(input.chunks_exact_mut(radix))
        .enumerate()
    {
        for (i, x) in group.iter_mut().enumerate().skip(1) {
            *x = x.mul(&Complex64::expi(step * ((i * k) % n) as f64));
        }
        transform(direction, group, spectrum);
    }

    transpose(input, output, radix, m);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fft::test_util::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_vs_naive_dft() {
        // Any divisor works as radix, not only the one the dispatcher picks.
        for (radix, size) in [
            (2, 6),
            (3, 9),
            (4, 36),
            (6, 36),
            (9, 36),
            (10, 100),
            (3, 27),
            (5, 85),
        ] {
            let input = signal(size);

            for direction in [Direction::Forward, Direction::Inverse] {
                let mut scratch = input.clone();
                let mut output = vec![Complex64::zero(); size];
                mixed_radix(direction, radix, &mut scratch, &mut output);

                assert_spectra_approx_eq(
                    &output,
                    &naive_dft(direction, &input),
                    EPSILON * size as f64,
                    &format!("{direction:?} radix {radix} size {size}"),
                );
            }
        }
    }
}
