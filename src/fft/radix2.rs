use core::f64::consts::PI;

use super::Direction;
use crate::Complex64;

/// Reverses the lowest `bits` bits of an integer value.
#[inline]
fn reverse_bits(mut x: usize, bits: u32) -> usize {
    let mut result = 0;
    for _ in 0..bits {
        result = (result << 1) | (x & 1);
        x >>= 1;
    }
    result
}

/// Copies `input` into `output` in bit-reversed index order.
fn bit_reverse_copy(input: &[Complex64], output: &mut [Complex64]) {
    let log2n = input.len().trailing_zeros();

    for (i, &x) in input.iter().enumerate() {
        output[reverse_bits(i, log2n)] = x;
    }
}

/// Iterative radix-2 Cooley-Tukey DIT transform.
///
/// `input` is only read. The forward direction divides by `N` after the last stage.
pub(crate) fn radix2(direction: Direction, input: &[Complex64], output: &mut [Complex64]) {
    let n = input.len();
    assert!(n.is_power_of_two(), "Radix-2 transform requires a power of two, got {n}");

    bit_reverse_copy(input, output);

    let mut stage_size = 2;
    while stage_size <= n {
        let half_stage = stage_size >> 1;
        let stage_twiddle = Complex64::expi(direction.sign() * 2.0 * PI / stage_size as f64);

        for group in output.chunks_exact_mut(stage_size) {
            let (evens, odds) = group.split_at_mut(half_stage);
            let mut w = Complex64::one();

            for (even, odd) in evens.iter_mut().zip(odds.iter_mut()) {
                let e = *even;
                let o = w.mul(odd);
                *even = e.add(&o);
                *odd = e.sub(&o);
                w = w.mul(&stage_twiddle);
            }
        }

        stage_size <<= 1;
    }

    direction.normalize(output);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fft::test_util::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_reverse_bits() {
        assert_eq!(reverse_bits(0b0001, 4), 0b1000);
        assert_eq!(reverse_bits(0b0110, 4), 0b0110);
        assert_eq!(reverse_bits(0b1011, 4), 0b1101);
        assert_eq!(reverse_bits(5, 0), 0);
    }

    #[test]
    fn test_vs_naive_dft() {
        for log2n in 0..=10 {
            let size = 1 << log2n;
            let input = signal(size);

            for direction in [Direction::Forward, Direction::Inverse] {
                let mut output = vec![Complex64::zero(); size];
                radix2(direction, &input, &mut output);

                assert_spectra_approx_eq(
                    &output,
                    &naive_dft(direction, &input),
                    EPSILON * size as f64,
                    &format!("{direction:?} size {size}"),
                );
            }
        }
    }

    #[test]
    fn test_input_is_preserved() {
        let input = signal(64);
        let copy = input.clone();
        let mut output = vec![Complex64::zero(); 64];

        radix2(Direction::Forward, &input, &mut output);

        assert_eq!(input, copy);
    }

    #[test]
    #[should_panic]
    fn test_rejects_non_power_of_two() {
        let input = signal(12);
        let mut output = vec![Complex64::zero(); 12];
        radix2(Direction::Forward, &input, &mut output);
    }
}
