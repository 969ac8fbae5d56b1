//! Two real channels through one complex transform.
//!
//! A stereo block is packed as `left + i·right`. Since both channels are real, their spectra
//! are conjugate-symmetric and can be separated from the spectrum of the packed signal:
//!
//! ```text
//! L[k] = (X[k] + conj(X[N-k])) / 2
//! R[k] = i·(conj(X[N-k]) - X[k]) / 2
//! ```
//!
//! Only the non-redundant half `0..=N/2` of each channel spectrum is kept. DC and, for even
//! `N`, the Nyquist bin are real for a real channel, so only their real parts are meaningful.

use crate::Complex64;

/// Length of each channel spectrum produced by [`split_channels`] for a block of `len` samples.
#[inline]
pub const fn half_spectrum_len(len: usize) -> usize {
    len / 2 + 1
}

/// Separates the spectrum of a packed `left + i·right` block into the two channel spectra.
///
/// # Panics
///
/// Panics if `spectrum` is empty.
pub fn split_channels(spectrum: &[Complex64]) -> (Vec<Complex64>, Vec<Complex64>) {
    let n = spectrum.len();
    assert!(n > 0, "Spectrum must not be empty");

    let half = half_spectrum_len(n);
    let mut left = vec![Complex64::zero(); half];
    let mut right = vec![Complex64::zero(); half];

    left[0] = Complex64::new(spectrum[0].re, 0.0);
    right[0] = Complex64::new(spectrum[0].im, 0.0);

    for i in 1..n.div_ceil(2) {
        let bin = spectrum[i];
        let mirror = spectrum[n - i].conj();
        left[i] = bin.add(&mirror).scale(0.5);
        right[i] = mirror.sub(&bin).scale(0.5).mul_i();
    }

    if n % 2 == 0 && n > 1 {
        let nyquist = spectrum[n / 2];
        left[n / 2] = Complex64::new(nyquist.re, 0.0);
        right[n / 2] = Complex64::new(nyquist.im, 0.0);
    }

    (left, right)
}

/// Reassembles the spectrum of a packed `left + i·right` block from two channel spectra.
///
/// Exact inverse of [`split_channels`]. The imaginary parts of DC and Nyquist are ignored.
///
/// # Panics
///
/// Panics if `len` is zero or the channel spectra do not match a block of `len` samples.
pub fn join_channels(left: &[Complex64], right: &[Complex64], len: usize) -> Vec<Complex64> {
    assert!(len > 0, "Block must not be empty");
    assert_eq!(
        left.len(),
        right.len(),
        "Channel spectra must have the same length"
    );
    assert_eq!(
        left.len(),
        half_spectrum_len(len),
        "Channel spectra do not match a block of {len} samples"
    );

    let mut spectrum = vec![Complex64::zero(); len];

    spectrum[0] = Complex64::new(left[0].re, right[0].re);

    for i in 1..len.div_ceil(2) {
        let r = right[i].mul_i();
        spectrum[i] = left[i].add(&r);
        spectrum[len - i] = left[i].sub(&r).conj();
    }

    if len % 2 == 0 && len > 1 {
        spectrum[len / 2] = Complex64::new(left[len / 2].re, right[len / 2].re);
    }

    spectrum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fft::{
            Direction,
            test_util::{assert_spectra_approx_eq, naive_dft},
        },
        forward_transform, inverse_transform,
    };

    const EPSILON: f64 = 1e-12;

    const SIZES: &[usize] = &[1, 2, 3, 4, 15, 16, 17, 36, 97, 100];

    fn channel(len: usize, seed: f64) -> Vec<f64> {
        (0..len)
            .map(|i| (i as f64 * seed).sin() + 0.1 * seed)
            .collect()
    }

    fn pack(left: &[f64], right: &[f64]) -> Vec<Complex64> {
        left.iter()
            .zip(right)
            .map(|(&l, &r)| Complex64::new(l, r))
            .collect()
    }

    fn real(x: &[f64]) -> Vec<Complex64> {
        x.iter().map(|&v| Complex64::from(v)).collect()
    }

    fn packed_spectrum(left: &[f64], right: &[f64]) -> Vec<Complex64> {
        let mut input = pack(left, right);
        let mut spectrum = vec![Complex64::zero(); left.len()];
        forward_transform(&mut input, &mut spectrum);
        spectrum
    }

    #[test]
    fn test_split_matches_channel_spectra() {
        for &size in SIZES {
            let left = channel(size, 0.7);
            let right = channel(size, 1.9);
            let (split_left, split_right) = split_channels(&packed_spectrum(&left, &right));

            let half = half_spectrum_len(size);
            let expected_left = naive_dft(Direction::Forward, &real(&left));
            let expected_right = naive_dft(Direction::Forward, &real(&right));

            assert_spectra_approx_eq(
                &split_left,
                &expected_left[..half],
                1e-10,
                &format!("Size {size} left"),
            );
            assert_spectra_approx_eq(
                &split_right,
                &expected_right[..half],
                1e-10,
                &format!("Size {size} right"),
            );
        }
    }

    #[test]
    fn test_join_inverts_split() {
        for &size in SIZES {
            let spectrum = packed_spectrum(&channel(size, 0.3), &channel(size, 2.2));
            let (left, right) = split_channels(&spectrum);

            assert_spectra_approx_eq(
                &join_channels(&left, &right, size),
                &spectrum,
                EPSILON,
                &format!("Size {size}"),
            );
        }
    }

    #[test]
    fn test_channels_survive_round_trip() {
        for &size in SIZES {
            let left = channel(size, 1.1);
            let right = channel(size, 0.45);

            let (left_spectrum, right_spectrum) = split_channels(&packed_spectrum(&left, &right));
            let mut joined = join_channels(&left_spectrum, &right_spectrum, size);
            let mut time = vec![Complex64::zero(); size];
            inverse_transform(&mut joined, &mut time);

            for i in 0..size {
                assert!(
                    (time[i].re - left[i]).abs() < 1e-9,
                    "Size {size}: left sample {i}: {} != {}",
                    time[i].re,
                    left[i]
                );
                assert!(
                    (time[i].im - right[i]).abs() < 1e-9,
                    "Size {size}: right sample {i}: {} != {}",
                    time[i].im,
                    right[i]
                );
            }
        }
    }

    #[test]
    fn test_half_spectrum_len() {
        assert_eq!(half_spectrum_len(1), 1);
        assert_eq!(half_spectrum_len(2), 2);
        assert_eq!(half_spectrum_len(15), 8);
        assert_eq!(half_spectrum_len(16), 9);
    }

    #[test]
    #[should_panic(expected = "Block must not be empty")]
    fn test_join_rejects_empty_block() {
        let bin = [Complex64::one()];
        join_channels(&bin, &bin, 0);
    }

    #[test]
    #[should_panic]
    fn test_join_rejects_mismatched_channels() {
        let left = vec![Complex64::zero(); 5];
        let right = vec![Complex64::zero(); 4];
        join_channels(&left, &right, 8);
    }
}
