mod bluestein;
mod dft;
mod good_thomas;
mod mixed_radix;
mod radix2;
mod strategy;
mod transpose;

pub use strategy::Strategy;
pub use transpose::transpose;

use crate::Complex64;

/// Direction of a transform.
///
/// # Normalization
///
/// The two directions are deliberately asymmetric:
///  - `Forward` divides every output bin by `N`
///  - `Inverse` applies no scaling at all
///
/// A forward+inverse round-trip therefore reproduces the input exactly once, without any
/// manual scaling by the caller. The chirp backend relies on this convention when it uses
/// the unnormalized inverse as its convolution kernel transform, so both directions must
/// change together if it is ever changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Time domain to frequency domain, `e^{-2πi·kn/N}`, normalized by `1/N`.
    Forward,
    /// Frequency domain to time domain, `e^{+2πi·kn/N}`, unnormalized.
    Inverse,
}

impl Direction {
    /// Sign of the exponent of the transform kernel.
    #[inline(always)]
    pub const fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }

    /// Applies the `1/N` scaling of the forward direction.
    fn normalize(self, data: &mut [Complex64]) {
        if self == Direction::Forward {
            let scale = 1.0 / data.len() as f64;
            data.iter_mut().for_each(|x| *x = x.scale(scale));
        }
    }
}

/// Computes the transform of `input` into `output` for any length `N ≥ 1`.
///
/// The algorithm is chosen by [`Strategy::for_len`]. `input` is used as working memory and
/// holds unspecified values afterwards; `output` receives the result in natural order.
///
/// # Accuracy
///
/// Prime lengths go through the chirp backend, whose error grows with the padded length.
/// For very large prime `N` expect a few more ulps of error than the other backends give.
///
/// # Panics
///
/// Panics if `N` is zero or the buffers differ in length.
pub fn transform(direction: Direction, input: &mut [Complex64], output: &mut [Complex64]) {
    assert_eq!(
        input.len(),
        output.len(),
        "Input and output buffers must have the same length"
    );

    match Strategy::for_len(input.len()) {
        Strategy::Direct => dft::dft(direction, input, output),
        Strategy::Radix2 => radix2::radix2(direction, input, output),
        Strategy::Bluestein => bluestein::bluestein(direction, input, output),
        Strategy::MixedRadix { radix } => {
            mixed_radix::mixed_radix(direction, radix, input, output)
        }
        Strategy::GoodThomas { n1, n2 } => {
            good_thomas::good_thomas(direction, n1, n2, input, output)
        }
    }
}

/// Normalized forward transform. See [`transform`].
pub fn forward_transform(input: &mut [Complex64], output: &mut [Complex64]) {
    transform(Direction::Forward, input, output);
}

/// Unnormalized inverse transform. See [`transform`].
pub fn inverse_transform(input: &mut [Complex64], output: &mut [Complex64]) {
    transform(Direction::Inverse, input, output);
}
