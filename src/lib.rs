//! Discrete Fourier transforms of any length, and the two-channel spectral effects built on
//! top of them.
//!
//! The dispatcher in [`transform`] factors the length and picks one of five backends: direct
//! evaluation, radix-2 Cooley-Tukey, Bluestein's chirp convolution, a mixed-radix split
//! and the Good-Thomas prime-factor split. The last two recurse into the dispatcher.
//!
//! The forward transform is normalized by `1/N`, the inverse transform is not. See
//! [`Direction`].

mod channels;
mod complex;
pub mod effects;
mod error;
mod fft;

pub use channels::{half_spectrum_len, join_channels, split_channels};
pub use complex::Complex64;
pub use error::EffectError;
pub use fft::*;
