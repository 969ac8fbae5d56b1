//! Block effects for stereo audio.
//!
//! Every effect processes one block of caller-chosen length. The spectral effects transform
//! the whole block at once, so the block length is also the transform length and may be
//! anything, including a prime.

mod frequency_shift;
mod monoify;
mod normalise;

pub use frequency_shift::FrequencyShift;
pub use monoify::{MonoMode, Monoify};
pub use normalise::Normalise;

use crate::{
    Complex64, EffectError, forward_transform, inverse_transform, join_channels, split_channels,
};

/// Checks that all channels have the same, non-zero length and returns it.
fn block_len(channels: &[usize]) -> Result<usize, EffectError> {
    let len = channels[0];
    if channels.iter().any(|&l| l != len) {
        return Err(EffectError::ChannelLength);
    }
    if len == 0 {
        return Err(EffectError::EmptyBlock);
    }
    Ok(len)
}

/// Forward transform of `left + i·right`, separated into the two channel spectra.
fn analyze(left: &[f32], right: &[f32]) -> (Vec<Complex64>, Vec<Complex64>) {
    let mut packed: Vec<Complex64> = left
        .iter()
        .zip(right)
        .map(|(&l, &r)| Complex64::new(l as f64, r as f64))
        .collect();
    let mut spectrum = vec![Complex64::zero(); packed.len()];

    forward_transform(&mut packed, &mut spectrum);
    split_channels(&spectrum)
}

/// Inverse of [`analyze`]: the real part of the result is the left channel, the imaginary
/// part the right one.
fn synthesize(left: &[Complex64], right: &[Complex64], len: usize) -> Vec<Complex64> {
    let mut spectrum = join_channels(left, right, len);
    let mut block = vec![Complex64::zero(); len];

    inverse_transform(&mut spectrum, &mut block);
    block
}
