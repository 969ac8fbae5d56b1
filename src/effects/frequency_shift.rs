use super::{analyze, block_len, synthesize};
use crate::{Complex64, EffectError};

/// Content below this frequency is dropped by the shifter.
const MIN_FREQUENCY: f64 = 15.0;

/// Shifts every frequency of a stereo block by a fixed amount.
///
/// The shift is quantized to whole bins of the block transform, `sample_rate / N` apart.
/// Content that would move below 15 Hz or above Nyquist is dropped, as is everything that
/// starts below 15 Hz. For even `N` the Nyquist bin itself is neither read nor written, since
/// it can only hold a real value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyShift {
    /// Shift in Hz. Negative values shift down.
    pub hertz: f64,
    /// Sample rate of the block in Hz.
    pub sample_rate: f64,
}

impl FrequencyShift {
    pub fn new(hertz: f64, sample_rate: f64) -> Self {
        Self { hertz, sample_rate }
    }

    /// Shifts `left`/`right` into `left_out`/`right_out`.
    pub fn process(
        &self,
        left: &[f32],
        right: &[f32],
        left_out: &mut [f32],
        right_out: &mut [f32],
    ) -> Result<(), EffectError> {
        let len = block_len(&[left.len(), right.len(), left_out.len(), right_out.len()])?;
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0 && self.hertz.is_finite()) {
            return Err(EffectError::InvalidParameter);
        }

        let (left_spectrum, right_spectrum) = analyze(left, right);
        // Bins below the even-length Nyquist bin.
        let shiftable = len.div_ceil(2) as isize;

        let freq_step = self.sample_rate / len as f64;
        let min_bin = ((MIN_FREQUENCY / freq_step) as isize).min(shiftable);
        // Shifts beyond the spectrum move everything out of range.
        let bin_shift = ((self.hertz / freq_step) as isize).clamp(-shiftable, shiftable);

        let mut left_shifted = vec![Complex64::zero(); left_spectrum.len()];
        let mut right_shifted = vec![Complex64::zero(); right_spectrum.len()];

        let start = min_bin + (-bin_shift).max(0);
        let end = shiftable - bin_shift.max(0);
        for bin in start..end {
            let target = (bin + bin_shift) as usize;
            left_shifted[target] = left_spectrum[bin as usize];
            right_shifted[target] = right_spectrum[bin as usize];
        }

        let block = synthesize(&left_shifted, &right_shifted, len);
        for ((sample, l), r) in block.iter().zip(left_out.iter_mut()).zip(right_out.iter_mut()) {
            *l = sample.re as f32;
            *r = sample.im as f32;
        }

        Ok(())
    }
}
