use super::block_len;
use crate::EffectError;

/// Scales a stereo block so its loudest sample sits at a target peak level.
///
/// Both channels share one gain, so the stereo balance is kept. A silent block is copied
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalise {
    /// Target peak in dBFS.
    pub peak_db: f32,
}

impl Normalise {
    pub fn new(peak_db: f32) -> Self {
        Self { peak_db }
    }

    /// Linear amplitude of the target peak.
    pub fn threshold(&self) -> f32 {
        10f32.powf(self.peak_db / 20.0)
    }

    pub fn process(
        &self,
        left: &[f32],
        right: &[f32],
        left_out: &mut [f32],
        right_out: &mut [f32],
    ) -> Result<(), EffectError> {
        block_len(&[left.len(), right.len(), left_out.len(), right_out.len()])?;
        if !self.peak_db.is_finite() {
            return Err(EffectError::InvalidParameter);
        }

        let peak = left
            .iter()
            .chain(right)
            .fold(0.0f32, |peak, x| peak.max(x.abs()));
        let ratio = if peak > 0.0 { self.threshold() / peak } else { 1.0 };

        for (out, x) in left_out.iter_mut().zip(left) {
            *out = ratio * x;
        }
        for (out, x) in right_out.iter_mut().zip(right) {
            *out = ratio * x;
        }

        Ok(())
    }
}
