use core::f64::consts::SQRT_2;

use super::{analyze, block_len, synthesize};
use crate::{Complex64, EffectError};

/// How the two channel spectra are combined into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonoMode {
    /// `sqrt(L·R)`
    GeometricMean,
    /// `sqrt((L² + R²) / 2)`
    Rms,
    /// Per component: `sign(l + r) · (|l| + |r|) / 2`
    AbsSum,
    /// Per component: `sign(l + r) · hypot(l, r) / √2`
    ComponentwiseRms,
}

impl MonoMode {
    fn combine(self, l: Complex64, r: Complex64) -> Complex64 {
        match self {
            MonoMode::GeometricMean => l.mul(&r).sqrt(),
            MonoMode::Rms => l.mul(&l).add(&r.mul(&r)).scale(0.5).sqrt(),
            MonoMode::AbsSum => Complex64::new(
                1f64.copysign(l.re + r.re) * (l.re.abs() + r.re.abs()),
                1f64.copysign(l.im + r.im) * (l.im.abs() + r.im.abs()),
            )
            .scale(0.5),
            MonoMode::ComponentwiseRms => Complex64::new(
                1f64.copysign(l.re + r.re) * l.re.hypot(r.re),
                1f64.copysign(l.im + r.im) * l.im.hypot(r.im),
            )
            .scale(1.0 / SQRT_2),
        }
    }
}

/// Downmixes a stereo block to mono in the frequency domain.
///
/// Each bin of the mono spectrum is a combination of the left and right bins (see
/// [`MonoMode`]). If the result peaks above full scale, the whole block is scaled back to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monoify {
    pub mode: MonoMode,
}

impl Monoify {
    pub fn new(mode: MonoMode) -> Self {
        Self { mode }
    }

    /// Downmixes `left`/`right` into `output`.
    pub fn process(
        &self,
        left: &[f32],
        right: &[f32],
        output: &mut [f32],
    ) -> Result<(), EffectError> {
        let len = block_len(&[left.len(), right.len(), output.len()])?;

        let (left_spectrum, right_spectrum) = analyze(left, right);
        let mono: Vec<Complex64> = left_spectrum
            .iter()
            .zip(right_spectrum.iter())
            .map(|(&l, &r)| self.mode.combine(l, r))
            .collect();

        let block = synthesize(&mono, &mono, len);
        for (sample, out) in block.iter().zip(output.iter_mut()) {
            *out = sample.re as f32;
        }

        let peak = output.iter().fold(1.0f32, |peak, x| peak.max(x.abs()));
        if peak > 1.0 {
            let ratio = 1.0 / peak;
            output.iter_mut().for_each(|x| *x *= ratio);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::PI;

    use super::*;

    const EPSILON: f32 = 1e-5;
    const MODES: &[MonoMode] = &[
        MonoMode::GeometricMean,
        MonoMode::Rms,
        MonoMode::AbsSum,
        MonoMode::ComponentwiseRms,
    ];

    fn tone(len: usize, cycles: f64, amplitude: f64) -> Vec<f32> {
        (0..len)
            .map(|i| (amplitude * (2.0 * PI * cycles * i as f64 / len as f64).sin()) as f32)
            .collect()
    }

    fn monoify(mode: MonoMode, left: &[f32], right: &[f32]) -> Vec<f32> {
        let mut output = vec![0.0; left.len()];
        Monoify::new(mode).process(left, right, &mut output).unwrap();
        output
    }

    #[test]
    fn test_identical_channels_pass_through() {
        // With L = R both per-component modes reduce to the identity.
        let signal = tone(120, 5.0, 0.5);

        for &mode in &[MonoMode::AbsSum, MonoMode::ComponentwiseRms] {
            let output = monoify(mode, &signal, &signal);
            for (i, (a, e)) in output.iter().zip(&signal).enumerate() {
                assert!((a - e).abs() < EPSILON, "{mode:?}: sample {i}: {a} != {e}");
            }
        }
    }

    #[test]
    fn test_output_never_exceeds_full_scale() {
        let left = tone(97, 3.0, 0.9);
        let right = tone(97, 7.0, 0.9);

        for &mode in MODES {
            let output = monoify(mode, &left, &right);
            assert!(
                output.iter().all(|x| x.is_finite() && x.abs() <= 1.0 + EPSILON),
                "{mode:?}: output exceeds full scale"
            );
        }
    }

    #[test]
    fn test_loud_block_is_scaled_to_full_scale() {
        let signal = tone(64, 4.0, 3.0);
        let output = monoify(MonoMode::AbsSum, &signal, &signal);

        let peak = output.iter().fold(0.0f32, |peak, x| peak.max(x.abs()));
        assert!((peak - 1.0).abs() < EPSILON, "peak {peak}");
    }

    #[test]
    fn test_geometric_mean_of_equal_bins() {
        let l = Complex64::new(0.0, -0.25);
        let combined = MonoMode::GeometricMean.combine(l, l);
        // sqrt(l²) is ±l; the principal root has a non-negative real part.
        assert!((combined.abs() - l.abs()).abs() < 1e-12);
        assert!(combined.re >= 0.0);
    }

    #[test]
    fn test_rms_of_opposite_bins() {
        let l = Complex64::new(0.5, 0.0);
        let r = Complex64::new(-0.5, 0.0);
        let combined = MonoMode::Rms.combine(l, r);
        assert!((combined.re - 0.5).abs() < 1e-12 && combined.im.abs() < 1e-12);
    }

    #[test]
    fn test_rejects_mismatched_channels() {
        let mut output = vec![0.0; 4];
        let result = Monoify::new(MonoMode::Rms).process(&[0.0; 4], &[0.0; 5], &mut output);
        assert_eq!(result, Err(EffectError::ChannelLength));
    }
}
