//! Sample-rate conversion by linear interpolation.
//!
//! ## Design
//!
//! Capture runs at the device's native rate (commonly 44.1 or 48 kHz); the
//! recognizer wants 16 kHz mono. A non-bandlimited linear interpolator is
//! enough here: the accepted accuracy loss is a deliberate tradeoff for a
//! real-time streaming path, and the downstream recognizer is tolerant of it.
//! This is not a substitute for an offline bandlimited resampler.
//!
//! When source rate == target rate the converter is an identity passthrough.

use crate::buffering::frame::SampleWindow;

/// Converts f32 mono audio from one fixed sample rate to another.
#[derive(Debug, Clone, Copy)]
pub struct LinearResampler {
    from_rate: u32,
    to_rate: u32,
}

impl LinearResampler {
    pub fn new(from_rate: u32, to_rate: u32) -> Self {
        Self { from_rate, to_rate }
    }

    /// `true` when source rate == target rate (no conversion occurs).
    pub fn is_passthrough(&self) -> bool {
        self.from_rate == self.to_rate
    }

    /// Resample a slice of samples.
    ///
    /// Output length is `floor(input_len × to_rate / from_rate)`. Each output
    /// index `i` maps to source position `p = i × from/to`; the sample is the
    /// linear blend of `floor(p)` and `min(floor(p)+1, len-1)` weighted by the
    /// fractional part of `p`. Empty input yields empty output.
    pub fn resample(&self, input: &[f32]) -> Vec<f32> {
        if self.is_passthrough() {
            return input.to_vec();
        }
        if input.is_empty() {
            return Vec::new();
        }

        let ratio = self.from_rate as f64 / self.to_rate as f64;
        let out_len = (input.len() as f64 / ratio).floor() as usize;
        let mut out = Vec::with_capacity(out_len);

        for i in 0..out_len {
            let p = i as f64 * ratio;
            let lo = p.floor() as usize;
            let hi = (lo + 1).min(input.len() - 1);
            let t = (p - lo as f64) as f32;
            out.push(input[lo] * (1.0 - t) + input[hi] * t);
        }
        out
    }

    /// Resample a whole window, retagging it with the target rate.
    pub fn resample_window(&self, window: &SampleWindow) -> SampleWindow {
        if self.is_passthrough() {
            return window.clone();
        }
        SampleWindow::new(self.resample(&window.samples), self.to_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_when_rates_match() {
        let rs = LinearResampler::new(16_000, 16_000);
        assert!(rs.is_passthrough());
        let samples: Vec<f32> = (0..480).map(|i| (i as f32 * 0.01).sin()).collect();
        assert_eq!(rs.resample(&samples), samples);
    }

    #[test]
    fn output_length_follows_rate_ratio() {
        let rs = LinearResampler::new(48_000, 16_000);
        let out = rs.resample(&vec![0.0; 960]);
        let expected = (960usize * 16_000) / 48_000;
        assert!(
            (out.len() as isize - expected as isize).unsigned_abs() <= 1,
            "len={} expected≈{}",
            out.len(),
            expected
        );
    }

    #[test]
    fn output_length_for_non_integer_ratio() {
        let rs = LinearResampler::new(44_100, 16_000);
        let out = rs.resample(&vec![0.0; 22_050]);
        let expected = ((22_050f64 * 16_000.0) / 44_100.0).floor() as usize;
        assert!((out.len() as isize - expected as isize).unsigned_abs() <= 1);
    }

    #[test]
    fn interpolates_linearly_on_downsample_by_two() {
        // Downsampling a ramp by exactly 2 lands on even source indices.
        let rs = LinearResampler::new(32_000, 16_000);
        let input: Vec<f32> = (0..8).map(|i| i as f32).collect();
        let out = rs.resample(&input);
        assert_eq!(out.len(), 4);
        for (i, v) in out.iter().enumerate() {
            assert_relative_eq!(*v, (i * 2) as f32, epsilon = 1e-6);
        }
    }

    #[test]
    fn upsample_blends_between_neighbours() {
        let rs = LinearResampler::new(8_000, 16_000);
        let input = vec![0.0f32, 1.0];
        let out = rs.resample(&input);
        assert_eq!(out.len(), 4);
        assert_relative_eq!(out[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(out[1], 0.5, epsilon = 1e-6);
        // Positions past the last sample clamp to it.
        assert_relative_eq!(out[2], 1.0, epsilon = 1e-6);
        assert_relative_eq!(out[3], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let rs = LinearResampler::new(48_000, 16_000);
        assert!(rs.resample(&[]).is_empty());
    }

    #[test]
    fn window_is_retagged_with_target_rate() {
        let rs = LinearResampler::new(48_000, 16_000);
        let window = SampleWindow::new(vec![0.5; 4_800], 48_000);
        let out = rs.resample_window(&window);
        assert_eq!(out.sample_rate, 16_000);
        assert_eq!(out.len(), 1_600);
    }
}
