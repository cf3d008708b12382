//! Typed audio units flowing through the capture pipeline.

/// One delivery of mono PCM samples from the capture source.
///
/// Frames are ephemeral: the accumulator consumes them immediately and
/// they are never held across pipeline iterations.
#[derive(Debug, Clone)]
pub struct AudioFrame {
    /// Mono f32 samples in [-1.0, 1.0].
    pub samples: Vec<f32>,
    /// Sample rate in Hz as negotiated with the device (e.g. 44100, 48000).
    pub sample_rate: u32,
}

impl AudioFrame {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A contiguous run of frames whose total length reached the window target.
///
/// Owned exclusively by the accumulator until handed off; after handoff the
/// accumulator starts again from empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleWindow {
    /// Mono f32 samples in [-1.0, 1.0].
    pub samples: Vec<f32>,
    /// Sample rate in Hz these samples were captured (or resampled) at.
    pub sample_rate: u32,
}

impl SampleWindow {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Duration of this window in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_duration_reflects_rate() {
        let w = SampleWindow::new(vec![0.0; 8_000], 16_000);
        assert!((w.duration_secs() - 0.5).abs() < 1e-9);
    }
}
