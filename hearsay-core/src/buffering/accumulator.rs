//! Accumulates capture frames into fixed-duration sample windows.
//!
//! ## Policy
//!
//! Frames are appended whole. When the buffered total reaches the target the
//! *entire* buffer is handed off (so a window is always ≥ target samples) and
//! accumulation restarts from empty. Windows are non-overlapping; no remainder
//! is carried across a window boundary.

use tracing::trace;

use crate::buffering::frame::{AudioFrame, SampleWindow};

/// Threshold state machine turning a stream of frames into windows.
#[derive(Debug)]
pub struct FrameAccumulator {
    /// Source sample rate (Hz). All pushed frames must carry this rate.
    sample_rate: u32,
    /// Window target in samples: `floor(sample_rate × window_seconds)`.
    target_samples: usize,
    buf: Vec<f32>,
}

impl FrameAccumulator {
    /// Create an accumulator for `window_seconds` of audio at `sample_rate`.
    pub fn new(sample_rate: u32, window_seconds: f32) -> Self {
        let target_samples = (sample_rate as f64 * window_seconds as f64).floor() as usize;
        Self::with_target(sample_rate, target_samples.max(1))
    }

    /// Create an accumulator with an explicit sample target.
    pub fn with_target(sample_rate: u32, target_samples: usize) -> Self {
        Self {
            sample_rate,
            target_samples,
            buf: Vec::with_capacity(target_samples * 2),
        }
    }

    /// Append a frame; returns a materialized window once the target is met.
    ///
    /// Pure accumulation — there are no error states. A mismatched frame rate
    /// is a caller bug and is only logged.
    pub fn push(&mut self, frame: &AudioFrame) -> Option<SampleWindow> {
        if frame.sample_rate != self.sample_rate {
            trace!(
                frame_rate = frame.sample_rate,
                accumulator_rate = self.sample_rate,
                "frame rate does not match accumulator rate"
            );
        }
        self.push_samples(&frame.samples)
    }

    /// Same as [`push`](Self::push) for callers that drain raw slices.
    pub fn push_samples(&mut self, samples: &[f32]) -> Option<SampleWindow> {
        self.buf.extend_from_slice(samples);
        if self.buf.len() < self.target_samples {
            return None;
        }
        let samples = std::mem::take(&mut self.buf);
        trace!(window_len = samples.len(), target = self.target_samples, "window ready");
        Some(SampleWindow::new(samples, self.sample_rate))
    }

    /// Hand off whatever is buffered, even below the target.
    ///
    /// Used at session stop to flush the trailing partial window.
    pub fn drain(&mut self) -> Option<SampleWindow> {
        if self.buf.is_empty() {
            return None;
        }
        let samples = std::mem::take(&mut self.buf);
        Some(SampleWindow::new(samples, self.sample_rate))
    }

    /// Samples currently buffered below the threshold.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Window target in samples.
    pub fn target_samples(&self) -> usize {
        self.target_samples
    }
}
