//! Blocking capture-side loop.
//!
//! ## Stages (per iteration)
//!
//! ```text
//! 1. Drain ring buffer → &[f32] (one chunk per iteration)
//! 2. Accumulate at the capture sample rate until a window fills
//! 3. Resample the window to the target rate (passthrough when equal)
//! 4. Wrap the window into a standalone WAV payload
//! 5. Hand the payload to the async send task over a bounded channel
//! ```
//!
//! The loop runs in `spawn_blocking`, keeping the Tokio executor free for the
//! websocket I/O. On stop, any samples short of a full window are flushed as
//! one last undersized payload (when the session asks for it).

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    audio::resample::LinearResampler,
    buffering::{accumulator::FrameAccumulator, frame::SampleWindow, AudioConsumer, Consumer},
    encode::wav::encode_window,
};

/// Chunk size drained from the ring buffer per iteration.
/// 20 ms at 48 kHz = 960 samples; well under any window length, so windows
/// fill from several drains rather than one oversized read.
const DRAIN_CHUNK: usize = 960;

/// Sleep when the ring is empty (avoids busy-wait burning a core).
const SLEEP_EMPTY_MS: u64 = 5;

/// Shared counters for observability, written by the capture loop.
#[derive(Debug, Default)]
pub struct CaptureStats {
    pub samples_in: AtomicUsize,
    pub windows_encoded: AtomicUsize,
    pub payload_bytes: AtomicUsize,
}

impl CaptureStats {
    pub fn snapshot(&self) -> CaptureStatsSnapshot {
        CaptureStatsSnapshot {
            samples_in: self.samples_in.load(Ordering::Relaxed),
            windows_encoded: self.windows_encoded.load(Ordering::Relaxed),
            payload_bytes: self.payload_bytes.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.samples_in.store(0, Ordering::Relaxed);
        self.windows_encoded.store(0, Ordering::Relaxed);
        self.payload_bytes.store(0, Ordering::Relaxed);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CaptureStatsSnapshot {
    pub samples_in: usize,
    pub windows_encoded: usize,
    pub payload_bytes: usize,
}

/// Accumulate → resample → encode, one window at a time.
///
/// Pure and synchronous, so the windowing math is testable without a device
/// or a network in sight.
pub struct WindowPipeline {
    accumulator: FrameAccumulator,
    resampler: LinearResampler,
}

impl WindowPipeline {
    /// `capture_rate` is the negotiated device rate; windows come out
    /// resampled to `target_rate` and `window_seconds` long (measured at the
    /// capture rate, before resampling).
    pub fn new(capture_rate: u32, target_rate: u32, window_seconds: f32) -> Self {
        Self {
            accumulator: FrameAccumulator::new(capture_rate, window_seconds),
            resampler: LinearResampler::new(capture_rate, target_rate),
        }
    }

    /// Feed captured samples; returns an encoded payload when a window fills.
    pub fn ingest(&mut self, samples: &[f32]) -> Option<Vec<u8>> {
        let window = self.accumulator.push_samples(samples)?;
        Some(self.encode(window))
    }

    /// Flush whatever is buffered as one final undersized payload.
    pub fn finish(&mut self) -> Option<Vec<u8>> {
        let window = self.accumulator.drain()?;
        Some(self.encode(window))
    }

    /// Samples currently buffered short of a window.
    pub fn buffered(&self) -> usize {
        self.accumulator.buffered()
    }

    fn encode(&self, window: SampleWindow) -> Vec<u8> {
        let resampled = self.resampler.resample_window(&window);
        encode_window(&resampled)
    }
}

/// All context the capture loop needs, passed as one struct so the closure
/// stays tidy.
pub struct CaptureContext {
    pub consumer: AudioConsumer,
    pub running: Arc<AtomicBool>,
    pub pipeline: WindowPipeline,
    /// Encoded payloads travel to the async send task through here. The
    /// receiver going away means the session tore down the I/O side; the
    /// loop exits rather than capture into the void.
    pub payload_tx: mpsc::Sender<Vec<u8>>,
    /// Flush the buffered tail as a final short payload on stop.
    pub flush_final_window: bool,
    pub stats: Arc<CaptureStats>,
}

/// Run the blocking capture loop until `ctx.running` becomes false.
pub fn run(mut ctx: CaptureContext) {
    info!("capture loop started");

    let mut raw = vec![0f32; DRAIN_CHUNK];

    loop {
        if !ctx.running.load(Ordering::Relaxed) {
            break;
        }

        let n = ctx.consumer.pop_slice(&mut raw);
        if n == 0 {
            std::thread::sleep(std::time::Duration::from_millis(SLEEP_EMPTY_MS));
            continue;
        }
        ctx.stats.samples_in.fetch_add(n, Ordering::Relaxed);

        if let Some(payload) = ctx.pipeline.ingest(&raw[..n]) {
            if !forward(&ctx, payload) {
                break;
            }
        }
    }

    if ctx.flush_final_window {
        if let Some(payload) = ctx.pipeline.finish() {
            debug!(bytes = payload.len(), "flushing undersized final window");
            forward(&ctx, payload);
        }
    }

    let snap = ctx.stats.snapshot();
    info!(
        samples_in = snap.samples_in,
        windows_encoded = snap.windows_encoded,
        payload_bytes = snap.payload_bytes,
        "capture loop stopped"
    );
}

fn forward(ctx: &CaptureContext, payload: Vec<u8>) -> bool {
    ctx.stats.windows_encoded.fetch_add(1, Ordering::Relaxed);
    ctx.stats
        .payload_bytes
        .fetch_add(payload.len(), Ordering::Relaxed);
    if ctx.payload_tx.blocking_send(payload).is_err() {
        warn!("payload channel closed, stopping capture loop");
        return false;
    }
    true
}
