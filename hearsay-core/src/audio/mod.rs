//! Microphone capture via the cpal backend.
//!
//! # Design constraints
//!
//! The cpal input callback runs on an OS audio thread at elevated priority.
//! It **must not** allocate unboundedly, block on a mutex, or perform I/O.
//! The callback reuses one mixdown scratch buffer and writes into an SPSC
//! ring buffer producer whose `push_slice` is lock-free.
//!
//! # Threading note
//!
//! `cpal::Stream` is `!Send` on most platforms (COM on Windows, CoreAudio on
//! macOS). `AudioCapture` must be created and dropped on the same thread; the
//! session accomplishes this by opening the device inside `spawn_blocking`.

pub mod device;
pub mod resample;

#[cfg(feature = "audio-cpal")]
use cpal::{
    traits::{DeviceTrait, StreamTrait},
    SampleFormat, SampleRate, Stream, StreamConfig,
};

#[cfg(feature = "audio-cpal")]
use crate::buffering::Producer;
use crate::{
    buffering::AudioProducer,
    error::{HearsayError, Result},
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
#[cfg(feature = "audio-cpal")]
use tracing::{debug, error, info, warn};

/// Requested capture behaviour, negotiated with the platform.
///
/// The processing toggles mirror what a capture stack may offer; they are
/// advisory — a backend without echo cancellation or noise suppression does
/// not fail the acquisition, it just captures unprocessed audio.
#[derive(Debug, Clone)]
pub struct CaptureConstraints {
    /// Requested channel count. Devices with more channels are mixed down.
    pub channel_count: u16,
    pub echo_cancellation: bool,
    pub noise_suppression: bool,
    pub auto_gain: bool,
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self {
            channel_count: 1,
            echo_cancellation: true,
            noise_suppression: true,
            auto_gain: true,
        }
    }
}

/// Handle to an active capture stream.
///
/// Holds the exclusive handle to the physical input device. Dropping the
/// value stops the underlying stream and frees the hardware; `stop()` first
/// so the callback no-ops while the drop is in flight.
///
/// **Not `Send`** — create and drop on the same OS thread.
pub struct AudioCapture {
    /// Kept alive so the stream is not dropped prematurely.
    #[cfg(feature = "audio-cpal")]
    _stream: Stream,
    /// Shared flag — set to `false` to signal the callback to no-op.
    running: Arc<AtomicBool>,
    /// Actual negotiated sample rate reported by the device (Hz).
    ///
    /// This varies per device and OS; all downstream resampling math must
    /// use this value, never an assumed constant.
    pub sample_rate: u32,
}

#[cfg(feature = "audio-cpal")]
fn permissionish(description: &str) -> bool {
    let lowered = description.to_ascii_lowercase();
    lowered.contains("permission") || lowered.contains("denied") || lowered.contains("not permitted")
}

#[cfg(feature = "audio-cpal")]
fn map_backend_error(description: String) -> HearsayError {
    if permissionish(&description) {
        HearsayError::PermissionDenied(description)
    } else {
        HearsayError::DeviceUnavailable(description)
    }
}

impl AudioCapture {
    /// Open an input device by preferred name, otherwise fall back to the
    /// default input device and then the first available device.
    ///
    /// Pushes mono f32 frames into `producer` until `running` goes false.
    ///
    /// # Errors
    /// - `HearsayError::DeviceUnavailable` when no microphone exists or the
    ///   device cannot be configured.
    /// - `HearsayError::PermissionDenied` when the platform refuses access.
    /// - `HearsayError::AudioStream` when cpal fails to build or start the
    ///   stream.
    #[cfg(feature = "audio-cpal")]
    pub fn open(
        producer: AudioProducer,
        running: Arc<AtomicBool>,
        preferred_device_name: Option<&str>,
        constraints: &CaptureConstraints,
    ) -> Result<Self> {
        use cpal::traits::HostTrait;

        if constraints.echo_cancellation || constraints.noise_suppression || constraints.auto_gain {
            // cpal exposes no AEC/NS/AGC knobs; the request is advisory.
            debug!(
                echo_cancellation = constraints.echo_cancellation,
                noise_suppression = constraints.noise_suppression,
                auto_gain = constraints.auto_gain,
                "capture processing toggles requested but not supported by backend"
            );
        }

        let host = cpal::default_host();
        let mut selected_device = None;

        if let Some(preferred_name) = preferred_device_name {
            match host.input_devices() {
                Ok(mut devices) => {
                    selected_device = devices.find(|device| {
                        device
                            .name()
                            .map(|name| name == preferred_name)
                            .unwrap_or(false)
                    });
                    if selected_device.is_none() {
                        warn!(
                            "preferred input device '{}' not found, falling back",
                            preferred_name
                        );
                    }
                }
                Err(e) => {
                    warn!("failed to list input devices while resolving preference: {e}");
                }
            }
        }

        let device = if let Some(device) = selected_device {
            device
        } else if let Some(default) = host.default_input_device() {
            default
        } else {
            let mut devices = host
                .input_devices()
                .map_err(|e| map_backend_error(e.to_string()))?;
            let fallback = devices.next().ok_or_else(|| {
                HearsayError::DeviceUnavailable("no input device found".into())
            })?;
            warn!("no default input device, falling back to first available input");
            fallback
        };

        info!(
            device = device.name().unwrap_or_default().as_str(),
            "opening input device"
        );

        let supported = device.default_input_config().map_err(|e| match e {
            cpal::DefaultStreamConfigError::DeviceNotAvailable => {
                HearsayError::DeviceUnavailable("device disappeared during open".into())
            }
            other => map_backend_error(other.to_string()),
        })?;

        let sample_rate = supported.sample_rate().0;
        let channels = supported.channels();

        info!(
            sample_rate,
            channels,
            requested_channels = constraints.channel_count,
            "audio config negotiated"
        );
        if channels != constraints.channel_count {
            debug!(channels, "device channel count differs from request; mixing down");
        }

        let config = StreamConfig {
            channels,
            sample_rate: SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let stream = match supported.sample_format() {
            SampleFormat::F32 => build_stream::<f32, _>(
                &device,
                &config,
                channels as usize,
                producer,
                Arc::clone(&running),
                |s| s,
            ),
            SampleFormat::I16 => build_stream::<i16, _>(
                &device,
                &config,
                channels as usize,
                producer,
                Arc::clone(&running),
                |s| s as f32 / 32_768.0,
            ),
            SampleFormat::U16 => build_stream::<u16, _>(
                &device,
                &config,
                channels as usize,
                producer,
                Arc::clone(&running),
                |s| (s as f32 - 32_768.0) / 32_768.0,
            ),
            fmt => {
                return Err(HearsayError::AudioStream(format!(
                    "unsupported sample format: {fmt:?}"
                )))
            }
        }
        .map_err(|e| match e {
            cpal::BuildStreamError::DeviceNotAvailable => {
                HearsayError::DeviceUnavailable("device disappeared during open".into())
            }
            cpal::BuildStreamError::BackendSpecific { err } => map_backend_error(err.description),
            other => HearsayError::AudioStream(other.to_string()),
        })?;

        stream
            .play()
            .map_err(|e| HearsayError::AudioStream(e.to_string()))?;

        Ok(Self {
            _stream: stream,
            running,
            sample_rate,
        })
    }

    /// Stop: signal the callback to no-op on its next invocation.
    ///
    /// The hardware is released when the value is dropped.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }
}

/// Build an input stream for sample type `T`, converting to f32 and mixing
/// all channels down to mono before pushing into the ring.
#[cfg(feature = "audio-cpal")]
fn build_stream<T, F>(
    device: &cpal::Device,
    config: &StreamConfig,
    channels: usize,
    mut producer: AudioProducer,
    running: Arc<AtomicBool>,
    to_f32: F,
) -> std::result::Result<Stream, cpal::BuildStreamError>
where
    T: cpal::SizedSample + Send + 'static,
    F: Fn(T) -> f32 + Send + 'static,
{
    let mut mix_buf: Vec<f32> = Vec::new();
    device.build_input_stream(
        config,
        move |data: &[T], _info| {
            if !running.load(Ordering::Relaxed) {
                return;
            }
            let frames = data.len() / channels;
            mix_buf.resize(frames, 0.0);
            if channels == 1 {
                for (dst, s) in mix_buf.iter_mut().zip(data.iter()) {
                    *dst = to_f32(*s);
                }
            } else {
                for f in 0..frames {
                    let base = f * channels;
                    let mut sum = 0f32;
                    for c in 0..channels {
                        sum += to_f32(data[base + c]);
                    }
                    mix_buf[f] = sum / channels as f32;
                }
            }
            let written = producer.push_slice(&mix_buf);
            if written < mix_buf.len() {
                warn!(
                    "ring buffer full: dropped {} frames",
                    mix_buf.len() - written
                );
            }
        },
        |err| error!("audio stream error: {err}"),
        None,
    )
}

/// Stub when the `audio-cpal` feature is disabled.
#[cfg(not(feature = "audio-cpal"))]
impl AudioCapture {
    pub fn open(
        _producer: AudioProducer,
        running: Arc<AtomicBool>,
        _preferred_device_name: Option<&str>,
        _constraints: &CaptureConstraints,
    ) -> Result<Self> {
        let _ = running;
        Err(HearsayError::AudioStream(
            "compiled without audio-cpal feature".into(),
        ))
    }
}

#[cfg(all(test, not(feature = "audio-cpal")))]
mod tests {
    use super::*;
    use crate::buffering::create_audio_ring;

    #[test]
    fn open_without_backend_reports_audio_stream_error() {
        let (producer, _consumer) = create_audio_ring();
        let err = AudioCapture::open(
            producer,
            Arc::new(AtomicBool::new(true)),
            None,
            &CaptureConstraints::default(),
        )
        .unwrap_err();
        assert!(matches!(err, HearsayError::AudioStream(_)));
    }
}
