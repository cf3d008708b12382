//! Standalone WAV payloads for streaming chunks.
//!
//! Each chunk must be independently decodable: the peer may hand every chunk
//! to a fresh decoder, so every payload carries a full self-describing header.
//! Layout is the classic 44-byte RIFF/WAVE header (PCM, mono, 16-bit,
//! little-endian) followed by the sample data.

use crate::buffering::frame::SampleWindow;

/// Fixed header length of a PCM WAV payload.
pub const WAV_HEADER_LEN: usize = 44;

/// Wrap a window of f32 samples into a self-contained WAV payload.
///
/// Samples are clamped to [-1, 1], scaled by 32767 and rounded to i16.
/// An empty window produces a valid 44-byte header declaring zero data —
/// never an error.
pub fn encode_wav_chunk(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let riff_len = 36u32 + data_len;

    let mut out = Vec::with_capacity(WAV_HEADER_LEN + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&riff_len.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes()); // PCM fmt chunk size
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&sample_rate.to_le_bytes());
    let byte_rate = sample_rate * 2;
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for &sample in samples {
        let v = (sample.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16;
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}

/// Convenience wrapper taking a resampled window.
pub fn encode_window(window: &SampleWindow) -> Vec<u8> {
    encode_wav_chunk(&window.samples, window.sample_rate)
}
