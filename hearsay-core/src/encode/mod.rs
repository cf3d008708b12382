//! Chunk encoding for transport.
//!
//! Two capture policies feed the send path:
//! - raw PCM windows are wrapped into standalone WAV payloads ([`wav`]);
//! - pre-compressed container blocks are batched and concatenated ([`batch`]),
//!   relying on the container format's own self-framing.

pub mod batch;
pub mod wav;

pub use batch::{BatchPolicy, BlockBatcher};
pub use wav::{encode_wav_chunk, WAV_HEADER_LEN};
