//! # hearsay-core
//!
//! Streaming microphone client SDK for a remote speech-to-text service.
//!
//! ## Architecture
//!
//! ```text
//! Microphone → AudioCapture → SPSC RingBuffer → capture loop (spawn_blocking)
//!                                                    │
//!                                     window → resample → WAV payload
//!                                                    │
//!                                        StreamTransport (websocket)
//!                                            │               │
//!                                      audio_chunk ►    ◄ results
//!                                                    │
//!                            broadcast::Sender<TranscriptionEvent>
//!                                                    │
//!                                          TranscriptAssembler
//! ```
//!
//! The audio callback is zero-alloc. All heap work happens in the capture
//! thread and the async I/O task. Recognition itself runs on the remote
//! service; [`api`] covers its HTTP surface (model listing, preload, status,
//! one-shot file transcription).

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod api;
pub mod audio;
pub mod buffering;
pub mod encode;
pub mod error;
pub mod session;
pub mod transcript;
pub mod transport;

// Convenience re-exports for downstream crates
pub use api::{ModelStatus, RecognizerApi};
pub use error::HearsayError;
pub use session::{SessionConfig, StreamingSession, DEFAULT_STREAM_ENDPOINT};
pub use transcript::{TranscriptAssembler, TranscriptBuffer, TranscriptionEvent};
pub use transport::{ConnectionState, StreamTransport};
