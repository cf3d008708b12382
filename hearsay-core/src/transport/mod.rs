//! Duplex transport to the streaming recognition endpoint.
//!
//! ## State machine
//!
//! ```text
//! Disconnected ──connect()──► Connecting ──handshake ok──► Connected
//!       ▲                          │                           │
//!       └───handshake failure──────┘                           │
//!       ◄──────────disconnect() / link closed──────────────────┘
//! ```
//!
//! Transitions are driven solely by link lifecycle, never by application
//! logic writing `Connected` directly. The transport is generic over a
//! [`Dialer`]/[`DuplexLink`] pair so the state machine is testable with a
//! scripted link; [`ws`] provides the real tokio-tungstenite implementation.

pub mod protocol;
pub mod ws;

use std::future::Future;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{HearsayError, Result};
use crate::transcript::TranscriptionEvent;
use protocol::{ClientMessage, ServerMessage};

/// Lifecycle state of the duplex connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

/// A text-message duplex channel. One implementor per networking backend.
///
/// Methods return `impl Future + Send` (rather than plain `async fn`) so the
/// I/O task stays spawnable when generic over the link; implementors still
/// write `async fn`.
pub trait DuplexLink: Send {
    /// Transmit one text frame. Completion means "accepted for
    /// transmission", not "acknowledged by peer".
    fn send_text(&mut self, text: String) -> impl Future<Output = Result<()>> + Send;

    /// Receive the next text frame. `None` means the peer closed the link.
    fn recv_text(&mut self) -> impl Future<Output = Option<Result<String>>> + Send;

    /// Close the link. Best-effort; errors are swallowed.
    fn close(&mut self) -> impl Future<Output = ()> + Send;
}

/// Establishes a [`DuplexLink`] to an endpoint URL.
pub trait Dialer: Send {
    type Link: DuplexLink;

    fn dial(&self, url: &str) -> impl Future<Output = Result<Self::Link>> + Send;
}

/// Owns one persistent duplex connection and the outbound chunk counter.
///
/// Exclusively owned by one session; reconnecting after a disconnect means a
/// fresh handshake, never handle reuse.
pub struct StreamTransport<D: Dialer> {
    dialer: D,
    endpoint: String,
    /// Model name embedded in outgoing chunks (general endpoint dialect).
    model: Option<String>,
    /// Tag outgoing chunks with a sequence id the peer can reorder by.
    tag_chunk_ids: bool,
    state: ConnectionState,
    link: Option<D::Link>,
    next_chunk_id: u64,
}

impl<D: Dialer> StreamTransport<D> {
    pub fn new(dialer: D, endpoint: impl Into<String>, model: Option<String>) -> Self {
        let model = model.filter(|m| !m.is_empty());
        Self {
            dialer,
            endpoint: endpoint.into(),
            // The general dialect carries both model and chunk ids.
            tag_chunk_ids: model.is_some(),
            model,
            state: ConnectionState::Disconnected,
            link: None,
            next_chunk_id: 0,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// Perform the connection handshake.
    ///
    /// Resolves once the handshake completes; on failure the state returns
    /// to `Disconnected` — it never transiently reports `Connected`.
    pub async fn connect(&mut self) -> Result<()> {
        if self.state == ConnectionState::Connected {
            return Ok(());
        }
        self.state = ConnectionState::Connecting;
        match self.dialer.dial(&self.endpoint).await {
            Ok(link) => {
                self.link = Some(link);
                self.state = ConnectionState::Connected;
                info!(endpoint = %self.endpoint, "stream connected");
                Ok(())
            }
            Err(e) => {
                self.state = ConnectionState::Disconnected;
                Err(HearsayError::ConnectionFailed(e.to_string()))
            }
        }
    }

    /// Serialize and transmit one audio payload.
    ///
    /// Returns the chunk id assigned to this payload (when tagging is on).
    ///
    /// # Errors
    /// - `HearsayError::NotConnected` outside the `Connected` state; checked
    ///   before any serialization or I/O is attempted.
    /// - `HearsayError::ConnectionFailed` when the link rejects the write;
    ///   the transport then transitions to `Disconnected`.
    pub async fn send_chunk(&mut self, payload: &[u8]) -> Result<Option<u64>> {
        if self.state != ConnectionState::Connected {
            return Err(HearsayError::NotConnected);
        }

        let chunk_id = if self.tag_chunk_ids {
            let id = self.next_chunk_id;
            self.next_chunk_id += 1;
            Some(id)
        } else {
            None
        };

        let msg = ClientMessage::AudioChunk {
            audio: BASE64.encode(payload),
            model: self.model.clone(),
            chunk_id,
        };
        let text = serde_json::to_string(&msg)
            .map_err(|e| HearsayError::EncodingFailed(e.to_string()))?;

        debug!(bytes = payload.len(), ?chunk_id, "sending audio chunk");
        let link = self.link.as_mut().ok_or(HearsayError::NotConnected)?;
        if let Err(e) = link.send_text(text).await {
            // A failed write means the connection is gone.
            self.drop_link();
            return Err(HearsayError::ConnectionFailed(e.to_string()));
        }
        Ok(chunk_id)
    }

    /// Send the advisory `stop_stream` control message.
    ///
    /// Lets the peer finalize in-flight recognition; no reply is awaited and
    /// failure is non-fatal.
    pub async fn send_stop(&mut self) -> Result<()> {
        if self.state != ConnectionState::Connected {
            return Err(HearsayError::NotConnected);
        }
        let text = serde_json::to_string(&ClientMessage::StopStream)
            .map_err(|e| HearsayError::EncodingFailed(e.to_string()))?;
        let link = self.link.as_mut().ok_or(HearsayError::NotConnected)?;
        if let Err(e) = link.send_text(text).await {
            self.drop_link();
            return Err(HearsayError::ConnectionFailed(e.to_string()));
        }
        Ok(())
    }

    /// Receive the next transcription event.
    ///
    /// Unparseable inbound frames are logged and skipped. Returns `None`
    /// when the link closes (transitioning to `Disconnected`) or when called
    /// while not connected.
    pub async fn recv_event(&mut self) -> Option<TranscriptionEvent> {
        loop {
            let link = self.link.as_mut()?;
            match link.recv_text().await {
                Some(Ok(text)) => match serde_json::from_str::<ServerMessage>(&text) {
                    Ok(msg) => return Some(msg.into()),
                    Err(e) => {
                        warn!(error = %e, "skipping unparseable frame from peer");
                    }
                },
                Some(Err(e)) => {
                    warn!(error = %e, "stream read failed");
                    self.drop_link();
                    return None;
                }
                None => {
                    info!("peer closed the stream");
                    self.drop_link();
                    return None;
                }
            }
        }
    }

    /// Tear down the connection. Idempotent; safe before `connect()` and
    /// safe to call repeatedly.
    pub async fn disconnect(&mut self) {
        if let Some(mut link) = self.link.take() {
            link.close().await;
        }
        self.state = ConnectionState::Disconnected;
    }

    fn drop_link(&mut self) {
        self.link = None;
        self.state = ConnectionState::Disconnected;
    }
}
