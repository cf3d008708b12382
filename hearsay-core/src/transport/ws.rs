//! WebSocket implementation of the duplex link, over tokio-tungstenite.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream,
};
use tracing::debug;

use super::{Dialer, DuplexLink};
use crate::error::{HearsayError, Result};

/// Dials `ws://` / `wss://` endpoints.
#[derive(Debug, Default, Clone, Copy)]
pub struct WsDialer;

/// One established WebSocket connection.
pub struct WsLink {
    inner: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl Dialer for WsDialer {
    type Link = WsLink;

    async fn dial(&self, url: &str) -> Result<WsLink> {
        let (inner, response) = connect_async(url)
            .await
            .map_err(|e| HearsayError::ConnectionFailed(e.to_string()))?;
        debug!(status = %response.status(), "websocket handshake complete");
        Ok(WsLink { inner })
    }
}

impl DuplexLink for WsLink {
    async fn send_text(&mut self, text: String) -> Result<()> {
        self.inner
            .send(Message::Text(text))
            .await
            .map_err(|e| HearsayError::ConnectionFailed(e.to_string()))
    }

    async fn recv_text(&mut self) -> Option<Result<String>> {
        // Pings are answered internally by tungstenite during reads.
        loop {
            match self.inner.next().await? {
                Ok(Message::Text(text)) => return Some(Ok(text)),
                Ok(Message::Close(_)) => return None,
                Ok(Message::Binary(bytes)) => {
                    debug!(len = bytes.len(), "ignoring binary frame from peer");
                }
                Ok(_) => {}
                Err(e) => return Some(Err(HearsayError::ConnectionFailed(e.to_string()))),
            }
        }
    }

    async fn close(&mut self) {
        let _ = self.inner.close(None).await;
    }
}
