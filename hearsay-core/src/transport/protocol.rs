//! Wire messages exchanged over the duplex streaming endpoint.
//!
//! Two endpoint dialects share the same tagged-union layout:
//! - the general live endpoint tags chunks with `model` and `chunk_id` and
//!   echoes `chunk_id` back on results;
//! - the continuous-recognizer endpoint omits both and instead marks results
//!   with `partial` and `confidence`.
//!
//! Optional fields cover both: absent fields are defaulted on receive and
//! skipped on send.

use serde::{Deserialize, Serialize};

use crate::transcript::TranscriptionEvent;

/// Client → server messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// One audio payload, base64-encoded.
    AudioChunk {
        audio: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        model: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        chunk_id: Option<u64>,
    },
    /// Advisory end-of-stream: lets the peer finalize in-flight recognition
    /// state. No reply is awaited.
    StopStream,
}

/// Server → client messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Transcription {
        text: String,
        /// `true` for a revisable hypothesis, `false` for committed text.
        /// The general endpoint omits it — results there are always final.
        #[serde(default)]
        partial: bool,
        #[serde(default)]
        confidence: f32,
        #[serde(default)]
        chunk_id: Option<u64>,
    },
    Error {
        message: String,
    },
}

impl From<ServerMessage> for TranscriptionEvent {
    fn from(msg: ServerMessage) -> Self {
        match msg {
            ServerMessage::Transcription {
                text,
                partial: true,
                confidence,
                ..
            } => TranscriptionEvent::Partial { text, confidence },
            ServerMessage::Transcription {
                text, confidence, ..
            } => TranscriptionEvent::Final { text, confidence },
            ServerMessage::Error { message } => TranscriptionEvent::Error { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_chunk_serializes_with_snake_case_tag() {
        let msg = ClientMessage::AudioChunk {
            audio: "QUJD".into(),
            model: Some("german-large".into()),
            chunk_id: Some(7),
        };
        let json = serde_json::to_value(&msg).expect("serialize");
        assert_eq!(json["type"], "audio_chunk");
        assert_eq!(json["audio"], "QUJD");
        assert_eq!(json["model"], "german-large");
        assert_eq!(json["chunk_id"], 7);
    }

    #[test]
    fn continuous_dialect_omits_model_and_chunk_id() {
        let msg = ClientMessage::AudioChunk {
            audio: "QUJD".into(),
            model: None,
            chunk_id: None,
        };
        let json = serde_json::to_value(&msg).expect("serialize");
        assert!(json.get("model").is_none());
        assert!(json.get("chunk_id").is_none());
    }

    #[test]
    fn stop_stream_is_a_bare_tag() {
        let json = serde_json::to_string(&ClientMessage::StopStream).expect("serialize");
        assert_eq!(json, r#"{"type":"stop_stream"}"#);
    }

    #[test]
    fn transcription_defaults_missing_fields() {
        // General endpoint shape: only text + chunk_id.
        let msg: ServerMessage =
            serde_json::from_str(r#"{"type":"transcription","text":"hallo","chunk_id":3}"#)
                .expect("deserialize");
        assert_eq!(
            msg,
            ServerMessage::Transcription {
                text: "hallo".into(),
                partial: false,
                confidence: 0.0,
                chunk_id: Some(3),
            }
        );
    }

    #[test]
    fn partial_flag_maps_to_partial_event() {
        let msg: ServerMessage = serde_json::from_str(
            r#"{"type":"transcription","text":"hal","partial":true,"confidence":0.4}"#,
        )
        .expect("deserialize");
        assert_eq!(
            TranscriptionEvent::from(msg),
            TranscriptionEvent::Partial {
                text: "hal".into(),
                confidence: 0.4
            }
        );
    }

    #[test]
    fn error_maps_to_error_event() {
        let msg: ServerMessage =
            serde_json::from_str(r#"{"type":"error","message":"boom"}"#).expect("deserialize");
        assert_eq!(
            TranscriptionEvent::from(msg),
            TranscriptionEvent::Error {
                message: "boom".into()
            }
        );
    }

    #[test]
    fn unknown_type_fails_to_parse() {
        let res = serde_json::from_str::<ServerMessage>(r#"{"type":"heartbeat"}"#);
        assert!(res.is_err());
    }
}
