//! Reconciles partial/final transcription events into one display buffer.

use serde::{Deserialize, Serialize};

/// One transcription result received from the recognizer.
///
/// Events arrive asynchronously and are unordered with respect to chunk
/// submission: the peer may emit results for chunk N after chunk N+1 was
/// already sent. Within a session the transport delivers them in emission
/// order; the assembler performs no reordering of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TranscriptionEvent {
    /// Provisional hypothesis — replaced wholesale by the next partial.
    Partial { text: String, confidence: f32 },
    /// Committed text — appended permanently, never revised.
    Final { text: String, confidence: f32 },
    /// Server-reported failure; carries no text state.
    Error { message: String },
}

/// Accumulated transcript state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptBuffer {
    /// Append-only committed text.
    pub finalized: String,
    /// The latest in-flight partial; cleared by each final.
    pub live_partial: String,
}

impl TranscriptBuffer {
    /// Finalized text followed by the live partial, for display.
    pub fn display(&self) -> String {
        if self.live_partial.is_empty() {
            return self.finalized.clone();
        }
        if self.finalized.is_empty() {
            return self.live_partial.clone();
        }
        format!("{} {}", self.finalized, self.live_partial)
    }

    pub fn is_empty(&self) -> bool {
        self.finalized.is_empty() && self.live_partial.is_empty()
    }
}

/// Merges a stream of [`TranscriptionEvent`]s into a [`TranscriptBuffer`].
///
/// Finalized text is never rewritten, only appended to. Identical finals are
/// appended each time they arrive — deduplication is deliberately *not*
/// performed, because legitimate speech repeats itself.
#[derive(Debug, Default)]
pub struct TranscriptAssembler {
    buffer: TranscriptBuffer,
}

impl TranscriptAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the buffer and return the updated state.
    ///
    /// `Error` events leave the text state untouched; the caller surfaces
    /// them separately.
    pub fn apply(&mut self, event: &TranscriptionEvent) -> &TranscriptBuffer {
        match event {
            TranscriptionEvent::Partial { text, .. } => {
                // The previous partial is discarded, never committed.
                self.buffer.live_partial = text.clone();
            }
            TranscriptionEvent::Final { text, .. } => {
                if !text.is_empty() {
                    if !self.buffer.finalized.is_empty() {
                        self.buffer.finalized.push(' ');
                    }
                    self.buffer.finalized.push_str(text);
                }
                self.buffer.live_partial.clear();
            }
            TranscriptionEvent::Error { .. } => {}
        }
        &self.buffer
    }

    /// Current buffer snapshot.
    pub fn buffer(&self) -> &TranscriptBuffer {
        &self.buffer
    }

    /// Reset both finalized and partial text (new recording session).
    pub fn clear(&mut self) {
        self.buffer = TranscriptBuffer::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial(text: &str) -> TranscriptionEvent {
        TranscriptionEvent::Partial {
            text: text.into(),
            confidence: 0.5,
        }
    }

    fn fin(text: &str) -> TranscriptionEvent {
        TranscriptionEvent::Final {
            text: text.into(),
            confidence: 0.9,
        }
    }

    #[test]
    fn partials_replace_and_final_commits() {
        let mut asm = TranscriptAssembler::new();
        asm.apply(&partial("a"));
        asm.apply(&partial("ab"));
        assert_eq!(asm.buffer().live_partial, "ab");
        assert_eq!(asm.buffer().finalized, "");

        let buf = asm.apply(&fin("abc"));
        assert_eq!(buf.finalized, "abc");
        assert_eq!(buf.live_partial, "");
    }

    #[test]
    fn finals_join_with_single_space() {
        let mut asm = TranscriptAssembler::new();
        asm.apply(&fin("hello"));
        asm.apply(&fin("world"));
        assert_eq!(asm.buffer().finalized, "hello world");
    }

    #[test]
    fn repeated_finals_are_appended_not_deduplicated() {
        let mut asm = TranscriptAssembler::new();
        asm.apply(&fin("again"));
        asm.apply(&fin("again"));
        assert_eq!(asm.buffer().finalized, "again again");
    }

    #[test]
    fn error_leaves_text_state_untouched() {
        let mut asm = TranscriptAssembler::new();
        asm.apply(&fin("kept"));
        asm.apply(&partial("pending"));
        asm.apply(&TranscriptionEvent::Error {
            message: "model crashed".into(),
        });
        assert_eq!(asm.buffer().finalized, "kept");
        assert_eq!(asm.buffer().live_partial, "pending");
    }

    #[test]
    fn empty_final_clears_partial_without_stray_space() {
        let mut asm = TranscriptAssembler::new();
        asm.apply(&fin("first"));
        asm.apply(&partial("noise"));
        asm.apply(&fin(""));
        assert_eq!(asm.buffer().finalized, "first");
        assert_eq!(asm.buffer().live_partial, "");
    }

    #[test]
    fn display_joins_finalized_and_partial() {
        let mut asm = TranscriptAssembler::new();
        assert_eq!(asm.buffer().display(), "");
        asm.apply(&fin("done"));
        asm.apply(&partial("typing"));
        assert_eq!(asm.buffer().display(), "done typing");
    }

    #[test]
    fn event_serializes_with_lowercase_kind_tag() {
        let json = serde_json::to_value(partial("hi")).expect("serialize");
        assert_eq!(json["kind"], "partial");
        assert_eq!(json["text"], "hi");
    }
}
