//! `StreamingSession` — top-level lifecycle controller.
//!
//! ## Lifecycle
//!
//! ```text
//! StreamingSession::new()
//!     └─► start()        → websocket connected, audio open, loops spawned
//!         └─► stop()     → running=false, tail flushed, stop_stream sent,
//!                          connection closed
//! ```
//!
//! `start()`/`stop()` called in the wrong state return an error rather than
//! panicking.
//!
//! ## Threading
//!
//! `cpal::Stream` is `!Send` on Windows/macOS (COM / CoreAudio thread
//! affinity). `AudioCapture` is therefore created *inside* the
//! `spawn_blocking` closure so it never crosses a thread boundary. A oneshot
//! channel propagates any open-device error back to the `start()` caller and
//! carries the negotiated capture rate on success. Encoded payloads travel
//! from the capture thread to an async I/O task over a bounded channel; the
//! I/O task owns the websocket exclusively.

pub mod pipeline;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::{
    audio::{AudioCapture, CaptureConstraints},
    buffering::create_audio_ring,
    encode::{BatchPolicy, BlockBatcher},
    error::{HearsayError, Result},
    transcript::{TranscriptAssembler, TranscriptBuffer, TranscriptionEvent},
    transport::{ws::WsDialer, ConnectionState, Dialer, StreamTransport},
};

/// Broadcast channel capacity: 256 events buffered for slow consumers.
const BROADCAST_CAP: usize = 256;

/// Bounded payload queue between the capture thread and the I/O task.
const PAYLOAD_QUEUE: usize = 64;

/// How long to wait for trailing results after `stop_stream` is sent.
const FINAL_DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// How often an idle encoded-block session re-checks the running flag.
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Streaming recognition endpoint of a locally hosted service.
pub const DEFAULT_STREAM_ENDPOINT: &str = "ws://127.0.0.1:7860/api/transcribe-stream";

/// Configuration for [`StreamingSession`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Websocket endpoint of the streaming recognizer.
    pub endpoint: String,
    /// Model name embedded in outgoing chunks. `None` selects the
    /// continuous dialect: untagged chunks, server-side model default.
    pub model: Option<String>,
    /// Sample rate chunks are resampled to before encoding (Hz).
    /// Default: 16000.
    pub target_sample_rate: u32,
    /// Window length handed to the encoder, in seconds of captured audio.
    /// Default: 0.5.
    pub window_seconds: f32,
    /// Capture processing requests (advisory on most backends).
    pub constraints: CaptureConstraints,
    /// Input device by name; `None` uses default input selection.
    pub preferred_input_device: Option<String>,
    /// Flush thresholds for pre-compressed block sessions
    /// ([`StreamingSession::start_encoded`]).
    pub batch: BatchPolicy,
    /// Send the undersized buffered tail as one last chunk on stop.
    /// Default: true.
    pub flush_final_window: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_STREAM_ENDPOINT.to_string(),
            model: None,
            target_sample_rate: 16_000,
            window_seconds: 0.5,
            constraints: CaptureConstraints::default(),
            preferred_input_device: None,
            batch: BatchPolicy::default(),
            flush_final_window: true,
        }
    }
}

/// The top-level session handle.
///
/// `StreamingSession` is `Send + Sync` — all fields use interior mutability.
/// Wrap in `Arc<StreamingSession>` to share between a UI thread and
/// event-forwarding async tasks.
///
/// Generic over the connection [`Dialer`] (websocket by default) so the full
/// lifecycle runs against a scripted link in tests.
pub struct StreamingSession<D: Dialer = WsDialer> {
    config: SessionConfig,
    dialer: D,
    /// `true` while capture + I/O are active.
    running: Arc<AtomicBool>,
    /// Broadcast sender for transcription events.
    event_tx: broadcast::Sender<TranscriptionEvent>,
    /// Broadcast sender for connection state changes.
    state_tx: broadcast::Sender<ConnectionState>,
    /// Accumulated transcript, shared with the I/O task.
    assembler: Arc<Mutex<TranscriptAssembler>>,
    /// Shared capture counters for observability.
    stats: Arc<pipeline::CaptureStats>,
}

impl StreamingSession {
    /// Create a websocket-backed session. Does not open audio or network —
    /// call `start()`.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_dialer(config, WsDialer)
    }
}

impl<D> StreamingSession<D>
where
    D: Dialer + Clone + 'static,
    D::Link: 'static,
{
    /// Like [`new`](StreamingSession::new) with a custom connection backend.
    pub fn with_dialer(config: SessionConfig, dialer: D) -> Self {
        let (event_tx, _) = broadcast::channel(BROADCAST_CAP);
        let (state_tx, _) = broadcast::channel(BROADCAST_CAP);
        Self {
            config,
            dialer,
            running: Arc::new(AtomicBool::new(false)),
            event_tx,
            state_tx,
            assembler: Arc::new(Mutex::new(TranscriptAssembler::new())),
            stats: Arc::new(pipeline::CaptureStats::default()),
        }
    }

    /// Connect to the recognizer and start streaming microphone audio.
    ///
    /// Resolves once both the websocket handshake and the audio device open
    /// have succeeded; capture and I/O then continue in the background.
    ///
    /// # Errors
    /// - `HearsayError::AlreadyRunning` if already started.
    /// - `HearsayError::ConnectionFailed` when the handshake fails; audio is
    ///   never opened in that case.
    /// - `HearsayError::DeviceUnavailable` / `PermissionDenied` /
    ///   `AudioStream` on device errors; the connection is closed again.
    pub async fn start(&self) -> Result<()> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(HearsayError::AlreadyRunning);
        }
        self.stats.reset();
        self.assembler.lock().clear();

        let mut transport = match self.connect_transport().await {
            Ok(t) => t,
            Err(e) => {
                self.running.store(false, Ordering::SeqCst);
                return Err(e);
            }
        };

        let (producer, consumer) = create_audio_ring();
        let (payload_tx, payload_rx) = mpsc::channel(PAYLOAD_QUEUE);
        // Sync-sendable oneshot: the capture thread signals open success or
        // failure back to start(), with the negotiated sample rate.
        let (open_tx, open_rx) = oneshot::channel::<Result<u32>>();

        let running = Arc::clone(&self.running);
        let stats = Arc::clone(&self.stats);
        let constraints = self.config.constraints.clone();
        let preferred = self.config.preferred_input_device.clone();
        let target_rate = self.config.target_sample_rate;
        let window_seconds = self.config.window_seconds;
        let flush_final_window = self.config.flush_final_window;

        tokio::task::spawn_blocking(move || {
            // Device open must happen on THIS thread — cpal::Stream is !Send.
            let capture = match AudioCapture::open(
                producer,
                Arc::clone(&running),
                preferred.as_deref(),
                &constraints,
            ) {
                Ok(c) => {
                    let _ = open_tx.send(Ok(c.sample_rate));
                    c
                }
                Err(e) => {
                    let _ = open_tx.send(Err(e));
                    running.store(false, Ordering::SeqCst);
                    return;
                }
            };

            pipeline::run(pipeline::CaptureContext {
                consumer,
                running: Arc::clone(&running),
                pipeline: pipeline::WindowPipeline::new(
                    capture.sample_rate,
                    target_rate,
                    window_seconds,
                ),
                payload_tx,
                flush_final_window,
                stats,
            });

            capture.stop();
            // Stream drops here, releasing the audio device on this thread.
            drop(capture);
        });

        match open_rx.await {
            Ok(Ok(rate)) => {
                info!(capture_rate = rate, "session started — streaming");
            }
            Ok(Err(e)) => {
                transport.disconnect().await;
                let _ = self.state_tx.send(ConnectionState::Disconnected);
                self.running.store(false, Ordering::SeqCst);
                return Err(e);
            }
            Err(_) => {
                // Channel closed before a message was sent — capture task panicked?
                transport.disconnect().await;
                let _ = self.state_tx.send(ConnectionState::Disconnected);
                self.running.store(false, Ordering::SeqCst);
                return Err(HearsayError::Other(anyhow::anyhow!(
                    "capture task died unexpectedly"
                )));
            }
        }

        tokio::spawn(run_io(
            transport,
            payload_rx,
            self.event_tx.clone(),
            self.state_tx.clone(),
            Arc::clone(&self.assembler),
            Arc::clone(&self.running),
        ));
        Ok(())
    }

    /// Stream externally encoded blocks instead of opening a microphone.
    ///
    /// Blocks read from `blocks` run through a [`BlockBatcher`] with this
    /// session's [`BatchPolicy`], and batched payloads go out over the same
    /// transport as `start()`. The session ends when `blocks` closes (the
    /// caller dropping the sender) or when `stop()` is called — the buffered
    /// remainder is flushed as one last payload either way.
    pub async fn start_encoded(&self, mut blocks: mpsc::Receiver<Vec<u8>>) -> Result<()> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(HearsayError::AlreadyRunning);
        }
        self.assembler.lock().clear();

        let transport = match self.connect_transport().await {
            Ok(t) => t,
            Err(e) => {
                self.running.store(false, Ordering::SeqCst);
                return Err(e);
            }
        };

        let (payload_tx, payload_rx) = mpsc::channel(PAYLOAD_QUEUE);
        let policy = self.config.batch;
        let running = Arc::clone(&self.running);

        tokio::spawn(async move {
            let mut batcher = BlockBatcher::new(policy);
            loop {
                if !running.load(Ordering::Relaxed) {
                    break;
                }
                tokio::select! {
                    block = blocks.recv() => match block {
                        Some(block) => {
                            if let Some(payload) = batcher.push(block) {
                                if payload_tx.send(payload).await.is_err() {
                                    return;
                                }
                            }
                        }
                        None => break,
                    },
                    // Wake periodically so stop() takes effect even when no
                    // more blocks arrive.
                    _ = tokio::time::sleep(STOP_POLL_INTERVAL) => {}
                }
            }
            if let Some(payload) = batcher.flush() {
                let _ = payload_tx.send(payload).await;
            }
        });

        tokio::spawn(run_io(
            transport,
            payload_rx,
            self.event_tx.clone(),
            self.state_tx.clone(),
            Arc::clone(&self.assembler),
            Arc::clone(&self.running),
        ));
        info!("session started — streaming encoded blocks");
        Ok(())
    }

    /// Stop streaming.
    ///
    /// Teardown runs in the background in a fixed order: capture stops, the
    /// buffered tail is flushed, `stop_stream` goes out, trailing results are
    /// collected, then the connection closes.
    ///
    /// # Errors
    /// - `HearsayError::NotRunning` if not currently running.
    pub fn stop(&self) -> Result<()> {
        if !self.running.load(Ordering::SeqCst) {
            return Err(HearsayError::NotRunning);
        }
        self.running.store(false, Ordering::SeqCst);
        info!("session stop requested");
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Subscribe to live transcription events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<TranscriptionEvent> {
        self.event_tx.subscribe()
    }

    /// Subscribe to connection state changes.
    pub fn subscribe_state(&self) -> broadcast::Receiver<ConnectionState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the accumulated transcript.
    pub fn transcript_snapshot(&self) -> TranscriptBuffer {
        self.assembler.lock().buffer().clone()
    }

    /// Snapshot of capture counters for observability.
    pub fn capture_stats_snapshot(&self) -> pipeline::CaptureStatsSnapshot {
        self.stats.snapshot()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    async fn connect_transport(&self) -> Result<StreamTransport<D>> {
        let mut transport = StreamTransport::new(
            self.dialer.clone(),
            self.config.endpoint.clone(),
            self.config.model.clone(),
        );
        let _ = self.state_tx.send(ConnectionState::Connecting);
        match transport.connect().await {
            Ok(()) => {
                let _ = self.state_tx.send(ConnectionState::Connected);
                Ok(transport)
            }
            Err(e) => {
                let _ = self.state_tx.send(ConnectionState::Disconnected);
                Err(e)
            }
        }
    }
}

/// Transport side of a session: forwards payloads out and events in until the
/// payload channel closes.
///
/// Chunk delivery is best-effort: a failed send drops that chunk and marks
/// the connection lost, but capture keeps running and the loop keeps
/// consuming payloads until the session is stopped — losing chunks degrades
/// transcription continuity, not correctness.
///
/// Generic over the [`Dialer`] so it runs against a scripted link in tests.
pub async fn run_io<D: Dialer>(
    mut transport: StreamTransport<D>,
    mut payload_rx: mpsc::Receiver<Vec<u8>>,
    event_tx: broadcast::Sender<TranscriptionEvent>,
    state_tx: broadcast::Sender<ConnectionState>,
    assembler: Arc<Mutex<TranscriptAssembler>>,
    running: Arc<AtomicBool>,
) {
    loop {
        let connected = transport.is_connected();
        tokio::select! {
            // Outbound audio is latency-sensitive; results can wait a poll.
            biased;

            payload = payload_rx.recv() => match payload {
                Some(bytes) => {
                    if !transport.is_connected() {
                        debug!(bytes = bytes.len(), "not connected, dropping chunk");
                        continue;
                    }
                    if let Err(e) = transport.send_chunk(&bytes).await {
                        warn!(error = %e, "chunk send failed, dropping chunk");
                        let _ = state_tx.send(ConnectionState::Disconnected);
                    }
                }
                None => {
                    // Capture side is done. Tell the peer, then collect any
                    // results still in flight before closing.
                    if let Err(e) = transport.send_stop().await {
                        debug!(error = %e, "stop message not delivered");
                    }
                    drain_remaining(&mut transport, &event_tx, &assembler).await;
                    break;
                }
            },
            event = transport.recv_event(), if connected => match event {
                Some(ev) => deliver(ev, &event_tx, &assembler),
                None => {
                    warn!("peer closed mid-stream");
                    let _ = state_tx.send(ConnectionState::Disconnected);
                }
            },
        }
    }

    transport.disconnect().await;
    let _ = state_tx.send(ConnectionState::Disconnected);
    running.store(false, Ordering::SeqCst);
    info!("stream I/O task finished");
}

async fn drain_remaining<D: Dialer>(
    transport: &mut StreamTransport<D>,
    event_tx: &broadcast::Sender<TranscriptionEvent>,
    assembler: &Mutex<TranscriptAssembler>,
) {
    loop {
        match tokio::time::timeout(FINAL_DRAIN_TIMEOUT, transport.recv_event()).await {
            Ok(Some(ev)) => deliver(ev, event_tx, assembler),
            Ok(None) => break,
            Err(_) => {
                debug!("no further results within the drain window");
                break;
            }
        }
    }
}

fn deliver(
    event: TranscriptionEvent,
    event_tx: &broadcast::Sender<TranscriptionEvent>,
    assembler: &Mutex<TranscriptAssembler>,
) {
    assembler.lock().apply(&event);
    let _ = event_tx.send(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;

    use crate::error::Result;
    use crate::transport::DuplexLink;

    struct ScriptedLink {
        sent: Arc<Mutex<Vec<String>>>,
        replies: VecDeque<Option<Result<String>>>,
    }

    impl DuplexLink for ScriptedLink {
        async fn send_text(&mut self, text: String) -> Result<()> {
            self.sent.lock().push(text);
            Ok(())
        }

        async fn recv_text(&mut self) -> Option<Result<String>> {
            match self.replies.pop_front() {
                Some(reply) => reply,
                None => {
                    // Keep the connection notionally open so the select loop
                    // prefers the payload branch, without spinning.
                    futures_util::future::pending().await
                }
            }
        }

        async fn close(&mut self) {}
    }

    #[derive(Clone)]
    struct ScriptedDialer {
        sent: Arc<Mutex<Vec<String>>>,
        replies: Arc<Mutex<VecDeque<Option<Result<String>>>>>,
    }

    impl ScriptedDialer {
        fn new(replies: Vec<Option<Result<String>>>) -> Self {
            Self {
                sent: Arc::new(Mutex::new(Vec::new())),
                replies: Arc::new(Mutex::new(replies.into_iter().collect())),
            }
        }
    }

    impl Dialer for ScriptedDialer {
        type Link = ScriptedLink;

        async fn dial(&self, _url: &str) -> Result<ScriptedLink> {
            Ok(ScriptedLink {
                sent: Arc::clone(&self.sent),
                replies: std::mem::take(&mut *self.replies.lock()),
            })
        }
    }

    async fn connected_transport(
        replies: Vec<Option<Result<String>>>,
    ) -> (StreamTransport<ScriptedDialer>, Arc<Mutex<Vec<String>>>) {
        let dialer = ScriptedDialer::new(replies);
        let sent = Arc::clone(&dialer.sent);
        let mut transport = StreamTransport::new(dialer, "ws://test", None);
        transport.connect().await.expect("handshake");
        (transport, sent)
    }

    /// Wait for the background teardown after a stop or input close.
    async fn wait_until_stopped(session: &StreamingSession<ScriptedDialer>) {
        tokio::time::timeout(Duration::from_secs(10), async {
            while session.is_running() {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("session did not wind down");
    }

    #[tokio::test]
    async fn run_io_sends_chunks_then_stop_and_assembles_results() {
        let (transport, sent) = connected_transport(vec![
            Some(Ok(
                r#"{"type":"transcription","text":"hel","partial":true}"#.into()
            )),
            Some(Ok(
                r#"{"type":"transcription","text":"hello world","partial":false}"#.into(),
            )),
            None,
        ])
        .await;

        let (payload_tx, payload_rx) = mpsc::channel(4);
        let (event_tx, mut event_rx) = broadcast::channel(16);
        let (state_tx, mut state_rx) = broadcast::channel(16);
        let assembler = Arc::new(Mutex::new(TranscriptAssembler::new()));
        let running = Arc::new(AtomicBool::new(true));

        payload_tx.send(b"abc".to_vec()).await.expect("queue payload");
        drop(payload_tx);

        run_io(
            transport,
            payload_rx,
            event_tx,
            state_tx,
            Arc::clone(&assembler),
            Arc::clone(&running),
        )
        .await;

        // One audio_chunk then the stop message went out, in order.
        let frames = sent.lock();
        assert_eq!(frames.len(), 2);
        assert!(frames[0].contains(r#""type":"audio_chunk""#));
        assert_eq!(frames[1], r#"{"type":"stop_stream"}"#);

        // Both events were broadcast and folded into the transcript.
        assert!(matches!(
            event_rx.try_recv(),
            Ok(TranscriptionEvent::Partial { .. })
        ));
        assert!(matches!(
            event_rx.try_recv(),
            Ok(TranscriptionEvent::Final { .. })
        ));
        assert_eq!(assembler.lock().buffer().finalized, "hello world");
        assert!(assembler.lock().buffer().live_partial.is_empty());

        assert_eq!(state_rx.try_recv(), Ok(ConnectionState::Disconnected));
        assert!(!running.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn peer_close_drops_chunks_but_session_runs_until_stopped() {
        let (transport, sent) = connected_transport(vec![None]).await;

        let (payload_tx, payload_rx) = mpsc::channel::<Vec<u8>>(4);
        let (event_tx, _event_rx) = broadcast::channel(16);
        let (state_tx, mut state_rx) = broadcast::channel(16);
        let running = Arc::new(AtomicBool::new(true));

        let io = tokio::spawn(run_io(
            transport,
            payload_rx,
            event_tx,
            state_tx,
            Arc::new(Mutex::new(TranscriptAssembler::new())),
            Arc::clone(&running),
        ));

        // Let the loop observe the close first; chunks sent afterwards are
        // dropped without ending the loop.
        tokio::time::sleep(Duration::from_millis(20)).await;
        payload_tx.send(b"abc".to_vec()).await.expect("queue payload");
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!io.is_finished());
        assert!(running.load(Ordering::SeqCst));

        // Stopping (closing the payload channel) ends the session; the stop
        // message cannot be delivered on the dead link.
        drop(payload_tx);
        io.await.expect("io task panicked");

        assert!(sent.lock().is_empty());
        assert_eq!(state_rx.try_recv(), Ok(ConnectionState::Disconnected));
        assert!(!running.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn encoded_session_batches_blocks_and_ends_when_input_closes() {
        let dialer = ScriptedDialer::new(vec![Some(Ok(
            r#"{"type":"transcription","text":"copy that","partial":false}"#.into(),
        ))]);
        let sent = Arc::clone(&dialer.sent);
        let config = SessionConfig {
            batch: BatchPolicy {
                max_blocks: 2,
                ..BatchPolicy::default()
            },
            ..SessionConfig::default()
        };
        let session = StreamingSession::with_dialer(config, dialer);
        let mut state_rx = session.subscribe_state();

        let (block_tx, block_rx) = mpsc::channel(8);
        session.start_encoded(block_rx).await.expect("start");
        assert!(session.is_running());
        assert_eq!(state_rx.try_recv(), Ok(ConnectionState::Connecting));
        assert_eq!(state_rx.try_recv(), Ok(ConnectionState::Connected));

        let (_tx2, rx2) = mpsc::channel(1);
        assert!(matches!(
            session.start_encoded(rx2).await,
            Err(HearsayError::AlreadyRunning)
        ));

        block_tx.send(b"abc".to_vec()).await.expect("queue block");
        block_tx.send(b"def".to_vec()).await.expect("queue block");
        drop(block_tx);
        wait_until_stopped(&session).await;

        // Both blocks left as one concatenated chunk, then the stop message.
        let frames = sent.lock();
        assert_eq!(frames.len(), 2);
        assert!(frames[0].contains(r#""type":"audio_chunk""#));
        assert!(frames[0].contains("YWJjZGVm")); // base64("abcdef")
        assert_eq!(frames[1], r#"{"type":"stop_stream"}"#);
        assert_eq!(session.transcript_snapshot().finalized, "copy that");
    }

    #[tokio::test(start_paused = true)]
    async fn stop_winds_down_an_encoded_session_waiting_for_blocks() {
        let dialer = ScriptedDialer::new(Vec::new());
        let sent = Arc::clone(&dialer.sent);
        let session = StreamingSession::with_dialer(SessionConfig::default(), dialer);
        let mut state_rx = session.subscribe_state();

        let (block_tx, block_rx) = mpsc::channel::<Vec<u8>>(8);
        session.start_encoded(block_rx).await.expect("start");
        session.stop().expect("stop");

        // The sender stays alive: teardown must not depend on it closing.
        // `stop()` clears the running flag itself, so poll the state channel
        // for the Disconnected that `run_io` emits once teardown finishes.
        tokio::time::timeout(Duration::from_secs(10), async {
            loop {
                match state_rx.recv().await {
                    Ok(ConnectionState::Disconnected) => break,
                    Ok(_) => {}
                    Err(e) => panic!("state channel closed early: {e}"),
                }
            }
        })
        .await
        .expect("session did not wind down");
        assert_eq!(*sent.lock(), vec![r#"{"type":"stop_stream"}"#.to_string()]);
        drop(block_tx);
    }

    #[tokio::test]
    async fn stop_and_start_reject_wrong_states() {
        let session = StreamingSession::new(SessionConfig::default());
        assert!(matches!(session.stop(), Err(HearsayError::NotRunning)));
        assert!(!session.is_running());
        assert!(session.transcript_snapshot().is_empty());
    }

    #[test]
    fn default_config_matches_streaming_dialect() {
        let config = SessionConfig::default();
        assert_eq!(config.endpoint, DEFAULT_STREAM_ENDPOINT);
        assert_eq!(config.target_sample_rate, 16_000);
        assert!((config.window_seconds - 0.5).abs() < f32::EPSILON);
        assert!(config.model.is_none());
        assert!(config.flush_final_window);
    }
}
