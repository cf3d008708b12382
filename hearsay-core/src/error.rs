use thiserror::Error;

/// All errors produced by hearsay-core.
#[derive(Debug, Error)]
pub enum HearsayError {
    #[error("microphone permission denied: {0}")]
    PermissionDenied(String),

    #[error("audio device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("audio stream error: {0}")]
    AudioStream(String),

    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("transport is not connected")]
    NotConnected,

    /// Reserved: chunk encoding cannot fail given input clamping, but the
    /// variant exists so a future codec path has somewhere to report.
    #[error("encoding failed: {0}")]
    EncodingFailed(String),

    #[error("recognizer reported an error: {0}")]
    Peer(String),

    #[error("model API request failed: {0}")]
    Api(String),

    #[error("session is already running")]
    AlreadyRunning,

    #[error("session is not running")]
    NotRunning,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HearsayError>;
