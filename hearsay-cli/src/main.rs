//! hearsay command-line host.
//!
//! Streams microphone audio to a remote speech-to-text service and prints
//! transcription results as they arrive. Also exposes the service's model
//! API (list, status, preload) and one-shot file transcription.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use hearsay_core::audio::device::list_input_devices;
use hearsay_core::{
    RecognizerApi, SessionConfig, StreamingSession, TranscriptionEvent,
};

/// Path of the streaming endpoint on the service.
const STREAM_PATH: &str = "/api/transcribe-stream";

#[derive(Parser)]
#[command(name = "hearsay", version, about = "Streaming microphone transcription client")]
struct Cli {
    /// Base URL of the recognition service.
    #[arg(long, global = true, env = "HEARSAY_SERVER", default_value = "http://127.0.0.1:7860")]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Stream microphone audio and print live transcription.
    Stream {
        /// Model to transcribe with (service default when omitted).
        #[arg(long)]
        model: Option<String>,
        /// Input device by name (default input when omitted).
        #[arg(long)]
        device: Option<String>,
        /// Seconds of audio per streamed chunk.
        #[arg(long, default_value_t = 0.5)]
        window: f32,
        /// Sample rate chunks are resampled to before sending (Hz).
        #[arg(long, default_value_t = 16_000)]
        rate: u32,
    },
    /// List audio input devices.
    Devices,
    /// List the models the service offers, with load state.
    Models,
    /// Ask the service to load a model ahead of streaming.
    Preload {
        /// Model name as reported by `models`.
        model: String,
    },
    /// Transcribe a complete audio file in one request.
    Transcribe {
        /// Path to a WAV file.
        file: std::path::PathBuf,
        /// Model to transcribe with.
        #[arg(long)]
        model: String,
    },
}

/// Derive the websocket endpoint from the HTTP base URL.
fn stream_endpoint(server: &str) -> String {
    let base = server.trim_end_matches('/');
    let ws_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        base.to_string()
    };
    format!("{ws_base}{STREAM_PATH}")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hearsay=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Stream {
            model,
            device,
            window,
            rate,
        } => stream(&cli.server, model, device, window, rate).await,
        Command::Devices => {
            let devices = list_input_devices();
            if devices.is_empty() {
                println!("no input devices found");
                return Ok(());
            }
            for device in devices {
                let marker = if device.is_default { " (default)" } else { "" };
                println!("{}{marker}", device.name);
            }
            Ok(())
        }
        Command::Models => {
            let api = RecognizerApi::new(&cli.server)?;
            let models = api.models().await.context("listing models")?;
            for model in models {
                let status = api.model_status(&model).await;
                let state = if status.loaded {
                    "loaded"
                } else if status.loading {
                    "loading"
                } else {
                    "not loaded"
                };
                println!("{model}\t{state}");
            }
            Ok(())
        }
        Command::Preload { model } => {
            let api = RecognizerApi::new(&cli.server)?;
            api.preload_model(&model).await.context("preloading model")?;
            println!("preload requested for {model}");
            Ok(())
        }
        Command::Transcribe { file, model } => {
            let api = RecognizerApi::new(&cli.server)?;
            let bytes = std::fs::read(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "audio.wav".to_string());
            let steps = api
                .transcribe_file(&model, &file_name, bytes)
                .await
                .context("transcribing file")?;
            for step in steps {
                println!("{step}");
            }
            Ok(())
        }
    }
}

async fn stream(
    server: &str,
    model: Option<String>,
    device: Option<String>,
    window: f32,
    rate: u32,
) -> anyhow::Result<()> {
    let config = SessionConfig {
        endpoint: stream_endpoint(server),
        model,
        target_sample_rate: rate,
        window_seconds: window,
        preferred_input_device: device,
        ..SessionConfig::default()
    };
    info!(endpoint = %config.endpoint, "starting stream");

    let session = StreamingSession::new(config);
    let mut events = session.subscribe_events();
    session.start().await.context("starting session")?;
    eprintln!("listening — press Ctrl+C to stop");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nstopping…");
                break;
            }
            event = events.recv() => match event {
                Ok(TranscriptionEvent::Partial { text, .. }) => {
                    // Overwrite the current line with the live hypothesis.
                    print!("\r\x1b[2K… {text}");
                    let _ = std::io::stdout().flush();
                }
                Ok(TranscriptionEvent::Final { text, .. }) => {
                    if !text.is_empty() {
                        println!("\r\x1b[2K{text}");
                    }
                }
                Ok(TranscriptionEvent::Error { message }) => {
                    eprintln!("\nserver error: {message}");
                }
                Err(_) => break,
            },
        }
    }

    if session.is_running() {
        session.stop().context("stopping session")?;
    }
    // Give the teardown a moment to flush the tail and collect stragglers.
    let mut remaining = 40u32;
    while session.is_running() && remaining > 0 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        remaining -= 1;
    }

    let transcript = session.transcript_snapshot();
    if !transcript.is_empty() {
        println!("\n--- transcript ---\n{}", transcript.display());
    }
    let stats = session.capture_stats_snapshot();
    info!(
        samples_in = stats.samples_in,
        windows_encoded = stats.windows_encoded,
        payload_bytes = stats.payload_bytes,
        "session finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_endpoint_swaps_scheme_and_appends_path() {
        assert_eq!(
            stream_endpoint("http://127.0.0.1:7860"),
            "ws://127.0.0.1:7860/api/transcribe-stream"
        );
        assert_eq!(
            stream_endpoint("https://speech.example.com/"),
            "wss://speech.example.com/api/transcribe-stream"
        );
    }
}
