//! HTTP client for the recognizer's model API.
//!
//! Endpoints:
//!
//! | Method | Path | Returns |
//! |--------|------|---------|
//! | GET  | `/api/models` | `{ "models": [...] }` |
//! | GET  | `/api/model-status/{name}` | `{ "loaded": bool, "loading": bool }` |
//! | POST | `/api/preload-model` | no content |
//! | POST | `/api/transcribe` (multipart) | `{ "steps": [...] }` |
//!
//! `model_status` fails soft: any transport or decode error reports the model
//! as neither loaded nor loading, so UI polling never surfaces a hard error.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{HearsayError, Result};

/// Load state of a remote model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStatus {
    pub loaded: bool,
    pub loading: bool,
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    models: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TranscribeResponse {
    steps: Vec<String>,
}

#[derive(Debug, Serialize)]
struct PreloadRequest<'a> {
    model_name: &'a str,
}

/// Client for the recognizer's HTTP surface.
#[derive(Debug, Clone)]
pub struct RecognizerApi {
    client: reqwest::Client,
    base_url: String,
}

impl RecognizerApi {
    /// Create a client for `base_url` (scheme + host + port, no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|e| HearsayError::Api(format!("client build: {e}")))?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { client, base_url })
    }

    /// List the models the service offers.
    pub async fn models(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/models", self.base_url);
        let response: ModelsResponse = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HearsayError::Api(e.to_string()))?
            .error_for_status()
            .map_err(|e| HearsayError::Api(e.to_string()))?
            .json()
            .await
            .map_err(|e| HearsayError::Api(e.to_string()))?;
        Ok(response.models)
    }

    /// Query a model's load state. Never fails — defaults to not loaded.
    pub async fn model_status(&self, model_name: &str) -> ModelStatus {
        let url = format!("{}/api/model-status/{}", self.base_url, model_name);
        let fetch = async {
            self.client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<ModelStatus>()
                .await
        };
        match fetch.await {
            Ok(status) => status,
            Err(e) => {
                warn!(model = model_name, error = %e, "model status query failed; assuming unloaded");
                ModelStatus::default()
            }
        }
    }

    /// Ask the service to load a model ahead of streaming.
    pub async fn preload_model(&self, model_name: &str) -> Result<()> {
        let url = format!("{}/api/preload-model", self.base_url);
        self.client
            .post(&url)
            .json(&PreloadRequest { model_name })
            .send()
            .await
            .map_err(|e| HearsayError::Api(e.to_string()))?
            .error_for_status()
            .map_err(|e| HearsayError::Api(e.to_string()))?;
        Ok(())
    }

    /// Single-shot transcription of a complete audio file.
    pub async fn transcribe_file(
        &self,
        model_name: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Vec<String>> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str("audio/wav")
            .map_err(|e| HearsayError::Api(format!("multipart file part: {e}")))?;
        let form = reqwest::multipart::Form::new()
            .text("model_name", model_name.to_owned())
            .part("file", part);

        let url = format!("{}/api/transcribe", self.base_url);
        let response: TranscribeResponse = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| HearsayError::Api(e.to_string()))?
            .error_for_status()
            .map_err(|e| HearsayError::Api(e.to_string()))?
            .json()
            .await
            .map_err(|e| HearsayError::Api(e.to_string()))?;
        Ok(response.steps)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let api = RecognizerApi::new("http://127.0.0.1:7860///").expect("client");
        assert_eq!(api.base_url(), "http://127.0.0.1:7860");
    }

    #[test]
    fn model_status_deserializes_and_defaults() {
        let status: ModelStatus =
            serde_json::from_str(r#"{"loaded":true,"loading":false}"#).expect("deserialize");
        assert!(status.loaded);
        assert!(!status.loading);
        assert_eq!(
            ModelStatus::default(),
            ModelStatus {
                loaded: false,
                loading: false
            }
        );
    }

    #[tokio::test]
    async fn model_status_fails_soft_when_server_is_unreachable() {
        // Port 9 (discard) refuses connections on any sane host.
        let api = RecognizerApi::new("http://127.0.0.1:9").expect("client");
        let status = api.model_status("english-small").await;
        assert_eq!(status, ModelStatus::default());
    }

    #[test]
    fn preload_request_uses_snake_case_field() {
        let body = serde_json::to_string(&PreloadRequest {
            model_name: "Vosk German",
        })
        .expect("serialize");
        assert_eq!(body, r#"{"model_name":"Vosk German"}"#);
    }
}
