// src/providers/mistral.rs

use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::MistralConfig;
use crate::errors::{Result, SolveError};
use crate::models::{ChatMessage, ModelRequest};
use crate::providers::{ChatProvider, ProviderFactory};

/// A provider for Mistral's chat completion endpoint.
pub struct MistralProvider {
    client: Client,
    api_base: String,
    api_key: String,
}

#[derive(Serialize)]
struct MistralRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct MistralResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<ResponseContent>,
}

/// Mistral returns either a plain string or, for some models, a list of chunks.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResponseContent {
    Text(String),
    Chunks(Vec<ResponseChunk>),
}

#[derive(Deserialize)]
struct ResponseChunk {
    #[serde(rename = "type")]
    chunk_type: String,
    #[serde(default)]
    text: Option<String>,
}

impl MistralProvider {
    /// Creates a new `MistralProvider`, failing when no usable API key is configured.
    pub fn new(client: Client, config: &MistralConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| SolveError::ProviderUnavailable("MISTRAL_API_KEY is not set".to_string()))?;

        // Reject keys that cannot be sent as a header value instead of failing mid-request.
        if reqwest::header::HeaderValue::from_str(&format!("Bearer {}", api_key)).is_err() {
            return Err(SolveError::ProviderUnavailable(
                "MISTRAL_API_KEY contains invalid characters".to_string(),
            ));
        }

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            api_key,
        })
    }
}

/// Pulls the first choice's text out of a chat completion body.
fn extract_solution(response: MistralResponse) -> Result<String> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| SolveError::UnexpectedResponse("No choices in response".to_string()))?;

    let output = match choice.message.content {
        Some(ResponseContent::Text(text)) => text,
        Some(ResponseContent::Chunks(chunks)) => chunks
            .into_iter()
            .filter(|chunk| chunk.chunk_type == "text")
            .filter_map(|chunk| chunk.text)
            .collect::<Vec<_>>()
            .join(""),
        None => String::new(),
    };

    if output.trim().is_empty() {
        return Err(SolveError::EmptyResponse);
    }

    Ok(output)
}

#[async_trait]
impl ChatProvider for MistralProvider {
    async fn complete(&self, model: &str, request: &ModelRequest) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.api_base.trim_end_matches('/'));

        info!("Calling Mistral: {} with model: {}", url, model);

        let body = MistralRequest {
            model,
            messages: &request.messages,
        };

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        info!("Mistral response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            error!("Mistral returned {}: {}", status, error_body);
            return Err(SolveError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let mistral_resp: MistralResponse = resp.json().await?;
        extract_solution(mistral_resp)
    }
}

/// Connects [`MistralProvider`]s from a shared HTTP client and the startup configuration.
#[derive(Clone)]
pub struct MistralFactory {
    client: Client,
    config: MistralConfig,
}

impl MistralFactory {
    pub fn new(client: Client, config: MistralConfig) -> Self {
        Self { client, config }
    }
}

impl ProviderFactory for MistralFactory {
    fn connect(&self) -> Result<Box<dyn ChatProvider>> {
        let provider = MistralProvider::new(self.client.clone(), &self.config)?;
        Ok(Box::new(provider))
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}
