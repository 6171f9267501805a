use crate::{
    config::Config,
    constants::{DEFAULT_REPLY, OFFLINE_REPLY},
    errors::{CompletionFailure, FolioError, FolioResult},
    logging::{log_api_call, ApiCallLog},
    profile::Profile,
    prompt::system_instruction,
};
use chrono::Utc;
use log::{debug, error, warn};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

// Every level is optional so a partial body degrades to `None` instead of a
// parse error.
#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of `candidates[0].content.parts[0]`, if present and non-empty.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|text| !text.is_empty())
    }
}

/// Client for the Gemini `generateContent` endpoint. One attempt per call,
/// no retries, no timeout.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    system_instruction: String,
}

impl GeminiClient {
    pub fn new(config: &Config, profile: &Profile) -> FolioResult<Self> {
        let base = config.api_base_url.trim_end_matches('/');
        let endpoint = Url::parse(&format!(
            "{}/v1beta/models/{}:generateContent",
            base, config.model
        ))
        .map_err(|e| FolioError::config_error(format!("Invalid API endpoint: {}", e)))?;

        if !config.has_api_key() {
            warn!("No API key configured; completion calls will fall back to offline replies");
        }

        Ok(Self {
            client: Client::new(),
            endpoint,
            api_key: config.api_key.clone(),
            system_instruction: system_instruction(profile)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends `prompt` and returns the reply text or a structured error.
    pub async fn try_generate(&self, prompt: &str) -> FolioResult<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: &self.system_instruction,
                }],
            },
        };

        let start_time = Instant::now();
        let sent = self
            .client
            .post(self.endpoint.clone())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await;

        log_api_call(&ApiCallLog {
            timestamp: Utc::now(),
            endpoint: self.endpoint.path().to_string(),
            request_summary: summarize_prompt(prompt),
            response_status: sent.as_ref().ok().map(|r| r.status().as_u16()),
            response_time_ms: start_time.elapsed().as_millis(),
        });

        // The key rides in the query string; never let it reach an error message.
        let response = sent.map_err(|e| FolioError::Http(e.without_url()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FolioError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response
            .text()
            .await
            .map_err(|e| FolioError::Http(e.without_url()))?;
        let parsed: GenerateResponse = serde_json::from_str(&raw)
            .map_err(|e| FolioError::malformed(format!("invalid JSON body: {}", e)))?;

        parsed
            .first_text()
            .ok_or_else(|| FolioError::malformed("no candidate text in response"))
    }

    /// Sends `prompt` and always returns displayable text: the reply, or one
    /// of the two fixed fallback strings.
    pub async fn generate(&self, prompt: &str) -> String {
        match self.try_generate(prompt).await {
            Ok(text) => {
                debug!("Completion succeeded ({} chars)", text.len());
                text
            }
            Err(e) => {
                error!("Gemini Error: {}", e);
                fallback_reply(&e).to_string()
            }
        }
    }
}

/// The user-facing string for a failed completion.
pub fn fallback_reply(err: &FolioError) -> &'static str {
    match err.completion_failure() {
        Some(CompletionFailure::Malformed) => DEFAULT_REPLY,
        _ => OFFLINE_REPLY,
    }
}

fn summarize_prompt(prompt: &str) -> String {
    const MAX_CHARS: usize = 60;
    let mut summary: String = prompt.chars().take(MAX_CHARS).collect();
    if prompt.chars().count() > MAX_CHARS {
        summary.push_str("...");
    }
    summary
}
