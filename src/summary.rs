// src/summary.rs

use crate::api::GeminiClient;
use log::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SummaryState {
    #[default]
    NotRequested,
    Generating,
    Ready(String),
}

/// The one-shot elevator pitch. At most one request per process: once it has
/// been started, further triggers do nothing.
#[derive(Debug, Default)]
pub struct SummaryGenerator {
    state: SummaryState,
}

impl SummaryGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SummaryState {
        &self.state
    }

    pub fn is_generating(&self) -> bool {
        self.state == SummaryState::Generating
    }

    pub fn text(&self) -> Option<&str> {
        match &self.state {
            SummaryState::Ready(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` if the caller should issue the request now.
    pub fn begin(&mut self) -> bool {
        match self.state {
            SummaryState::NotRequested => {
                self.state = SummaryState::Generating;
                true
            }
            _ => {
                debug!("Summary already requested; ignoring trigger");
                false
            }
        }
    }

    /// Stores the result. A fallback string is stored like any summary.
    pub fn finish(&mut self, text: impl Into<String>) {
        self.state = SummaryState::Ready(text.into());
    }

    pub async fn generate(&mut self, client: &GeminiClient, prompt: &str) -> Option<&str> {
        if self.begin() {
            let text = client.generate(prompt).await;
            self.finish(text);
        }
        self.text()
    }
}
