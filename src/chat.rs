// src/chat.rs

use crate::api::GeminiClient;
use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    role: Role,
    text: String,
    sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            sent_at: Local::now(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sent_at(&self) -> DateTime<Local> {
        self.sent_at
    }

    pub fn from_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Append-only list of messages in display order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    AwaitingReply,
}

/// Transcript, input buffer and the pending flag of the chat widget.
#[derive(Debug, Default)]
pub struct ChatSession {
    transcript: Transcript,
    input: String,
    pending: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose transcript opens with an assistant message.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut session = Self::new();
        session
            .transcript
            .push(ChatMessage::new(Role::Assistant, greeting));
        session
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn phase(&self) -> ChatPhase {
        if self.pending {
            ChatPhase::AwaitingReply
        } else {
            ChatPhase::Idle
        }
    }

    /// Whether a submission right now would be accepted.
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.input.trim().is_empty()
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Idle -> AwaitingReply. Appends the user message, clears the input and
    /// returns the prompt to send. `None` (and no change at all) while a reply
    /// is pending or when the input is blank.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            debug!(
                "Ignoring chat submission (pending: {}, blank: {})",
                self.pending,
                self.input.trim().is_empty()
            );
            return None;
        }

        let prompt = std::mem::take(&mut self.input);
        self.transcript
            .push(ChatMessage::new(Role::User, prompt.clone()));
        self.pending = true;
        Some(prompt)
    }

    /// AwaitingReply -> Idle. Fallback strings are appended like any reply.
    pub fn resolve(&mut self, reply: impl Into<String>) {
        self.transcript
            .push(ChatMessage::new(Role::Assistant, reply));
        self.pending = false;
    }

    /// Runs one full exchange in place. Returns `false` when the submission
    /// was ignored.
    pub async fn submit(&mut self, client: &GeminiClient) -> bool {
        let Some(prompt) = self.begin_submit() else {
            return false;
        };
        let reply = client.generate(&prompt).await;
        self.resolve(reply);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{reply_body, test_client, TEST_PATH};
    use crate::constants::{DEFAULT_REPLY, OFFLINE_REPLY};
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::with_greeting("hello");
        for blank in ["", "   ", "\t\n "] {
            session.set_input(blank);
            assert_eq!(session.begin_submit(), None);
            assert_eq!(session.transcript().len(), 1);
            assert!(!session.is_pending());
            assert_eq!(session.input(), blank);
        }
    }

    #[test]
    fn test_submit_while_pending_is_ignored() {
        let mut session = ChatSession::new();
        session.set_input("first");
        assert_eq!(session.begin_submit().as_deref(), Some("first"));
        assert_eq!(session.phase(), ChatPhase::AwaitingReply);
        assert_eq!(session.input(), "");

        session.set_input("second");
        assert_eq!(session.begin_submit(), None);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.input(), "second");

        session.resolve("reply");
        assert_eq!(session.phase(), ChatPhase::Idle);
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.begin_submit().as_deref(), Some("second"));
    }

    #[test]
    fn test_user_text_is_kept_verbatim() {
        let mut session = ChatSession::new();
        session.set_input("  padded question  ");
        assert_eq!(
            session.begin_submit().as_deref(),
            Some("  padded question  ")
        );
        let last = session.transcript().last().unwrap();
        assert_eq!(last.role(), Role::User);
        assert_eq!(last.text(), "  padded question  ");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[tokio::test]
    async fn test_skills_question_end_to_end() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TEST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("React, Java, Figma 🚀")))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        let mut session = ChatSession::with_greeting("hi");
        session.set_input("What are his skills?");

        let prompt = session.begin_submit().unwrap();
        assert!(session.is_pending());
        let user = session.transcript().last().unwrap();
        assert_eq!(user.role(), Role::User);
        assert_eq!(user.text(), "What are his skills?");

        let reply = client.generate(&prompt).await;
        session.resolve(reply);

        assert!(!session.is_pending());
        assert_eq!(session.transcript().len(), 3);
        let assistant = session.transcript().last().unwrap();
        assert_eq!(assistant.role(), Role::Assistant);
        assert_eq!(assistant.text(), "React, Java, Figma 🚀");
    }

    #[tokio::test]
    async fn test_each_submit_adds_two_messages_even_on_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TEST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("fine")))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path(TEST_PATH))
            .respond_with(ResponseTemplate::new(502))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path(TEST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        let mut session = ChatSession::new();
        let expected = ["fine", OFFLINE_REPLY, DEFAULT_REPLY];
        for (i, reply) in expected.iter().enumerate() {
            session.set_input(format!("question {}", i));
            assert!(session.submit(&client).await);
            assert_eq!(session.transcript().len(), (i + 1) * 2);
            assert_eq!(session.transcript().last().unwrap().text(), *reply);
            assert_eq!(session.phase(), ChatPhase::Idle);
        }

        let roles: Vec<Role> = session.transcript().iter().map(|m| m.role()).collect();
        assert_eq!(
            roles,
            vec![
                Role::User,
                Role::Assistant,
                Role::User,
                Role::Assistant,
                Role::User,
                Role::Assistant
            ]
        );
    }
}
