use crate::api::GeminiClient;
use crate::chat::ChatSession;
use crate::profile::Profile;
use crate::prompt::{greeting, summary_prompt};
use crate::status_indicator::StatusIndicator;
use crate::summary::SummaryGenerator;
use crate::ui::page::{PageInputs, PageLayout, Section};
use chrono::Datelike;
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Results of completion calls, posted back to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ChatReply(String),
    SummaryReady(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Page,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLink {
    LinkedIn,
    Email,
    GitHub,
}

pub struct App {
    pub profile: Arc<Profile>,
    client: Arc<GeminiClient>,
    events: UnboundedSender<AppEvent>,
    pub chat: ChatSession,
    pub summary: SummaryGenerator,
    pub status: StatusIndicator,
    pub chat_open: bool,
    /// Transcript rows scrolled up from the newest message.
    pub chat_scroll: u16,
    pub scroll: u16,
    pub viewport_width: u16,
    pub viewport_height: u16,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        profile: Arc<Profile>,
        client: Arc<GeminiClient>,
    ) -> (App, UnboundedReceiver<AppEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let chat = ChatSession::with_greeting(greeting(&profile));
        let app = App {
            profile,
            client,
            events,
            chat,
            summary: SummaryGenerator::new(),
            status: StatusIndicator::new(),
            chat_open: false,
            chat_scroll: 0,
            scroll: 0,
            viewport_width: 80,
            viewport_height: 24,
            should_quit: false,
        };
        (app, rx)
    }

    pub fn focus(&self) -> Focus {
        if self.chat_open {
            Focus::Chat
        } else {
            Focus::Page
        }
    }

    pub fn page_layout(&self) -> PageLayout {
        let inputs = PageInputs {
            summary: self.summary.state(),
            spinner: self.status.spinner(),
            year: chrono::Local::now().year(),
        };
        PageLayout::build(&self.profile, &inputs, self.viewport_width)
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.frame_layout(width, height);
    }

    /// Resizes the viewport and returns the page laid out for it, with the
    /// scroll already clamped. Built once per frame.
    pub fn frame_layout(&mut self, width: u16, height: u16) -> PageLayout {
        self.viewport_width = width;
        self.viewport_height = height;
        let layout = self.page_layout();
        self.clamp_scroll_to(&layout);
        layout
    }

    pub fn active_section(&self) -> Section {
        self.page_layout()
            .active_section(self.scroll, self.viewport_height)
    }

    fn clamp_scroll(&mut self) {
        let layout = self.page_layout();
        self.clamp_scroll_to(&layout);
    }

    fn clamp_scroll_to(&mut self, layout: &PageLayout) {
        self.scroll = self.scroll.min(layout.max_scroll(self.viewport_height));
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).max(0);
        self.scroll = next.min(u16::MAX as i32) as u16;
        self.clamp_scroll();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.page_layout().max_scroll(self.viewport_height);
    }

    pub fn page_step(&self) -> i32 {
        self.viewport_height.saturating_sub(1).max(1) as i32
    }

    pub fn jump_to(&mut self, section: Section) {
        let layout = self.page_layout();
        self.scroll = layout.section_start(section);
        self.clamp_scroll_to(&layout);
    }

    pub fn open_chat(&mut self) {
        self.chat_open = true;
        self.chat_scroll = 0;
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
    }

    /// Sends the chat input if the session accepts it. The reply arrives
    /// later as `AppEvent::ChatReply`.
    pub fn submit_chat(&mut self) -> bool {
        let Some(prompt) = self.chat.begin_submit() else {
            return false;
        };
        self.chat_scroll = 0;

        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        tokio::spawn(async move {
            let reply = client.generate(&prompt).await;
            if events.send(AppEvent::ChatReply(reply)).is_err() {
                warn!("Chat reply dropped: UI loop has exited");
            }
        });
        true
    }

    /// Starts the elevator pitch unless it was already requested.
    pub fn request_summary(&mut self) -> bool {
        if !self.summary.begin() {
            return false;
        }
        info!("Generating profile summary");

        let prompt = summary_prompt(&self.profile);
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        tokio::spawn(async move {
            let text = client.generate(&prompt).await;
            if events.send(AppEvent::SummaryReady(text)).is_err() {
                warn!("Summary dropped: UI loop has exited");
            }
        });
        true
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ChatReply(reply) => {
                self.chat.resolve(reply);
                self.chat_scroll = 0;
            }
            AppEvent::SummaryReady(text) => {
                self.summary.finish(text);
                self.clamp_scroll();
            }
        }
    }

    pub fn on_tick(&mut self) {
        if self.chat.is_pending() || self.summary.is_generating() {
            self.status.update_spinner();
        }
    }

    pub fn contact_target(&self, link: ContactLink) -> Option<String> {
        let contact = &self.profile.contact;
        match link {
            ContactLink::LinkedIn => contact.linkedin.clone(),
            ContactLink::Email => contact.email.as_ref().map(|e| format!("mailto:{}", e)),
            ContactLink::GitHub => contact.github.clone(),
        }
    }

    pub fn open_contact(&self, link: ContactLink) {
        let Some(target) = self.contact_target(link) else {
            return;
        };
        if let Err(e) = open::that(&target) {
            warn!("Failed to open {}: {}", target, e);
        }
    }
}
