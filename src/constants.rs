// API Constants
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

// Fallback replies
pub const DEFAULT_REPLY: &str = "I'm having trouble connecting to the AI brain right now.";
pub const OFFLINE_REPLY: &str =
    "Offline mode: Unable to reach Gemini AI. Please check your connection.";

// UI Constants
pub const CHAT_PLACEHOLDER: &str = "Ask about my projects...";
pub const SUMMARY_CALL_TO_ACTION: &str = "✨ Tap [s] to Generate AI Profile Summary";
pub const SUMMARY_GENERATING: &str = "Gemini is analyzing profile...";
pub const CHAT_WIDTH: u16 = 48;
pub const CHAT_HEIGHT: u16 = 24;
pub const MAX_PAGE_WIDTH: u16 = 96;
pub const ACTIVE_SECTION_MARGIN: u16 = 3;
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
pub const TICK_RATE_MS: u64 = 120;
