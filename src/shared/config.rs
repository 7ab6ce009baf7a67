//! Application configuration. API credentials, models, fixture timing.

use crate::domain::Locale;
use serde::Deserialize;

pub const DEFAULT_AI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_LOOKUP_MODEL: &str = "gemini-3-pro-preview";

/// Simulated wait before fixture non-followers appear.
pub const DEFAULT_FIXTURE_DELAY_MS: u64 = 2000;

/// Characters of the grounding summary shown in the UI.
pub const SUMMARY_EXCERPT_CHARS: usize = 300;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // AI Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Gemini API key. Read from VIBE_CHECK_AI_API_KEY, GEMINI_API_KEY or API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Gemini REST base URL. Read from VIBE_CHECK_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model used for vibe classification. Read from VIBE_CHECK_ANALYSIS_MODEL.
    #[serde(default)]
    pub analysis_model: Option<String>,

    /// Model used for search-grounded profile lookup. Read from VIBE_CHECK_LOOKUP_MODEL.
    #[serde(default)]
    pub lookup_model: Option<String>,

    /// Use the offline mock adapter instead of Gemini. Read from VIBE_CHECK_AI_MOCK.
    #[serde(default)]
    pub ai_mock: Option<bool>,

    /// HTTP timeout for Gemini calls. Unset = no client-side timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Language code for analysis reasons (`tr` or `en`). Read from VIBE_CHECK_LOCALE.
    #[serde(default)]
    pub locale: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Follow graph fixture
    // ─────────────────────────────────────────────────────────────────────────
    /// Delay in ms before fixture results are returned. Read from VIBE_CHECK_FIXTURE_DELAY_MS.
    #[serde(default)]
    pub fixture_delay_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("VIBE_CHECK").try_parsing(true));
        if let Ok(path) = std::env::var("VIBE_CHECK_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the API key if configured. Falls back to GEMINI_API_KEY, then API_KEY.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .or_else(|| std::env::var("VIBE_CHECK_AI_API_KEY").ok())
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .or_else(|| std::env::var("API_KEY").ok())
            .filter(|k| !k.is_empty())
    }

    /// Returns the API base URL without a trailing slash.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn analysis_model_or_default(&self) -> String {
        self.analysis_model
            .clone()
            .unwrap_or_else(|| DEFAULT_ANALYSIS_MODEL.to_string())
    }

    pub fn lookup_model_or_default(&self) -> String {
        self.lookup_model
            .clone()
            .unwrap_or_else(|| DEFAULT_LOOKUP_MODEL.to_string())
    }

    /// Returns true if the mock adapter was requested.
    pub fn is_ai_mock(&self) -> bool {
        self.ai_mock.unwrap_or(false)
    }

    /// Returns the configured locale. Unknown codes fall back to the default (Turkish).
    pub fn locale_or_default(&self) -> Locale {
        self.locale
            .as_deref()
            .and_then(Locale::from_code)
            .unwrap_or_default()
    }

    pub fn fixture_delay_ms_or_default(&self) -> u64 {
        self.fixture_delay_ms.unwrap_or(DEFAULT_FIXTURE_DELAY_MS)
    }
}
