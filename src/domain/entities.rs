//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/UI types here — adapters map into these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Farcaster account as shown on a non-follower card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub fid: u64,
    pub username: String,
    pub display_name: String,
    pub pfp_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub follower_count: Option<u64>,
    #[serde(default)]
    pub following_count: Option<u64>,
}

impl Profile {
    /// Avatar URL, falling back to a seeded placeholder when the profile has none.
    pub fn avatar_url(&self) -> String {
        if self.pfp_url.is_empty() {
            format!("https://picsum.photos/seed/{}/100/100", self.username)
        } else {
            self.pfp_url.clone()
        }
    }

    /// Warpcast page where the user can unfollow this account.
    pub fn unfollow_url(&self) -> String {
        format!("https://warpcast.com/{}", self.username)
    }

    /// Bio if present and non-blank.
    pub fn bio_text(&self) -> Option<&str> {
        self.bio.as_deref().filter(|b| !b.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vibe {
    Cool,
    Spam,
    Inactive,
    HighValue,
}

impl Vibe {
    pub const ALL: [Vibe; 4] = [Vibe::Cool, Vibe::Spam, Vibe::Inactive, Vibe::HighValue];

    pub fn as_str(self) -> &'static str {
        match self {
            Vibe::Cool => "cool",
            Vibe::Spam => "spam",
            Vibe::Inactive => "inactive",
            Vibe::HighValue => "high-value",
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Keep,
    Unfollow,
    Watch,
}

impl Recommendation {
    pub const ALL: [Recommendation; 3] = [
        Recommendation::Keep,
        Recommendation::Unfollow,
        Recommendation::Watch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Keep => "keep",
            Recommendation::Unfollow => "unfollow",
            Recommendation::Watch => "watch",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language the model is asked to write `reason` in. Also selects the fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Parse a locale code (`tr`, `en`, case-insensitive). Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "tr" | "turkish" => Some(Locale::Turkish),
            "en" | "english" => Some(Locale::English),
            _ => None,
        }
    }

    pub fn language_name(self) -> &'static str {
        match self {
            Locale::Turkish => "Turkish",
            Locale::English => "English",
        }
    }

    pub fn analysis_error_message(self) -> &'static str {
        match self {
            Locale::Turkish => "Analiz sırasında bir hata oluştu.",
            Locale::English => "An error occurred during analysis.",
        }
    }
}

/// Result of a vibe check. All three fields are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeClassification {
    pub vibe: Vibe,
    pub reason: String,
    pub recommendation: Recommendation,
}

impl VibeClassification {
    /// Benign classification returned when analysis fails.
    pub fn fallback(locale: Locale) -> Self {
        Self {
            vibe: Vibe::Cool,
            reason: locale.analysis_error_message().to_string(),
            recommendation: Recommendation::Keep,
        }
    }
}

/// One grounding citation, kept exactly as the service returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroundingSource(pub serde_json::Value);

impl GroundingSource {
    /// `web.uri`, if this is a web citation.
    pub fn uri(&self) -> Option<&str> {
        self.0.get("web")?.get("uri")?.as_str()
    }

    /// `web.title`, if this is a web citation.
    pub fn title(&self) -> Option<&str> {
        self.0.get("web")?.get("title")?.as_str()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroundingResult {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

/// Follow counts shown above the non-follower list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FollowStats {
    pub following: u64,
    pub followers: u64,
    pub non_followers: u64,
}

/// Screen state of the interactive flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppStatus {
    #[default]
    Idle,
    Loading,
    Analyzing,
    Completed,
    Error,
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
