/// Display name used when the profile page carries no recognizable name.
pub const UNKNOWN_DISPLAY_NAME: &str = "Unknown";

/// Presence classification for one profile in one poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusKind {
    /// In-game, with the game name as shown on the page.
    Playing(String),
    /// Online but not in a game.
    OnlineIdle,
    Offline,
    /// Page fetched but its markup matched no known shape.
    Unknown,
    /// The page could not be fetched at all this cycle.
    FetchFailed(String),
}

/// One profile's status as observed in one cycle. Never persisted; a fresh
/// report supersedes it on the next cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub display_name: String,
    pub kind: StatusKind,
}

impl StatusReport {
    pub fn new(display_name: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            display_name: display_name.into(),
            kind,
        }
    }

    /// Report for an entry whose fetch failed; no page means no name.
    pub fn fetch_failed(detail: impl Into<String>) -> Self {
        Self {
            display_name: UNKNOWN_DISPLAY_NAME.to_string(),
            kind: StatusKind::FetchFailed(detail.into()),
        }
    }
}

/// Keyword sets used to classify the free-text online-status marker.
///
/// The source site renders the marker in the viewer's language, so the
/// vocabulary is injectable rather than hardcoded. The default covers the
/// two languages the site is known to serve for anonymous requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusVocabulary {
    pub online: Vec<String>,
    pub offline: Vec<String>,
}

impl StatusVocabulary {
    pub fn matches_online(&self, text: &str) -> bool {
        self.online.iter().any(|keyword| text.contains(keyword.as_str()))
    }

    pub fn matches_offline(&self, text: &str) -> bool {
        self.offline.iter().any(|keyword| text.contains(keyword.as_str()))
    }
}

impl Default for StatusVocabulary {
    fn default() -> Self {
        Self {
            online: vec!["Online".to_string(), "В сети".to_string()],
            offline: vec!["Offline".to_string(), "Не в сети".to_string()],
        }
    }
}
