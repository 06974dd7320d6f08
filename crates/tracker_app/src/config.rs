//! App configuration loaded from `tracker.ron`.

use std::fs;
use std::num::NonZeroU64;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracker_core::StatusVocabulary;
use tracker_logging::tracker_warn;

use crate::texts::Language;

pub const CONFIG_FILENAME: &str = "tracker.ron";

const FALLBACK_INTERVAL_SECS: u64 = 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Refresh interval in seconds; values of 0 fall back to the default.
    pub interval_secs: u64,
    pub language: Language,
    /// Overrides for the online/offline status keywords. When unset, the
    /// built-in English + Russian sets apply.
    pub online_keywords: Option<Vec<String>>,
    pub offline_keywords: Option<Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            interval_secs: FALLBACK_INTERVAL_SECS,
            language: Language::default(),
            online_keywords: None,
            offline_keywords: None,
        }
    }
}

impl AppConfig {
    pub fn interval(&self) -> NonZeroU64 {
        match NonZeroU64::new(self.interval_secs) {
            Some(interval) => interval,
            None => {
                tracker_warn!(
                    "Configured interval of 0s is invalid; using {}s",
                    FALLBACK_INTERVAL_SECS
                );
                NonZeroU64::new(FALLBACK_INTERVAL_SECS).expect("nonzero fallback interval")
            }
        }
    }

    pub fn vocabulary(&self) -> StatusVocabulary {
        let mut vocabulary = StatusVocabulary::default();
        if let Some(online) = &self.online_keywords {
            vocabulary.online = online.clone();
        }
        if let Some(offline) = &self.offline_keywords {
            vocabulary.offline = offline.clone();
        }
        vocabulary
    }
}

/// Loads the config file, falling back to defaults when it is missing or
/// unparsable. A broken config should never keep the tracker from starting.
pub fn load(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            tracker_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            tracker_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load(&temp.path().join(CONFIG_FILENAME));
        assert_eq!(config.interval_secs, FALLBACK_INTERVAL_SECS);
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn config_file_overrides_interval_language_and_keywords() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"(
                interval_secs: 30,
                language: Russian,
                online_keywords: Some(["Verbunden"]),
            )"#,
        )
        .unwrap();

        let config = load(&path);
        assert_eq!(config.interval().get(), 30);
        assert_eq!(config.language, Language::Russian);

        let vocabulary = config.vocabulary();
        assert_eq!(vocabulary.online, vec!["Verbunden".to_string()]);
        // Untouched set keeps the defaults.
        assert!(vocabulary.offline.contains(&"Offline".to_string()));
    }

    #[test]
    fn unparsable_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "this is not ron").unwrap();
        let config = load(&path);
        assert_eq!(config.interval_secs, FALLBACK_INTERVAL_SECS);
    }

    #[test]
    fn zero_interval_falls_back_to_default() {
        let config = AppConfig {
            interval_secs: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.interval().get(), FALLBACK_INTERVAL_SECS);
    }
}
