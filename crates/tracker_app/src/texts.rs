//! Localized display text for status reports.
//!
//! The core only produces the status enum; mapping it to human-readable
//! lines, in whatever language the user picked, happens here.

use serde::{Deserialize, Serialize};
use tracker_core::{StatusKind, StatusReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Russian,
}

struct Phrases {
    playing: &'static str,
    not_playing: &'static str,
    offline: &'static str,
    unknown: &'static str,
    fetch_failed: &'static str,
}

const ENGLISH: Phrases = Phrases {
    playing: "is playing",
    not_playing: "is not playing right now",
    offline: "is currently offline",
    unknown: "status is unknown",
    fetch_failed: "could not be fetched",
};

const RUSSIAN: Phrases = Phrases {
    playing: "играет в",
    not_playing: "сейчас не играет",
    offline: "сейчас не в сети",
    unknown: "статус неизвестен",
    fetch_failed: "не удалось получить",
};

fn phrases(language: Language) -> &'static Phrases {
    match language {
        Language::English => &ENGLISH,
        Language::Russian => &RUSSIAN,
    }
}

/// Renders one report as a display line, e.g. `Alice is playing Dota 2`.
pub fn status_line(report: &StatusReport, language: Language) -> String {
    let texts = phrases(language);
    let name = &report.display_name;
    match &report.kind {
        StatusKind::Playing(game) => format!("{name} {} {game}", texts.playing),
        StatusKind::OnlineIdle => format!("{name} {}", texts.not_playing),
        StatusKind::Offline => format!("{name} {}", texts.offline),
        StatusKind::Unknown => format!("{name} {}", texts.unknown),
        StatusKind::FetchFailed(detail) => {
            format!("{name} {} ({detail})", texts.fetch_failed)
        }
    }
}
