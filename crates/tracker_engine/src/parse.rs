use scraper::{ElementRef, Html, Selector};

use tracker_core::{StatusKind, StatusReport, StatusVocabulary, UNKNOWN_DISPLAY_NAME};

pub trait StatusParser: Send + Sync {
    /// Classifies one fetched page body. Total: any input, however
    /// malformed, yields a report.
    fn parse(&self, html: &str) -> StatusReport;
}

/// Parser for Steam community profile pages.
///
/// The markup is third-party and unversioned, so every branch degrades to
/// `Unknown` instead of failing:
/// - display name from `span.actual_persona_name`, defaulting to "Unknown"
/// - an in-game header marker wins over the general status marker; a header
///   without a game-name element means the page shape changed and we do not
///   guess
/// - otherwise the free-text status marker is matched against the injected
///   online/offline vocabulary.
#[derive(Debug, Clone, Default)]
pub struct SteamStatusParser {
    vocabulary: StatusVocabulary,
}

impl SteamStatusParser {
    pub fn new(vocabulary: StatusVocabulary) -> Self {
        Self { vocabulary }
    }
}

impl StatusParser for SteamStatusParser {
    fn parse(&self, html: &str) -> StatusReport {
        let doc = Html::parse_document(html);
        let name_sel = Selector::parse("span.actual_persona_name").ok();
        let in_game_header_sel = Selector::parse("div.profile_in_game_header").ok();
        let game_name_sel = Selector::parse("div.profile_in_game_name").ok();
        let status_marker_sel = Selector::parse("div.profile_in_game").ok();

        let display_name = name_sel
            .as_ref()
            .and_then(|sel| doc.select(sel).next())
            .map(element_text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| UNKNOWN_DISPLAY_NAME.to_string());

        let in_game = in_game_header_sel
            .as_ref()
            .is_some_and(|sel| doc.select(sel).next().is_some());

        let kind = if in_game {
            match game_name_sel
                .as_ref()
                .and_then(|sel| doc.select(sel).next())
                .map(element_text)
                .filter(|game| !game.is_empty())
            {
                Some(game) => StatusKind::Playing(game),
                None => StatusKind::Unknown,
            }
        } else {
            match status_marker_sel.as_ref().and_then(|sel| doc.select(sel).next()) {
                Some(marker) => {
                    let text = element_text(marker);
                    if self.vocabulary.matches_online(&text) {
                        StatusKind::OnlineIdle
                    } else if self.vocabulary.matches_offline(&text) {
                        StatusKind::Offline
                    } else {
                        StatusKind::Unknown
                    }
                }
                None => StatusKind::Unknown,
            }
        };

        StatusReport::new(display_name, kind)
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
