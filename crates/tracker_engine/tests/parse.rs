use pretty_assertions::assert_eq;
use tracker_core::{StatusKind, StatusReport, StatusVocabulary};
use tracker_engine::{StatusParser, SteamStatusParser};

fn parser() -> SteamStatusParser {
    SteamStatusParser::new(StatusVocabulary::default())
}

fn profile_page(name: &str, status_html: &str) -> String {
    format!(
        r#"<html><body>
        <div class="profile_header">
            <span class="actual_persona_name">{name}</span>
        </div>
        {status_html}
        </body></html>"#
    )
}

#[test]
fn in_game_header_with_game_name_is_playing() {
    let html = profile_page(
        "Alice",
        r#"<div class="profile_in_game">
            <div class="profile_in_game_header">Currently In-Game</div>
            <div class="profile_in_game_name">Dota 2</div>
        </div>"#,
    );
    assert_eq!(
        parser().parse(&html),
        StatusReport::new("Alice", StatusKind::Playing("Dota 2".to_string()))
    );
}

#[test]
fn in_game_header_without_game_name_is_unknown() {
    // Markup shape changed under us; do not guess.
    let html = profile_page(
        "Alice",
        r#"<div class="profile_in_game_header">Currently In-Game</div>"#,
    );
    assert_eq!(
        parser().parse(&html),
        StatusReport::new("Alice", StatusKind::Unknown)
    );
}

#[test]
fn english_online_marker_is_online_idle() {
    let html = profile_page("Bob", r#"<div class="profile_in_game">Currently Online</div>"#);
    assert_eq!(
        parser().parse(&html),
        StatusReport::new("Bob", StatusKind::OnlineIdle)
    );
}

#[test]
fn russian_online_marker_is_online_idle() {
    let html = profile_page("Боб", r#"<div class="profile_in_game">В сети</div>"#);
    assert_eq!(
        parser().parse(&html),
        StatusReport::new("Боб", StatusKind::OnlineIdle)
    );
}

#[test]
fn english_offline_marker_is_offline() {
    let html = profile_page(
        "Bob",
        r#"<div class="profile_in_game">Currently Offline</div>"#,
    );
    assert_eq!(
        parser().parse(&html),
        StatusReport::new("Bob", StatusKind::Offline)
    );
}

#[test]
fn russian_offline_marker_is_offline() {
    let html = profile_page("Боб", r#"<div class="profile_in_game">Не в сети</div>"#);
    assert_eq!(
        parser().parse(&html),
        StatusReport::new("Боб", StatusKind::Offline)
    );
}

#[test]
fn unrecognized_marker_text_is_unknown() {
    let html = profile_page("Bob", r#"<div class="profile_in_game">Away fishing</div>"#);
    assert_eq!(
        parser().parse(&html),
        StatusReport::new("Bob", StatusKind::Unknown)
    );
}

#[test]
fn absent_status_marker_is_unknown() {
    let html = profile_page("Bob", "");
    assert_eq!(
        parser().parse(&html),
        StatusReport::new("Bob", StatusKind::Unknown)
    );
}

#[test]
fn missing_persona_name_defaults_to_unknown_literal() {
    let html = r#"<html><body><div class="profile_in_game">Currently Online</div></body></html>"#;
    assert_eq!(
        parser().parse(html),
        StatusReport::new("Unknown", StatusKind::OnlineIdle)
    );
}

#[test]
fn parser_is_total_on_arbitrary_input() {
    for input in ["", "not html at all", "<div", "<<<>>>", "\u{0000}\u{FFFD}"] {
        let report = parser().parse(input);
        assert_eq!(report.display_name, "Unknown");
        assert_eq!(report.kind, StatusKind::Unknown);
    }
}

#[test]
fn custom_vocabulary_overrides_default_keywords() {
    let vocabulary = StatusVocabulary {
        online: vec!["Verbunden".to_string()],
        offline: vec!["Getrennt".to_string()],
    };
    let parser = SteamStatusParser::new(vocabulary);

    let online = profile_page("Karl", r#"<div class="profile_in_game">Verbunden</div>"#);
    assert_eq!(parser.parse(&online).kind, StatusKind::OnlineIdle);

    // Default keywords no longer match once the vocabulary is replaced.
    let english = profile_page("Karl", r#"<div class="profile_in_game">Currently Online</div>"#);
    assert_eq!(parser.parse(&english).kind, StatusKind::Unknown);
}
