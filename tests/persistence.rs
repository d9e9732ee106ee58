//! Persistence tests: preference round-trips and document load/save flows
//! against real files in temporary directories.

use tempfile::TempDir;

use tradui::files::{self, DocumentError};
use tradui::logic;
use tradui::prefs;
use tradui::state::AppState;

/// What: The dark-mode preference survives a save/load cycle.
///
/// - Input: Toggle dark mode on, persist, reload into a fresh map
/// - Output: Reloaded map reports dark mode enabled
#[test]
fn dark_mode_round_trips_through_disk() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("prefs.json");

    let mut map = prefs::load(&path);
    assert!(!prefs::dark_mode(&map), "missing file must default to light");

    prefs::set_dark_mode(&mut map, true);
    prefs::save(&path, &map).expect("save prefs");

    let reloaded = prefs::load(&path);
    assert!(prefs::dark_mode(&reloaded));
}

/// What: Startup applies persisted preferences the way `load` reports them.
///
/// - Input: A prefs file written by a previous session with dark mode on
/// - Output: Fresh state wired from that file renders with the dark theme
#[test]
fn persisted_theme_applies_to_fresh_state() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("prefs.json");

    let mut earlier = std::collections::HashMap::new();
    prefs::set_dark_mode(&mut earlier, true);
    prefs::save(&path, &earlier).expect("save prefs");

    let prefs = prefs::load(&path);
    let app = AppState {
        dark_mode: prefs::dark_mode(&prefs),
        prefs,
        prefs_path: path,
        ..AppState::default()
    };

    assert!(app.dark_mode);
    assert_eq!(
        tradui::theme::theme(app.dark_mode).base,
        tradui::theme::dark().base
    );
}

/// What: Loading an oversized text document clamps the input buffer.
///
/// - Input: A .txt file holding more characters than the input limit
/// - Output: Input buffer holds exactly the limit, counted in characters
#[test]
fn oversized_document_is_clamped_on_load() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("big.txt");
    std::fs::write(&path, "é".repeat(logic::MAX_INPUT_CHARS + 500)).expect("write doc");

    let content = files::load_document(&path).expect("load doc");
    let mut app = AppState::default();
    logic::set_input_text(&mut app, &content);

    assert_eq!(logic::input_char_count(&app), logic::MAX_INPUT_CHARS);
}

/// What: Word-processor formats are flagged for extraction, not loaded raw.
///
/// - Input: A .docx path
/// - Output: `DocumentError::NeedsExtraction`
#[test]
fn word_documents_require_extraction() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("report.docx");
    std::fs::write(&path, b"PK\x03\x04junk").expect("write doc");

    match files::load_document(&path) {
        Err(DocumentError::NeedsExtraction) => {}
        other => panic!("expected NeedsExtraction, got {other:?}"),
    }
}

/// What: A saved translation lands on disk with the expected name and body.
///
/// - Input: Translated text, target language "fr", a fixed timestamp
/// - Output: File exists under the directory, named from language and
///   timestamp, containing exactly the text
#[test]
fn saved_translation_is_readable_back() {
    let dir = TempDir::new().expect("tempdir");
    let now = chrono::DateTime::parse_from_rfc3339("2026-08-30T12:34:56.789Z")
        .expect("timestamp")
        .with_timezone(&chrono::Utc);

    let path = files::save_translation(dir.path(), "fr", "Bonjour le monde", now)
        .expect("save translation");

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("translated-to-fr-2026-08-30T12-34-56-789Z.txt")
    );
    let body = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(body, "Bonjour le monde");
}

/// What: Downloading with no translation present is refused.
///
/// - Input: Empty text
/// - Output: `DocumentError::NothingToDownload`; directory stays empty
#[test]
fn empty_translation_is_not_saved() {
    let dir = TempDir::new().expect("tempdir");
    let now = chrono::Utc::now();

    match files::save_translation(dir.path(), "fr", "", now) {
        Err(DocumentError::NothingToDownload) => {}
        other => panic!("expected NothingToDownload, got {other:?}"),
    }
    let entries = std::fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(entries, 0);
}
