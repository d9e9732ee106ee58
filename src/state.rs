//! Core application state for the tradui TUI.
//!
//! This module defines the central [`AppState`] container mutated by the
//! event and UI layers, plus the small enums describing focus, modal
//! dialogs, and the two language slots. The dark-mode preference subset is
//! persisted between runs via [`crate::prefs`].

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use ratatui::widgets::ListState;

/// Rectangle in terminal cells `(x, y, w, h)` used for mouse hit testing.
pub type Rect4 = (u16, u16, u16, u16);

/// The two language selection slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Source language of the text being translated.
    Input,
    /// Target language of the translation.
    Output,
}

/// Which text pane currently has keyboard focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// Left pane: editable input text.
    Input,
    /// Right pane: read-only translated output.
    Output,
}

/// Modal dialog state for the UI.
#[derive(Clone, Debug, Default)]
pub enum Modal {
    /// No modal visible.
    #[default]
    None,
    /// Blocking alert with a non-interactive message. Dismissed with Esc/Enter.
    Alert {
        /// Message shown in the dialog body.
        message: String,
    },
    /// Prompt asking for a document path to load into the input buffer.
    FilePrompt {
        /// Path text typed so far.
        path: String,
    },
}

/// Global application state shared by the event, pipeline, and UI layers.
///
/// Mutated only from the main event loop; background workers communicate
/// through channels and never touch this struct directly.
#[derive(Debug)]
pub struct AppState {
    /// Input text buffer, clamped to [`crate::logic::MAX_INPUT_CHARS`] characters.
    pub input: String,
    /// Output text buffer; may transiently hold `"Translating..."` or an
    /// error message.
    pub output: String,
    /// Source language code; `"auto"` requests detection.
    pub input_lang: String,
    /// Target language code.
    pub output_lang: String,
    /// Which text pane has focus.
    pub focus: Focus,
    /// Active modal dialog, if any.
    pub modal: Modal,

    /// Which language dropdown is open, if any. Opening one closes the other.
    pub dropdown_open: Option<Slot>,
    /// List selection state for the open dropdown (selection + scroll offset).
    pub dropdown_state: ListState,

    /// Identifier of the latest translation request issued.
    pub latest_request_id: u64,
    /// Next request identifier to allocate.
    pub next_request_id: u64,

    /// Whether the dark palette is active.
    pub dark_mode: bool,
    /// In-memory copy of the persisted preference store.
    pub prefs: HashMap<String, String>,
    /// Path where preferences are persisted as JSON.
    pub prefs_path: PathBuf,
    /// Dirty flag indicating `prefs` needs to be saved.
    pub prefs_dirty: bool,

    /// Transient status message shown at the bottom of the screen.
    pub toast_message: Option<String>,
    /// Deadline after which the toast disappears.
    pub toast_expires_at: Option<Instant>,

    /// Name of the last document loaded, shown next to the load hint.
    pub document_label: Option<String>,
    /// Directory where translated files are saved.
    pub download_dir: PathBuf,

    // Mouse hit-test rectangles recorded during rendering.
    /// Clickable rectangle of the source-language selector.
    pub input_lang_rect: Option<Rect4>,
    /// Clickable rectangle of the target-language selector.
    pub output_lang_rect: Option<Rect4>,
    /// Clickable rectangle of the swap button.
    pub swap_rect: Option<Rect4>,
    /// Inner content rectangle of the open dropdown list.
    pub dropdown_rect: Option<Rect4>,
    /// Inner rectangle of the input text pane.
    pub input_rect: Option<Rect4>,
    /// Inner rectangle of the output text pane.
    pub output_rect: Option<Rect4>,
}

impl Default for AppState {
    /// Construct the startup state: auto-detected source, English target,
    /// focus on the input pane, preferences not yet loaded.
    fn default() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            input_lang: crate::catalog::AUTO.to_string(),
            output_lang: "en".to_string(),
            focus: Focus::Input,
            modal: Modal::None,

            dropdown_open: None,
            dropdown_state: ListState::default(),

            latest_request_id: 0,
            next_request_id: 1,

            dark_mode: false,
            prefs: HashMap::new(),
            prefs_path: crate::prefs::prefs_path(),
            prefs_dirty: false,

            toast_message: None,
            toast_expires_at: None,

            document_label: None,
            download_dir: std::env::var("HOME")
                .map_or_else(|_| PathBuf::from("."), PathBuf::from),

            input_lang_rect: None,
            output_lang_rect: None,
            swap_rect: None,
            dropdown_rect: None,
            input_rect: None,
            output_rect: None,
        }
    }
}
