//! Pure state transitions for the translation pipeline.
//!
//! Everything here mutates [`AppState`] without touching the terminal, so
//! the whole pipeline is testable without a live UI: input clamping,
//! request dispatch with fresh ids, language selection, swap, and the
//! stale-discard application of worker updates.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::catalog::AUTO;
use crate::pipeline::{TranslateJob, TranslateUpdate};
use crate::state::{AppState, Slot};
use crate::util::{char_count, clamp_chars};

/// Maximum number of characters accepted in the input buffer.
pub const MAX_INPUT_CHARS: usize = 5000;

/// Placeholder shown in the output pane while a request is in flight.
pub const TRANSLATING: &str = "Translating...";

/// How long a toast stays visible.
const TOAST_SECS: u64 = 4;

/// What: Replace the input buffer, enforcing the character clamp.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `text`: New content; anything past [`MAX_INPUT_CHARS`] characters is
///   dropped before storing.
pub fn set_input_text(app: &mut AppState, text: &str) {
    app.input = clamp_chars(text, MAX_INPUT_CHARS).to_string();
}

/// Append one character to the input buffer unless the clamp is reached.
pub fn push_input_char(app: &mut AppState, ch: char) {
    if char_count(&app.input) < MAX_INPUT_CHARS {
        app.input.push(ch);
    }
}

/// Character count of the input buffer, as shown by the counter.
#[must_use]
pub fn input_char_count(app: &AppState) -> usize {
    char_count(&app.input)
}

/// What: Trigger a translation for the current buffers and selection.
///
/// Inputs:
/// - `app`: Mutable application state; allocates the next request id.
/// - `job_tx`: Channel to the debounce worker.
/// - `immediate`: Bypass the quiet window (shortcuts, selection changes).
///
/// Details:
/// - Empty or whitespace-only input bypasses the pipeline entirely: the
///   output buffer is cleared, no job is sent, and the latest id is
///   advanced so an in-flight completion for the old text is discarded.
/// - The id allows correlating worker updates so stale completions are
///   discarded by [`apply_update`].
pub fn send_request(
    app: &mut AppState,
    job_tx: &mpsc::UnboundedSender<TranslateJob>,
    immediate: bool,
) {
    if app.input.trim().is_empty() {
        // Burn a fresh id so a still-in-flight completion for the old
        // text cannot repopulate the cleared output.
        app.latest_request_id = app.next_request_id;
        app.next_request_id += 1;
        app.output.clear();
        return;
    }
    let id = app.next_request_id;
    app.next_request_id += 1;
    app.latest_request_id = id;
    let _ = job_tx.send(TranslateJob {
        id,
        text: app.input.clone(),
        source: app.input_lang.clone(),
        target: app.output_lang.clone(),
        immediate,
    });
}

/// What: Apply a worker update to the output buffer.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `update`: Progress report from the translate worker.
///
/// Details:
/// - Updates whose id is not the latest issued request are dropped, so a
///   slow earlier response can never overwrite a newer one.
/// - `Started` writes the `"Translating..."` placeholder; `Finished`
///   strictly overwrites it with the result or the error's display
///   message.
pub fn apply_update(app: &mut AppState, update: TranslateUpdate) {
    match update {
        TranslateUpdate::Started { id } => {
            if id == app.latest_request_id {
                app.output = TRANSLATING.to_string();
            }
        }
        TranslateUpdate::Finished { id, result } => {
            if id != app.latest_request_id {
                tracing::debug!(id, latest = app.latest_request_id, "dropping stale translation");
                return;
            }
            app.output = match result {
                Ok(text) => text,
                Err(e) => e.user_message(),
            };
        }
    }
}

/// Set one language slot. The caller re-triggers translation.
pub fn select_language(app: &mut AppState, slot: Slot, code: &str) {
    match slot {
        Slot::Input => app.input_lang = code.to_string(),
        Slot::Output => app.output_lang = code.to_string(),
    }
}

/// What: Exchange the language slots and the two text buffers.
///
/// Inputs:
/// - `app`: Mutable application state.
///
/// Output:
/// - `false` when the source language is `"auto"` (auto-detect has no
///   inverse meaning, so the swap is rejected and nothing changes);
///   `true` after a successful exchange.
pub fn swap(app: &mut AppState) -> bool {
    if app.input_lang == AUTO {
        return false;
    }
    std::mem::swap(&mut app.input_lang, &mut app.output_lang);
    std::mem::swap(&mut app.input, &mut app.output);
    // The output half of the pair is unconstrained, so re-clamp after it
    // lands in the input slot.
    let keep = clamp_chars(&app.input, MAX_INPUT_CHARS).len();
    app.input.truncate(keep);
    true
}

/// Show a transient status message.
pub fn show_toast(app: &mut AppState, message: impl Into<String>) {
    app.toast_message = Some(message.into());
    app.toast_expires_at = Some(Instant::now() + Duration::from_secs(TOAST_SECS));
}

/// Clear the toast once its deadline has passed.
pub fn expire_toast(app: &mut AppState) {
    if let Some(deadline) = app.toast_expires_at
        && Instant::now() >= deadline
    {
        app.toast_message = None;
        app.toast_expires_at = None;
    }
}

/// What: Build the save-file name for the current target language.
///
/// Inputs:
/// - `lang_code`: Target language code embedded in the name.
/// - `now`: Timestamp to embed.
///
/// Output:
/// - `translated-to-<code>-<ISO 8601 with ':' and '.' replaced by '-'>.txt`
#[must_use]
pub fn download_filename(lang_code: &str, now: chrono::DateTime<chrono::Utc>) -> String {
    let ts = now
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("translated-to-{lang_code}-{ts}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::TranslateError;

    /// What: Oversized writes store exactly the first 5000 characters.
    ///
    /// - Input: 6000-character string
    /// - Output: Buffer and counter both read 5000
    #[test]
    fn input_is_clamped_to_limit() {
        let mut app = AppState::default();
        let long = "x".repeat(MAX_INPUT_CHARS + 1000);
        set_input_text(&mut app, &long);
        assert_eq!(input_char_count(&app), MAX_INPUT_CHARS);
        assert_eq!(app.input, long[..MAX_INPUT_CHARS]);

        // push refuses to grow past the clamp
        push_input_char(&mut app, 'y');
        assert_eq!(input_char_count(&app), MAX_INPUT_CHARS);
    }

    /// What: Empty input clears output and sends nothing.
    ///
    /// - Input: Whitespace-only buffer
    /// - Output: Output cleared, channel stays empty, latest id advanced
    ///   so in-flight completions become stale
    #[test]
    fn empty_input_short_circuits() {
        let mut app = AppState {
            input: "   \n".to_string(),
            output: "stale".to_string(),
            ..AppState::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        send_request(&mut app, &tx, false);
        assert!(app.output.is_empty());
        assert_eq!(app.latest_request_id, 1);
        assert_eq!(app.next_request_id, 2);
        assert!(rx.try_recv().is_err());
    }

    /// What: Clearing the input invalidates the in-flight request.
    ///
    /// - Input: Dispatch for "hello", then an empty-input dispatch, then
    ///   the old request's completion arrives
    /// - Output: The cleared output stays empty
    #[test]
    fn clearing_input_invalidates_inflight_request() {
        let mut app = AppState {
            input: "hello".to_string(),
            ..AppState::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        send_request(&mut app, &tx, true);
        let job = rx.try_recv().expect("job queued");

        app.input.clear();
        send_request(&mut app, &tx, false);
        assert!(app.output.is_empty());
        assert!(rx.try_recv().is_err());

        // The old text's translation limps in after the clear.
        apply_update(
            &mut app,
            TranslateUpdate::Finished {
                id: job.id,
                result: Ok("Bonjour".to_string()),
            },
        );
        assert!(app.output.is_empty());
    }

    /// What: Dispatch allocates a fresh id and forwards the buffers.
    ///
    /// - Input: "hello", auto → fr
    /// - Output: Job with id 1 carrying text and languages
    #[test]
    fn send_request_allocates_ids() {
        let mut app = AppState {
            input: "hello".to_string(),
            output_lang: "fr".to_string(),
            ..AppState::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        send_request(&mut app, &tx, true);
        assert_eq!(app.latest_request_id, 1);
        assert_eq!(app.next_request_id, 2);
        let job = rx.try_recv().expect("job queued");
        assert_eq!(job.id, 1);
        assert_eq!(job.text, "hello");
        assert_eq!(job.source, "auto");
        assert_eq!(job.target, "fr");
        assert!(job.immediate);
    }

    /// What: Swap is rejected while the source language is auto.
    ///
    /// - Input: Default state (auto → en) with text in both buffers
    /// - Output: `false`, state untouched
    #[test]
    fn swap_rejects_auto_source() {
        let mut app = AppState {
            input: "hello".to_string(),
            output: "bonjour".to_string(),
            ..AppState::default()
        };
        assert!(!swap(&mut app));
        assert_eq!(app.input_lang, "auto");
        assert_eq!(app.output_lang, "en");
        assert_eq!(app.input, "hello");
        assert_eq!(app.output, "bonjour");
    }

    /// What: A valid swap exchanges slots and buffers; twice is identity.
    ///
    /// - Input: en → fr with distinct buffer contents
    /// - Output: Everything exchanged, then restored by the second swap
    #[test]
    fn swap_exchanges_and_is_idempotent_twice() {
        let mut app = AppState {
            input_lang: "en".to_string(),
            output_lang: "fr".to_string(),
            input: "hello".to_string(),
            output: "bonjour".to_string(),
            ..AppState::default()
        };
        assert!(swap(&mut app));
        assert_eq!(app.input_lang, "fr");
        assert_eq!(app.output_lang, "en");
        assert_eq!(app.input, "bonjour");
        assert_eq!(app.output, "hello");

        assert!(swap(&mut app));
        assert_eq!(app.input_lang, "en");
        assert_eq!(app.input, "hello");
        assert_eq!(app.output, "bonjour");
    }

    /// What: Only the latest request id may touch the output buffer.
    ///
    /// - Input: Started/Finished updates with stale and current ids
    /// - Output: Stale updates ignored, current ones applied
    #[test]
    fn apply_update_discards_stale_ids() {
        let mut app = AppState {
            latest_request_id: 5,
            ..AppState::default()
        };

        apply_update(&mut app, TranslateUpdate::Started { id: 5 });
        assert_eq!(app.output, TRANSLATING);

        // A slow completion from an older request must not win.
        apply_update(
            &mut app,
            TranslateUpdate::Finished {
                id: 3,
                result: Ok("old".to_string()),
            },
        );
        assert_eq!(app.output, TRANSLATING);

        apply_update(
            &mut app,
            TranslateUpdate::Finished {
                id: 5,
                result: Ok("fresh".to_string()),
            },
        );
        assert_eq!(app.output, "fresh");
    }

    /// What: Failures overwrite the placeholder with a display message.
    ///
    /// - Input: HTTP 500 completion for the latest id
    /// - Output: Network-error display string, no lingering placeholder
    #[test]
    fn apply_update_renders_errors() {
        let mut app = AppState {
            latest_request_id: 1,
            output: TRANSLATING.to_string(),
            ..AppState::default()
        };
        apply_update(
            &mut app,
            TranslateUpdate::Finished {
                id: 1,
                result: Err(TranslateError::Http { status: 500 }),
            },
        );
        assert!(app.output.contains("HTTP 500"));
    }

    /// What: The save-file name embeds language and sanitized timestamp.
    ///
    /// - Input: Fixed instant, target "fr"
    /// - Output: `translated-to-fr-...` with no ':' or '.'
    #[test]
    fn download_filename_is_sanitized() {
        let now = chrono::DateTime::parse_from_rfc3339("2026-08-30T12:34:56.789Z")
            .expect("timestamp")
            .with_timezone(&chrono::Utc);
        let name = download_filename("fr", now);
        assert_eq!(name, "translated-to-fr-2026-08-30T12-34-56-789Z.txt");
        assert!(!name[..name.len() - 4].contains(':'));
        assert!(!name[..name.len() - 4].contains('.'));
    }
}
