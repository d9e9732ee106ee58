//! Event handling layer: keyboard and mouse dispatch.
//!
//! Modal dialogs are handled first, then the open dropdown, then global
//! shortcuts and text editing. Returns `true` from [`handle_event`] to
//! signal the application should exit.

use std::path::Path;

use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tokio::sync::mpsc;

use crate::catalog;
use crate::files::{self, DocumentError};
use crate::logic;
use crate::pipeline::TranslateJob;
use crate::state::{AppState, Focus, Modal, Rect4, Slot};

/// Input note shown when a PDF/DOC/DOCX is selected, mirroring the
/// original front end.
const EXTRACTION_NOTE: &str =
    "File format requires additional processing.\nPlease copy and paste the text directly for best results.";

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    job_tx: &mpsc::UnboundedSender<TranslateJob>,
) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(ke, app, job_tx),
        CEvent::Mouse(me) => {
            handle_mouse(me, app, job_tx);
            false
        }
        _ => false,
    }
}

fn handle_key(
    ke: KeyEvent,
    app: &mut AppState,
    job_tx: &mpsc::UnboundedSender<TranslateJob>,
) -> bool {
    // Modal handling takes priority over everything else.
    match &mut app.modal {
        Modal::Alert { .. } => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
                app.modal = Modal::None;
            }
            return false;
        }
        Modal::FilePrompt { path } => {
            match ke.code {
                KeyCode::Esc => app.modal = Modal::None,
                KeyCode::Backspace => {
                    path.pop();
                }
                KeyCode::Char(c) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
                    path.push(c);
                }
                KeyCode::Enter => {
                    let chosen = path.clone();
                    app.modal = Modal::None;
                    load_document_into(app, Path::new(chosen.trim()), job_tx);
                }
                _ => {}
            }
            return false;
        }
        Modal::None => {}
    }

    // Open dropdown captures navigation keys.
    if let Some(slot) = app.dropdown_open {
        match ke.code {
            KeyCode::Esc => app.dropdown_open = None,
            KeyCode::Up => move_dropdown(app, -1),
            KeyCode::Down => move_dropdown(app, 1),
            KeyCode::Enter => {
                if let Some(idx) = app.dropdown_state.selected()
                    && let Some(lang) = catalog::list().get(idx)
                {
                    choose_language(app, slot, lang.code, job_tx);
                }
            }
            _ => {}
        }
        return false;
    }

    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    let shift = ke.modifiers.contains(KeyModifiers::SHIFT);

    match ke.code {
        // Ctrl+Shift+S swaps; plain Ctrl+S saves. Shift changes the char
        // case, so match both spellings.
        KeyCode::Char('s' | 'S') if ctrl && shift => {
            request_swap(app, job_tx);
        }
        KeyCode::Char('s') if ctrl => {
            save_output(app);
        }
        KeyCode::Enter if ctrl => {
            logic::send_request(app, job_tx, true);
        }
        KeyCode::Char('o') if ctrl => {
            app.modal = Modal::FilePrompt { path: String::new() };
        }
        KeyCode::Char('d') if ctrl => {
            toggle_dark_mode(app);
        }
        KeyCode::Char('q' | 'c') if ctrl => {
            return true;
        }
        KeyCode::F(2) => open_dropdown(app, Slot::Input),
        KeyCode::F(3) => open_dropdown(app, Slot::Output),
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Input => Focus::Output,
                Focus::Output => Focus::Input,
            };
        }
        KeyCode::Esc => return true,
        // Text editing only applies to the input pane.
        KeyCode::Char(c) if app.focus == Focus::Input && !ctrl => {
            logic::push_input_char(app, c);
            logic::send_request(app, job_tx, false);
        }
        KeyCode::Enter if app.focus == Focus::Input => {
            logic::push_input_char(app, '\n');
            logic::send_request(app, job_tx, false);
        }
        KeyCode::Backspace if app.focus == Focus::Input => {
            app.input.pop();
            logic::send_request(app, job_tx, false);
        }
        _ => {}
    }
    false
}

fn handle_mouse(me: MouseEvent, app: &mut AppState, job_tx: &mpsc::UnboundedSender<TranslateJob>) {
    let MouseEventKind::Down(MouseButton::Left) = me.kind else {
        return;
    };
    let (col, row) = (me.column, me.row);

    // A click inside the open dropdown selects a row; anywhere else it is a
    // click-outside and closes the list before the normal hit tests run.
    if let Some(slot) = app.dropdown_open {
        if hit(app.dropdown_rect, col, row) {
            if let Some((_, y, _, _)) = app.dropdown_rect {
                let idx = app.dropdown_state.offset() + usize::from(row - y);
                if let Some(lang) = catalog::list().get(idx) {
                    choose_language(app, slot, lang.code, job_tx);
                }
            }
            return;
        }
        app.dropdown_open = None;
        // A click on the selector that opened this list toggles it shut;
        // falling through would immediately reopen it.
        let own_rect = match slot {
            Slot::Input => app.input_lang_rect,
            Slot::Output => app.output_lang_rect,
        };
        if hit(own_rect, col, row) {
            return;
        }
    }

    if hit(app.input_lang_rect, col, row) {
        open_dropdown(app, Slot::Input);
    } else if hit(app.output_lang_rect, col, row) {
        open_dropdown(app, Slot::Output);
    } else if hit(app.swap_rect, col, row) {
        request_swap(app, job_tx);
    } else if hit(app.input_rect, col, row) {
        app.focus = Focus::Input;
    } else if hit(app.output_rect, col, row) {
        app.focus = Focus::Output;
    }
}

/// Whether terminal cell `(col, row)` lies inside `rect`.
fn hit(rect: Option<Rect4>, col: u16, row: u16) -> bool {
    rect.is_some_and(|(x, y, w, h)| col >= x && col < x + w && row >= y && row < y + h)
}

/// Open one dropdown (closing the other implicitly) with the current
/// selection highlighted.
fn open_dropdown(app: &mut AppState, slot: Slot) {
    // Clicking the already-open selector toggles it shut.
    if app.dropdown_open == Some(slot) {
        app.dropdown_open = None;
        return;
    }
    let code = match slot {
        Slot::Input => app.input_lang.as_str(),
        Slot::Output => app.output_lang.as_str(),
    };
    app.dropdown_open = Some(slot);
    app.dropdown_state.select(Some(catalog::position(code).unwrap_or(0)));
}

fn move_dropdown(app: &mut AppState, delta: i32) {
    let len = catalog::list().len();
    let cur = app.dropdown_state.selected().unwrap_or(0);
    #[allow(
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let next = (cur as i32 + delta).rem_euclid(len as i32) as usize;
    app.dropdown_state.select(Some(next));
}

/// Apply a dropdown choice and re-translate immediately.
fn choose_language(
    app: &mut AppState,
    slot: Slot,
    code: &str,
    job_tx: &mpsc::UnboundedSender<TranslateJob>,
) {
    logic::select_language(app, slot, code);
    app.dropdown_open = None;
    logic::send_request(app, job_tx, true);
}

/// Swap languages and buffers; a rejected swap (auto source) only shows a
/// transient cue.
fn request_swap(app: &mut AppState, job_tx: &mpsc::UnboundedSender<TranslateJob>) {
    if logic::swap(app) {
        logic::send_request(app, job_tx, true);
    } else {
        logic::show_toast(app, "Swap is unavailable while the source language is Auto");
    }
}

/// Save the output buffer, surfacing failures as blocking alerts.
fn save_output(app: &mut AppState) {
    match files::save_translation(
        &app.download_dir,
        &app.output_lang,
        &app.output,
        chrono::Utc::now(),
    ) {
        Ok(path) => logic::show_toast(app, format!("Saved to {}", path.display())),
        Err(e) => app.modal = Modal::Alert { message: e.to_string() },
    }
}

/// Load a document into the input buffer and translate it.
fn load_document_into(
    app: &mut AppState,
    path: &Path,
    job_tx: &mpsc::UnboundedSender<TranslateJob>,
) {
    let file_name = path
        .file_name()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_string);
    match files::load_document(path) {
        Ok(content) => {
            app.document_label = file_name;
            logic::set_input_text(app, &content);
            logic::send_request(app, job_tx, true);
        }
        Err(e @ DocumentError::NeedsExtraction) => {
            // Keep the label and leave a note in the buffer, as the
            // original front end does for these types.
            app.document_label = file_name;
            logic::set_input_text(app, EXTRACTION_NOTE);
            app.modal = Modal::Alert { message: e.to_string() };
        }
        Err(e) => {
            app.document_label = None;
            app.modal = Modal::Alert { message: e.to_string() };
        }
    }
}

/// Toggle the palette and mark the preference store dirty.
fn toggle_dark_mode(app: &mut AppState) {
    app.dark_mode = !app.dark_mode;
    crate::prefs::set_dark_mode(&mut app.prefs, app.dark_mode);
    app.prefs_dirty = true;
}
