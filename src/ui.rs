//! Rendering layer for the tradui TUI.
//!
//! Draws the language bar, the two text panes, the dropdown popup, modal
//! dialogs, and the footer. Mouse hit-test rectangles are recorded on the
//! [`AppState`] while drawing so the event layer can resolve clicks.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::catalog;
use crate::logic::{MAX_INPUT_CHARS, input_char_count};
use crate::state::{AppState, Focus, Modal, Rect4, Slot};
use crate::theme::theme;

/// Convert a ratatui rect to the hit-test tuple stored on the state.
const fn rect4(r: Rect) -> Rect4 {
    (r.x, r.y, r.width, r.height)
}

/// Trim a string to fit a cell width, appending an ellipsis when cut.
fn fit(s: &str, width: u16) -> String {
    let width = usize::from(width);
    if s.width() <= width {
        return s.to_string();
    }
    let mut out = String::new();
    for ch in s.chars() {
        if out.width() + 2 > width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

/// Render one frame of the application.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme(app.dark_mode);
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // language bar
            Constraint::Min(5),    // text panes
            Constraint::Length(1), // footer
        ])
        .split(area);

    draw_language_bar(f, app, chunks[0]);
    draw_panes(f, app, chunks[1]);
    draw_footer(f, app, chunks[2]);

    if app.dropdown_open.is_some() {
        draw_dropdown(f, app, chunks[0], chunks[1]);
    } else {
        app.dropdown_rect = None;
    }

    match app.modal.clone() {
        Modal::Alert { message } => draw_alert(f, app, &message, area),
        Modal::FilePrompt { path } => draw_file_prompt(f, app, &path, area),
        Modal::None => {}
    }
}

fn draw_language_bar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme(app.dark_mode);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(7), Constraint::Min(10)])
        .split(area);

    let selector = |open: bool| -> Block<'static> {
        let style = if open {
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.border)
        };
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(Style::default().bg(th.surface))
    };

    let input_open = app.dropdown_open == Some(Slot::Input);
    let block = selector(input_open).title(Span::styled(
        " From (F2) ",
        Style::default().fg(th.subtext),
    ));
    let label = Paragraph::new(Line::from(Span::styled(
        fit(&catalog::display_name(&app.input_lang), cols[0].width.saturating_sub(2)),
        Style::default().fg(th.text),
    )))
    .block(block);
    f.render_widget(label, cols[0]);
    app.input_lang_rect = Some(rect4(cols[0]));

    let swap = Paragraph::new(Line::from(Span::styled(
        " ⇄ ",
        Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.border))
            .style(Style::default().bg(th.surface)),
    );
    f.render_widget(swap, cols[1]);
    app.swap_rect = Some(rect4(cols[1]));

    let output_open = app.dropdown_open == Some(Slot::Output);
    let block = selector(output_open).title(Span::styled(
        " To (F3) ",
        Style::default().fg(th.subtext),
    ));
    let label = Paragraph::new(Line::from(Span::styled(
        fit(&catalog::display_name(&app.output_lang), cols[2].width.saturating_sub(2)),
        Style::default().fg(th.text),
    )))
    .block(block);
    f.render_widget(label, cols[2]);
    app.output_lang_rect = Some(rect4(cols[2]));
}

fn draw_panes(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme(app.dark_mode);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let border_for = |focused: bool| {
        if focused {
            Style::default().fg(th.accent)
        } else {
            Style::default().fg(th.border)
        }
    };

    let counter = format!(" {}/{MAX_INPUT_CHARS} ", input_char_count(app));
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_for(app.focus == Focus::Input))
        .title(Span::styled(" Text ", Style::default().fg(th.text)))
        .title_bottom(Line::from(Span::styled(counter, Style::default().fg(th.subtext))).right_aligned())
        .style(Style::default().bg(th.surface));
    let input = Paragraph::new(app.input.as_str())
        .style(Style::default().fg(th.text))
        .wrap(Wrap { trim: false })
        .block(input_block);
    f.render_widget(input, cols[0]);
    app.input_rect = Some(rect4(cols[0]));

    let translating = app.output == crate::logic::TRANSLATING;
    let output_style = if translating {
        Style::default().fg(th.subtext).add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(th.text)
    };
    let output_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_for(app.focus == Focus::Output))
        .title(Span::styled(" Translation ", Style::default().fg(th.text)))
        .style(Style::default().bg(th.surface));
    let output = Paragraph::new(app.output.as_str())
        .style(output_style)
        .wrap(Wrap { trim: false })
        .block(output_block);
    f.render_widget(output, cols[1]);
    app.output_rect = Some(rect4(cols[1]));
}

fn draw_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme(app.dark_mode);
    let right = app.toast_message.clone().unwrap_or_else(|| {
        app.document_label
            .as_ref()
            .map_or_else(String::new, |name| format!("Document: {name}"))
    });
    let hints =
        "Ctrl+Enter translate  Ctrl+S save  Ctrl+Shift+S swap  Ctrl+O open  Ctrl+D theme  Ctrl+Q quit";

    let right = fit(&right, area.width / 2);
    let pad = usize::from(area.width)
        .saturating_sub(hints.width())
        .saturating_sub(right.width());
    let line = Line::from(vec![
        Span::styled(hints, Style::default().fg(th.subtext)),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(th.warning)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_dropdown(f: &mut Frame, app: &mut AppState, bar: Rect, panes: Rect) {
    let th = theme(app.dark_mode);
    let Some(slot) = app.dropdown_open else {
        return;
    };
    let anchor = match slot {
        Slot::Input => app.input_lang_rect,
        Slot::Output => app.output_lang_rect,
    };
    let Some((ax, _, aw, _)) = anchor else {
        return;
    };

    let height = panes.height.clamp(4, 14);
    let width = aw.clamp(20, 40);
    let popup = Rect {
        x: ax.min(bar.right().saturating_sub(width)),
        y: bar.bottom().saturating_sub(1),
        width,
        height,
    }
    .intersection(f.area());

    let items: Vec<ListItem> = catalog::list()
        .iter()
        .map(|l| ListItem::new(format!("{} ({})", l.name, l.native)))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.accent))
                .style(Style::default().bg(th.surface).fg(th.text)),
        )
        .highlight_style(
            Style::default()
                .bg(th.highlight)
                .fg(th.accent)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(Clear, popup);
    f.render_stateful_widget(list, popup, &mut app.dropdown_state);
    // Inner area (without borders) is what clicks map against.
    app.dropdown_rect = Some((
        popup.x + 1,
        popup.y + 1,
        popup.width.saturating_sub(2),
        popup.height.saturating_sub(2),
    ));
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

fn draw_alert(f: &mut Frame, app: &AppState, message: &str, area: Rect) {
    let th = theme(app.dark_mode);
    let popup = centered(area, 60, 7);
    f.render_widget(Clear, popup);
    let body = Paragraph::new(vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(th.text))),
        Line::default(),
        Line::from(Span::styled("Press Enter to close", Style::default().fg(th.subtext))),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.warning))
            .title(Span::styled(" Notice ", Style::default().fg(th.warning)))
            .style(Style::default().bg(th.surface)),
    );
    f.render_widget(body, popup);
}

fn draw_file_prompt(f: &mut Frame, app: &AppState, path: &str, area: Rect) {
    let th = theme(app.dark_mode);
    let popup = centered(area, 70, 5);
    f.render_widget(Clear, popup);
    let shown = fit(path, popup.width.saturating_sub(4));
    let body = Paragraph::new(vec![
        Line::from(Span::styled(shown, Style::default().fg(th.text))),
        Line::from(Span::styled(
            "Enter to load · Esc to cancel · .txt only (PDF/DOC/DOCX are rejected)",
            Style::default().fg(th.subtext),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.accent))
            .title(Span::styled(" Open document ", Style::default().fg(th.accent)))
            .style(Style::default().bg(th.surface)),
    );
    f.render_widget(body, popup);
}
