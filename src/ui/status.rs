use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, Screen, ToastLevel};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let status = match &model.screen {
        Screen::Edit(session) => {
            let buffer = session.editor.buffer();
            let cursor = buffer.cursor();
            let modified = if buffer.is_dirty() { " [modified]" } else { "" };
            format!(
                " {}  Ln {}, Col {}{}  ^G:save  Esc:cancel",
                session.target.label(),
                cursor.line + 1,
                cursor.col + 1,
                modified
            )
        }
        Screen::View(viewer) => {
            let viewport = &viewer.viewport;
            format!(
                " {}  [{}%]  Row {}/{}  e:edit  q:quit",
                viewer.entry.title,
                viewport.scroll_percent(),
                (viewport.offset() + 1).min(viewport.total_lines()),
                viewport.total_lines()
            )
        }
        Screen::Closed => return,
    };

    let status_bar = Paragraph::new(status).style(model.theme.status_style());
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => ("[info]", model.theme.status_style()),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
