use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{EditSession, Model, Screen, ViewerState};
use crate::editor::RenderOutcome;
use crate::markdown::StyledRun;
use crate::ui::style::Theme;
use crate::ui::{FOOTER_ROWS, VIEWER_HEADER_ROWS};

use super::status::{render_status_bar, render_toast_bar};

/// Draw the whole screen for `model`.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    let (body, toast_area, status_area) = split_footer(area);

    let theme = model.theme.clone();
    match &mut model.screen {
        Screen::Edit(session) => render_editor(session, &theme, frame, body, area),
        Screen::View(viewer) => render_viewer(viewer, &theme, frame, body),
        Screen::Closed => return,
    }

    render_toast_bar(model, frame, toast_area);
    render_status_bar(model, frame, status_area);
}

/// Split `area` into the body and the toast and status rows below it.
pub fn split_footer(area: Rect) -> (Rect, Rect, Rect) {
    let body_height = area.height.saturating_sub(FOOTER_ROWS);
    let body = Rect {
        height: body_height,
        ..area
    };
    let toast = Rect {
        y: area.y + body_height,
        height: area.height.saturating_sub(body_height).min(1),
        ..area
    };
    let status = Rect {
        y: toast.y + toast.height,
        height: area.height.saturating_sub(body_height + toast.height),
        ..area
    };
    (body, toast, status)
}

fn render_editor(
    session: &mut EditSession,
    theme: &Theme,
    frame: &mut Frame,
    body: Rect,
    area: Rect,
) {
    let frame_out = session
        .editor
        .render(usize::from(body.width), usize::from(body.height));
    let editor_frame = match frame_out {
        RenderOutcome::Frame(editor_frame) => editor_frame,
        RenderOutcome::NoRoom => {
            render_too_small(frame, area);
            return;
        }
    };

    let lines: Vec<Line> = editor_frame
        .rows
        .iter()
        .map(|row| styled_line(row, theme))
        .collect();
    frame.render_widget(Paragraph::new(lines), body);

    let (row, col) = editor_frame.cursor;
    let x = body.x + u16::try_from(col).unwrap_or(body.width.saturating_sub(1));
    let y = body.y + u16::try_from(row).unwrap_or(body.height.saturating_sub(1));
    frame.set_cursor_position((x, y));
}

fn render_viewer(viewer: &ViewerState, theme: &Theme, frame: &mut Frame, body: Rect) {
    let header_height = body.height.min(VIEWER_HEADER_ROWS);
    let header = Rect {
        height: header_height,
        ..body
    };
    let content = Rect {
        y: body.y + header_height,
        height: body.height - header_height,
        ..body
    };

    let entry = &viewer.entry;
    let header_lines = vec![
        Line::styled(format!("{} (#{})", entry.title, entry.id), theme.title),
        Line::styled(entry.date_label(), theme.hr),
    ];
    frame.render_widget(Paragraph::new(header_lines), header);

    let lines: Vec<Line> = viewer
        .visible_rows()
        .iter()
        .map(|row| styled_line(row, theme))
        .collect();
    frame.render_widget(Paragraph::new(lines), content);
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new("Terminal too small").alignment(Alignment::Center);
    frame.render_widget(message, area);
}

fn styled_line(row: &[StyledRun], theme: &Theme) -> Line<'static> {
    Line::from(
        row.iter()
            .map(|run| Span::styled(run.text().to_string(), theme.style_for(run.tag())))
            .collect::<Vec<_>>(),
    )
}
