//! Layout components (form area and status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form is drawn; extra terminal width is left empty
const MAX_FORM_WIDTH: u16 = 72;

/// Split the screen into the form area and the status bar row
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let form_area = Rect {
        width: chunks[0].width.min(MAX_FORM_WIDTH),
        ..chunks[0]
    };
    (form_area, chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submission indicator
    let indicator = if app.form.is_submitting() {
        Span::styled(" ● ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Gray))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        format!("Tab:next  Space:toggle  ←/→:choose  {SUBMIT_SHORTCUT}:submit"),
        Style::default().fg(Color::Gray),
    ));

    if app.form.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Submitting… ({})", app.form.in_flight()),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(at) = app.form.last_dispatched_at() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!(
                "sent {} at {}",
                app.form.dispatched(),
                at.with_timezone(&chrono::Local).format("%H:%M:%S")
            ),
            Style::default().fg(Color::Blue),
        ));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " Esc:quit ";
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
