//! Field rendering utilities for forms

use crate::state::Gender;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool, has_error: bool) -> Block<'static> {
    let style = if has_error && !is_active {
        Style::default().fg(Color::Red)
    } else {
        border_style(is_active)
    };
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(style)
}

/// Draw a single-line text input
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    has_error: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    frame.render_widget(content.block(field_block(label, is_active, has_error)), area);
}

/// Draw a checkbox with its caption
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    caption: &str,
    checked: bool,
    is_active: bool,
    has_error: bool,
) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let mark_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::raw(caption.to_string()),
    ]));

    frame.render_widget(content.block(field_block(label, is_active, has_error)), area);
}

/// Draw the gender radio group
pub fn draw_radio_group(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    selected: Gender,
    is_active: bool,
    has_error: bool,
) {
    let mut spans = Vec::new();
    for option in Gender::OPTIONS {
        let is_selected = option == selected;
        let mark = if is_selected { "(•)" } else { "( )" };
        let style = if is_selected && is_active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{mark} {}", option.label()), style));
        spans.push(Span::raw("   "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(field_block(label, is_active, has_error)),
        area,
    );
}

/// Draw the validation message under a field, if any
pub fn draw_error_line(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, area);
    }
}
