//! Sign-up form rendering

use super::field_renderer::{draw_checkbox, draw_error_line, draw_radio_group, draw_text_field};
use crate::app::App;
use crate::state::{FieldName, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const TERMS_CAPTION: &str = "I agree to the terms";

/// Draw the sign-up form with its buttons
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(1),             // Name error
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Length(3),             // Terms
            Constraint::Length(1),             // Terms error
            Constraint::Length(3),             // Gender
            Constraint::Length(1),             // Gender error
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let form = &app.form;
    let values = form.values();
    let errors = form.errors();
    let focus = form.focus();

    for (slot, field) in FieldName::ALL.into_iter().enumerate() {
        let input_area = chunks[slot * 2];
        let error_area = chunks[slot * 2 + 1];
        let is_active = focus == Focus::Field(field);
        let message = errors.get(field);
        let has_error = message.is_some();

        match field {
            FieldName::Name => draw_text_field(
                frame,
                input_area,
                field.label(),
                &values.name,
                is_active,
                has_error,
            ),
            FieldName::Email => draw_text_field(
                frame,
                input_area,
                field.label(),
                &values.email,
                is_active,
                has_error,
            ),
            FieldName::AgreeTerms => draw_checkbox(
                frame,
                input_area,
                field.label(),
                TERMS_CAPTION,
                values.agree_terms,
                is_active,
                has_error,
            ),
            FieldName::Gender => draw_radio_group(
                frame,
                input_area,
                field.label(),
                values.gender,
                is_active,
                has_error,
            ),
        }
        draw_error_line(frame, error_area, message);
    }

    draw_buttons(frame, chunks[8], focus);
}

fn draw_buttons(frame: &mut Frame, area: Rect, focus: Focus) {
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Submit
            Constraint::Length(1),
            Constraint::Length(11), // Reset
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        buttons[0],
        "Submit",
        focus == Focus::SubmitButton,
        Some(Color::Green),
    );
    render_button(
        frame,
        buttons[2],
        "Reset",
        focus == Focus::ResetButton,
        Some(Color::Gray),
    );
}
