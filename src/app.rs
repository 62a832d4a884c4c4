//! Application state and core logic

use crate::state::{FieldInput, FieldName, Focus, Form, Gender, SignupForm};
use crate::submission::{SubmissionClientTrait, SubmissionOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::Instrument;
use uuid::Uuid;

/// A submission task that has finished, successfully or not
#[derive(Debug)]
struct SettledSubmission {
    id: Uuid,
    outcome: SubmissionOutcome,
}

/// Main application struct
pub struct App {
    /// The sign-up form controller
    pub form: SignupForm,
    /// Client used for every submission
    client: Arc<dyn SubmissionClientTrait>,
    settled_tx: UnboundedSender<SettledSubmission>,
    settled_rx: UnboundedReceiver<SettledSubmission>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn SubmissionClientTrait>) -> Self {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        Self {
            form: SignupForm::new(),
            client,
            settled_tx,
            settled_rx,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('s') if ctrl => {
                self.submit();
                return Ok(());
            }
            KeyCode::Enter if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit();
                return Ok(());
            }
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.next_field();
                return Ok(());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.prev_field();
                return Ok(());
            }
            _ => {}
        }

        match self.form.focus() {
            Focus::Field(field @ (FieldName::Name | FieldName::Email)) => {
                self.handle_text_key(field, key)?
            }
            Focus::Field(FieldName::AgreeTerms) => self.handle_checkbox_key(key)?,
            Focus::Field(FieldName::Gender) => self.handle_radio_key(key)?,
            Focus::SubmitButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit();
                }
            }
            Focus::ResetButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.form.reset();
                    self.status_message = Some("Form cleared".to_string());
                }
            }
        }
        Ok(())
    }

    fn handle_text_key(&mut self, field: FieldName, key: KeyEvent) -> Result<()> {
        let current = match field {
            FieldName::Email => &self.form.values().email,
            _ => &self.form.values().name,
        };
        let chorded = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key.code {
            KeyCode::Char(c) if !chorded => {
                let mut value = current.clone();
                value.push(c);
                self.form.on_field_change(field, FieldInput::Text(value))?;
            }
            KeyCode::Backspace => {
                let mut value = current.clone();
                value.pop();
                self.form.on_field_change(field, FieldInput::Text(value))?;
            }
            KeyCode::Enter => self.form.next_field(),
            _ => {}
        }
        Ok(())
    }

    fn handle_checkbox_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char(' ') => {
                let checked = !self.form.values().agree_terms;
                self.form
                    .on_field_change(FieldName::AgreeTerms, FieldInput::Checkbox(checked))?;
            }
            KeyCode::Enter => self.form.next_field(),
            _ => {}
        }
        Ok(())
    }

    fn handle_radio_key(&mut self, key: KeyEvent) -> Result<()> {
        let current = self.form.values().gender;
        let selected = match key.code {
            KeyCode::Left | KeyCode::Char('h') => current.prev(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => current.next(),
            KeyCode::Char('m') => Gender::Male,
            KeyCode::Char('f') => Gender::Female,
            KeyCode::Backspace | KeyCode::Delete => Gender::Unset,
            KeyCode::Enter => {
                self.form.next_field();
                return Ok(());
            }
            _ => return Ok(()),
        };
        self.form.on_field_change(
            FieldName::Gender,
            FieldInput::Radio(selected.as_str().to_string()),
        )?;
        Ok(())
    }

    /// Validate and, when clean, post the form in the background.
    ///
    /// The request is not awaited; repeated calls issue independent requests.
    pub fn submit(&mut self) {
        let Some(payload) = self.form.on_submit() else {
            let count = self.form.errors().len();
            self.status_message = Some(format!("{count} field(s) need attention"));
            return;
        };

        let id = Uuid::new_v4();
        let span = tracing::info_span!("submission", %id);
        span.in_scope(|| tracing::info!("dispatching submission"));

        let client = Arc::clone(&self.client);
        let settled_tx = self.settled_tx.clone();
        tokio::spawn(
            async move {
                let outcome = client.submit(payload).await;
                // Receiver is gone once the app has shut down
                let _ = settled_tx.send(SettledSubmission { id, outcome });
            }
            .instrument(span),
        );

        self.form.submission_started();
        self.status_message = Some("Form submitted".to_string());
    }

    /// Drain submissions that finished since the last call
    pub fn poll_submissions(&mut self) {
        while let Ok(settled) = self.settled_rx.try_recv() {
            self.record_settled(settled);
        }
    }

    fn record_settled(&mut self, settled: SettledSubmission) {
        self.form.submission_settled();
        let SettledSubmission { id, outcome } = settled;
        let accepted = outcome.is_accepted();
        let result = outcome.into_value();
        // Failures are logged only; the form shows no error state for them
        if accepted {
            tracing::info!(%id, %result, "submission settled");
        } else {
            tracing::warn!(%id, %result, "submission settled with error");
        }
    }
}
