//! Sign-up form controller

use super::error::FormError;
use super::field::{FieldChange, FieldInput, FieldName};
use super::form_state::{reduce, FormAction, FormState, SubmissionPayload};
use super::validation::{validate, ErrorMap};
use chrono::{DateTime, Utc};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    SubmitButton,
    ResetButton,
}

const SUBMIT_INDEX: usize = FieldName::ALL.len();
const RESET_INDEX: usize = SUBMIT_INDEX + 1;

/// Owns the form values, the latest validation result and submission
/// bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    values: FormState,
    errors: ErrorMap,
    active_field_index: usize,
    in_flight: usize,
    dispatched: u32,
    last_dispatched_at: Option<DateTime<Utc>>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    /// Errors from the most recent submit attempt
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Merge a raw input event into the form. No validation happens here.
    pub fn on_field_change(&mut self, field: FieldName, input: FieldInput) -> Result<(), FormError> {
        let change = FieldChange::from_input(field, input)?;
        self.dispatch(FormAction::Set(change));
        Ok(())
    }

    /// Clear all values and errors
    pub fn reset(&mut self) {
        self.dispatch(FormAction::Reset);
        self.errors = ErrorMap::default();
    }

    fn dispatch(&mut self, action: FormAction) {
        let current = std::mem::take(&mut self.values);
        self.values = reduce(current, action);
    }

    /// Validate the current values, replacing the previous errors.
    ///
    /// Returns a snapshot to submit when every rule passes.
    pub fn on_submit(&mut self) -> Option<SubmissionPayload> {
        self.errors = validate(&self.values);
        if self.errors.is_empty() {
            Some(SubmissionPayload::snapshot(&self.values))
        } else {
            let failing: Vec<_> = self.errors.iter().map(|(field, _)| field.key()).collect();
            tracing::debug!(?failing, "submit blocked by validation");
            None
        }
    }

    /// Record that a submission was handed to the client
    pub fn submission_started(&mut self) {
        self.in_flight += 1;
        self.dispatched += 1;
        self.last_dispatched_at = Some(Utc::now());
    }

    /// Record that a previously started submission finished
    pub fn submission_settled(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// True while any submission is in flight. Does not block new submits.
    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn dispatched(&self) -> u32 {
        self.dispatched
    }

    pub fn last_dispatched_at(&self) -> Option<DateTime<Utc>> {
        self.last_dispatched_at
    }

    pub fn focus(&self) -> Focus {
        match self.active_field_index {
            SUBMIT_INDEX => Focus::SubmitButton,
            RESET_INDEX => Focus::ResetButton,
            index => Focus::Field(FieldName::ALL[index]),
        }
    }

    /// Move focus directly onto a field
    #[cfg(test)]
    pub fn focus_field(&mut self, field: FieldName) {
        if let Some(index) = FieldName::ALL.iter().position(|f| *f == field) {
            self.active_field_index = index;
        }
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        RESET_INDEX + 1 // four inputs, submit, reset
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(RESET_INDEX);
    }
}
