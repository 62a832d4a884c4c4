//! Form values and the reducer that updates them

use super::field::{FieldChange, Gender};
use serde::{Deserialize, Serialize};

/// Current values of all sign-up form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub agree_terms: bool,
    pub gender: Gender,
}

/// Actions accepted by [`reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Overwrite a single field
    Set(FieldChange),
    /// Restore the initial empty state
    Reset,
}

/// Apply an action to the form state.
///
/// `Set` replaces exactly one field and leaves the others untouched.
pub fn reduce(state: FormState, action: FormAction) -> FormState {
    match action {
        FormAction::Set(change) => match change {
            FieldChange::Name(name) => FormState { name, ..state },
            FieldChange::Email(email) => FormState { email, ..state },
            FieldChange::AgreeTerms(agree_terms) => FormState {
                agree_terms,
                ..state
            },
            FieldChange::Gender(gender) => FormState { gender, ..state },
        },
        FormAction::Reset => FormState::default(),
    }
}

/// Snapshot of the form taken at the moment of a valid submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmissionPayload(FormState);

impl SubmissionPayload {
    pub fn snapshot(state: &FormState) -> Self {
        Self(state.clone())
    }

    #[cfg(test)]
    pub fn as_state(&self) -> &FormState {
        &self.0
    }
}
