//! Form domain layer
//!
//! Type-safe form handling for the sign-up form: field values, the reducer
//! that updates them, validation rules and the controller tying them
//! together.

mod error;
mod field;
mod form_state;
mod signup_form;
mod validation;

pub use field::{FieldInput, FieldName, Gender};
pub use form_state::SubmissionPayload;
pub use signup_form::{Focus, Form, SignupForm};

#[cfg(test)]
pub use form_state::FormState;
