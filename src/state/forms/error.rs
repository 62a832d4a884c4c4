//! Errors raised while applying input to the form

use super::field::{FieldName, InputKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("field `{field}` expects {expected} input, got {actual}")]
    InputKindMismatch {
        field: FieldName,
        expected: InputKind,
        actual: InputKind,
    },

    #[error("`{option}` is not an option of field `{field}`")]
    UnknownOption { field: FieldName, option: String },
}
