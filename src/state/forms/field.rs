//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::FormError;

/// Identifies one of the sign-up form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    AgreeTerms,
    Gender,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::AgreeTerms,
        FieldName::Gender,
    ];

    /// Wire key used in the submitted JSON body
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::AgreeTerms => "agreeTerms",
            Self::Gender => "gender",
        }
    }

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::AgreeTerms => "Terms",
            Self::Gender => "Gender",
        }
    }

    /// Kind of input control rendered for this field
    pub fn input_kind(&self) -> InputKind {
        match self {
            Self::Name | Self::Email => InputKind::Text,
            Self::AgreeTerms => InputKind::Checkbox,
            Self::Gender => InputKind::Radio,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Kind of input control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Checkbox,
    Radio,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        };
        f.write_str(name)
    }
}

/// Raw value reported by an input, tagged with its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Raw string of a text input
    Text(String),
    /// Checked state of a checkbox
    Checkbox(bool),
    /// Selected option of a radio group (empty string = nothing selected)
    Radio(String),
}

impl FieldInput {
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Text(_) => InputKind::Text,
            Self::Checkbox(_) => InputKind::Checkbox,
            Self::Radio(_) => InputKind::Radio,
        }
    }
}

/// Gender choice. Serialises to `"male"`, `"female"` or `""` when unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
}

impl Gender {
    /// Options offered by the radio group, in display order
    pub const OPTIONS: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "(none)",
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Next option in the radio group (wraps; unset selects the first)
    pub fn next(&self) -> Self {
        match self {
            Self::Unset | Self::Female => Self::Male,
            Self::Male => Self::Female,
        }
    }

    /// Previous option in the radio group (wraps; unset selects the last)
    pub fn prev(&self) -> Self {
        match self {
            Self::Unset | Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }
}

impl FromStr for Gender {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Unset),
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(FormError::UnknownOption {
                field: FieldName::Gender,
                option: other.to_string(),
            }),
        }
    }
}

/// A typed update to exactly one field of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    Email(String),
    AgreeTerms(bool),
    Gender(Gender),
}

impl FieldChange {
    /// Convert a raw input event into a typed change.
    ///
    /// The input kind must match the control the field is rendered with.
    pub fn from_input(field: FieldName, input: FieldInput) -> Result<Self, FormError> {
        match (field, input) {
            (FieldName::Name, FieldInput::Text(value)) => Ok(Self::Name(value)),
            (FieldName::Email, FieldInput::Text(value)) => Ok(Self::Email(value)),
            (FieldName::AgreeTerms, FieldInput::Checkbox(checked)) => Ok(Self::AgreeTerms(checked)),
            (FieldName::Gender, FieldInput::Radio(option)) => Ok(Self::Gender(option.parse()?)),
            (field, input) => Err(FormError::InputKindMismatch {
                field,
                expected: field.input_kind(),
                actual: input.kind(),
            }),
        }
    }

}
