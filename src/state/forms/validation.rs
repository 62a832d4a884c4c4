//! Field validation rules

use super::field::FieldName;
use super::form_state::FormState;
use std::collections::BTreeMap;

pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters.";
pub const EMAIL_INVALID: &str = "Email must be valid.";
pub const TERMS_NOT_AGREED: &str = "You must agree to the terms.";
pub const GENDER_MISSING: &str = "You must select a gender.";

/// Minimum name length, in UTF-16 code units
const MIN_NAME_UNITS: usize = 3;

/// Validation failures keyed by field. Only failing fields have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FieldName, &'static str>);

impl ErrorMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[cfg(test)]
    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    /// Failing fields and their messages, in form order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: FieldName, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Run every rule against the form and collect all failures.
pub fn validate(state: &FormState) -> ErrorMap {
    let mut errors = ErrorMap::default();

    if state.name.encode_utf16().count() < MIN_NAME_UNITS {
        errors.insert(FieldName::Name, NAME_TOO_SHORT);
    }
    if !state.email.contains('@') {
        errors.insert(FieldName::Email, EMAIL_INVALID);
    }
    if !state.agree_terms {
        errors.insert(FieldName::AgreeTerms, TERMS_NOT_AGREED);
    }
    if state.gender.is_unset() {
        errors.insert(FieldName::Gender, GENDER_MISSING);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::Gender;
    use proptest::prelude::*;

    fn valid() -> FormState {
        FormState {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            agree_terms: true,
            gender: Gender::Male,
        }
    }

    mod rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_has_no_errors() {
            assert!(validate(&valid()).is_empty());
        }

        #[test]
        fn test_empty_form_fails_every_rule() {
            let errors = validate(&FormState::default());
            assert_eq!(
                errors.iter().collect::<Vec<_>>(),
                vec![
                    (FieldName::Name, NAME_TOO_SHORT),
                    (FieldName::Email, EMAIL_INVALID),
                    (FieldName::AgreeTerms, TERMS_NOT_AGREED),
                    (FieldName::Gender, GENDER_MISSING),
                ]
            );
        }

        #[test]
        fn test_short_name() {
            let state = FormState {
                name: "Jo".to_string(),
                ..valid()
            };
            let errors = validate(&state);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(FieldName::Name), Some(NAME_TOO_SHORT));
        }

        #[test]
        fn test_name_of_exactly_three_chars_passes() {
            let state = FormState {
                name: "Ann".to_string(),
                ..valid()
            };
            assert!(!validate(&state).contains(FieldName::Name));
        }

        #[test]
        fn test_name_length_counts_utf16_units() {
            // "Zoë" is three units and passes
            let state = FormState {
                name: "Zoë".to_string(),
                ..valid()
            };
            assert!(validate(&state).is_empty());

            // one emoji is a surrogate pair, so two units
            let state = FormState {
                name: "😀".to_string(),
                ..valid()
            };
            assert_eq!(validate(&state).get(FieldName::Name), Some(NAME_TOO_SHORT));

            let state = FormState {
                name: "😀😀".to_string(),
                ..valid()
            };
            assert!(validate(&state).is_empty());
        }

        #[test]
        fn test_email_without_at() {
            let state = FormState {
                email: "test.name+aliasexample.co.uk".to_string(),
                ..valid()
            };
            let errors = validate(&state);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(FieldName::Email), Some(EMAIL_INVALID));
        }

        #[test]
        fn test_email_only_needs_an_at_sign() {
            for email in ["a@", "@", "@b", "x@@y"] {
                let state = FormState {
                    email: email.to_string(),
                    ..valid()
                };
                assert!(validate(&state).is_empty(), "{email} should pass");
            }
            let state = FormState {
                email: "a.b.com".to_string(),
                ..valid()
            };
            assert!(validate(&state).contains(FieldName::Email));
        }

        #[test]
        fn test_terms_not_agreed() {
            let state = FormState {
                agree_terms: false,
                ..valid()
            };
            assert_eq!(
                validate(&state).get(FieldName::AgreeTerms),
                Some(TERMS_NOT_AGREED)
            );
        }

        #[test]
        fn test_gender_unset() {
            let state = FormState {
                gender: Gender::Unset,
                ..valid()
            };
            assert_eq!(validate(&state).get(FieldName::Gender), Some(GENDER_MISSING));
        }

        #[test]
        fn test_rules_do_not_short_circuit() {
            let state = FormState {
                name: "Jo".to_string(),
                email: "nope".to_string(),
                ..valid()
            };
            let errors = validate(&state);
            assert_eq!(errors.len(), 2);
            assert!(errors.contains(FieldName::Name));
            assert!(errors.contains(FieldName::Email));
        }
    }

    mod properties {
        use super::*;

        proptest! {
            #[test]
            fn short_names_always_fail(name in "[a-zA-Z ]{0,2}") {
                let state = FormState { name, ..valid() };
                prop_assert_eq!(validate(&state).get(FieldName::Name), Some(NAME_TOO_SHORT));
            }

            #[test]
            fn long_names_never_fail(name in "\\PC{3,512}") {
                // every char is at least one UTF-16 unit
                let state = FormState { name, ..valid() };
                prop_assert!(validate(&state).is_empty());
            }

            #[test]
            fn name_rule_tracks_utf16_length(name in "\\PC{0,4}") {
                let too_short = name.encode_utf16().count() < 3;
                let state = FormState { name, ..valid() };
                prop_assert_eq!(validate(&state).contains(FieldName::Name), too_short);
            }

            #[test]
            fn any_at_sign_passes(prefix in "[^@]{0,20}", suffix in "[^@]{0,20}") {
                let state = FormState { email: format!("{prefix}@{suffix}"), ..valid() };
                prop_assert!(!validate(&state).contains(FieldName::Email));
            }

            #[test]
            fn missing_at_sign_fails(email in "[^@]{0,40}") {
                let state = FormState { email, ..valid() };
                prop_assert_eq!(validate(&state).get(FieldName::Email), Some(EMAIL_INVALID));
            }

            #[test]
            fn error_map_is_empty_iff_every_rule_passes(
                name in "\\PC{0,6}",
                email in "[a-z@.]{0,8}",
                agree_terms in any::<bool>(),
                gender in prop_oneof![Just(Gender::Unset), Just(Gender::Male), Just(Gender::Female)],
            ) {
                let all_pass = name.encode_utf16().count() >= 3
                    && email.contains('@')
                    && agree_terms
                    && !gender.is_unset();
                let state = FormState { name, email, agree_terms, gender };
                prop_assert_eq!(validate(&state).is_empty(), all_pass);
            }
        }
    }
}
