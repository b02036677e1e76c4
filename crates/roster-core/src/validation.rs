//! Client-side form validation.
//!
//! Validation exists to give immediate per-field feedback before a request is
//! sent; the server accepts whatever it is given (the client is the sole
//! validator). [`validate`] checks that every field is non-empty after
//! trimming and that `contact` is exactly 10 decimal digits.

use std::fmt;

use indexmap::IndexMap;

use crate::student::StudentFields;

/// The five editable fields, used as error-map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Grade,
    Class,
    Contact,
    Address,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Grade,
        Field::Class,
        Field::Contact,
        Field::Address,
    ];

    /// Human-readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Grade => "Grade",
            Field::Class => "Class",
            Field::Contact => "Contact",
            Field::Address => "Address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-field validation messages, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(IndexMap<Field, String>);

impl FieldErrors {
    /// True when validation passed (submission may proceed).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for a field, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }

    /// Clears a single field's error (on user edit).
    pub fn remove(&mut self, field: Field) {
        self.0.shift_remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Validates form fields, returning one message per failing field.
///
/// Every field fails with "<Label> is required" when empty after trimming.
/// A non-empty contact additionally fails when it is not exactly 10 ascii
/// digits after trimming.
pub fn validate(fields: &StudentFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    for field in Field::ALL {
        if fields.get(field).trim().is_empty() {
            errors.insert(field, format!("{} is required", field.label()));
        }
    }

    let contact = fields.contact.trim();
    if !contact.is_empty() && !is_ten_digits(contact) {
        errors.insert(
            Field::Contact,
            "Contact must be a 10-digit number".to_string(),
        );
    }

    errors
}

fn is_ten_digits(s: &str) -> bool {
    s.len() == 10 && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_fields() -> StudentFields {
        StudentFields {
            name: "Ann".to_string(),
            grade: "5".to_string(),
            class: "5A".to_string(),
            contact: "1234567890".to_string(),
            address: "1 Rd".to_string(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(validate(&valid_fields()).is_empty());
    }

    #[test]
    fn empty_fields_each_get_required_message() {
        let errors = validate(&StudentFields::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Address), Some("Address is required"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut fields = valid_fields();
        fields.name = "   ".to_string();
        let errors = validate(&fields);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert!(errors.get(Field::Grade).is_none());
    }

    #[test]
    fn short_contact_fails_format_check() {
        let mut fields = valid_fields();
        fields.contact = "12345".to_string();
        let errors = validate(&fields);
        assert_eq!(
            errors.get(Field::Contact),
            Some("Contact must be a 10-digit number")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn non_digit_contact_fails_format_check() {
        let mut fields = valid_fields();
        fields.contact = "12345abcde".to_string();
        assert!(validate(&fields).get(Field::Contact).is_some());
    }

    #[test]
    fn contact_with_surrounding_whitespace_passes() {
        let mut fields = valid_fields();
        fields.contact = " 1234567890 ".to_string();
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn empty_contact_reports_required_not_format() {
        let mut fields = valid_fields();
        fields.contact = String::new();
        let errors = validate(&fields);
        assert_eq!(errors.get(Field::Contact), Some("Contact is required"));
    }

    proptest! {
        // Validation fails iff some field is empty-after-trim or contact is
        // not exactly 10 digits.
        #[test]
        fn validity_matches_definition(
            name in ".{0,20}",
            grade in ".{0,6}",
            class in ".{0,6}",
            contact in "[0-9a-z ]{0,14}",
            address in ".{0,30}",
        ) {
            let fields = StudentFields { name, grade, class, contact, address };
            let all_present = Field::ALL
                .iter()
                .all(|f| !fields.get(*f).trim().is_empty());
            let contact_ok = {
                let c = fields.contact.trim();
                c.len() == 10 && c.bytes().all(|b| b.is_ascii_digit())
            };
            let expect_valid = all_present && contact_ok;
            prop_assert_eq!(validate(&fields).is_empty(), expect_valid);
        }
    }
}
