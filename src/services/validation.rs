// Start of file: /src/services/validation.rs

/*
    * Explicit request validation. Every check funnels through `is_blank`
    * so all callers agree on what an empty value is.
*/

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::models::message::Message;

pub const MESSAGE_VALUE_EMPTY: &str = "Message.value.empty";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }

    /// Field to message, keeping the first message reported for a field.
    pub fn field_messages(&self) -> BTreeMap<String, String> {
        let mut messages: BTreeMap<String, String> = BTreeMap::new();
        for error in &self.errors {
            messages
                .entry(error.field.clone())
                .or_insert_with(|| error.message.clone());
        }
        messages
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|e| e.field.as_str()).collect();
        write!(f, "validation failed for: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

// * Separators count as whitespace, except the non-breaking ones. ASCII
// * controls \t..\r and the 0x1C..0x1F separators count too, U+0085 does not.
fn is_whitespace(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{0009}'..='\u{000D}' | '\u{001C}'..='\u{001F}' => true,
        other => other.is_whitespace(),
    }
}

/// Absent, empty, or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.chars().all(is_whitespace))
}

pub fn validate_message_value(value: Option<&str>) -> Result<(), ValidationErrors> {
    if is_blank(value) {
        return Err(FieldError::new("value", MESSAGE_VALUE_EMPTY, "Message value cannot be empty").into());
    }
    Ok(())
}

/// Types that can check themselves before being handed to a service.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for Message {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_message_value(self.value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(is_blank(Some("\t\n\r ")));
        assert!(!is_blank(Some(" a ")));
        assert!(!is_blank(Some("Test message")));
    }

    #[test]
    fn non_breaking_spaces_are_text() {
        assert!(!is_blank(Some("\u{00A0}")));
        assert!(!is_blank(Some("\u{202F}")));
        assert!(!is_blank(Some("\u{0085}")));
        assert!(is_blank(Some("\u{2003}\u{2028}\u{001F}\u{000B}")));
        assert!(validate_message_value(Some("\u{00A0}")).is_ok());
    }

    #[test]
    fn empty_message_is_rejected_with_code() {
        for value in [None, Some(""), Some("  \t")] {
            let errors = validate_message_value(value).unwrap_err();
            let error = errors.field("value").expect("value error");

            assert_eq!(error.code, "Message.value.empty");
            assert_eq!(error.message, "Message value cannot be empty");
        }
    }

    #[test]
    fn non_blank_message_passes() {
        assert!(Message::new("test message").validate().is_ok());
        assert!(Message::new(" x").validate().is_ok());
        assert!(Message::default().validate().is_err());
    }

    #[test]
    fn first_message_wins_per_field() {
        let mut errors = ValidationErrors::default();
        errors.push(FieldError::new("value", "a", "first"));
        errors.push(FieldError::new("value", "b", "second"));
        errors.push(FieldError::new("title", "c", "other"));

        let messages = errors.field_messages();
        assert_eq!(messages["value"], "first");
        assert_eq!(messages["title"], "other");
        assert_eq!(errors.errors().len(), 3);
        assert!(errors.into_result().is_err());
        assert!(ValidationErrors::default().into_result().is_ok());
    }
}

// End of file: /src/services/validation.rs
