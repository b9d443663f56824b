use crate::models::{IdentifierDigits, ValidationIssue, ValidationIssueType, IDENTIFIER_LENGTH};

pub struct FormatValidator;

impl FormatValidator {
    /// Structural checks that gate everything else. On success the 13 digit
    /// values are handed on for field extraction.
    pub fn validate(raw: &str) -> Result<IdentifierDigits, ValidationIssue> {
        let length = raw.chars().count();
        if length != IDENTIFIER_LENGTH {
            log::debug!("Rejected identifier of length {}", length);
            return Err(ValidationIssue::new(
                ValidationIssueType::Length,
                format!("Identifier must be exactly {} digits long", IDENTIFIER_LENGTH),
            ));
        }

        let mut digits = [0u8; IDENTIFIER_LENGTH];
        for (slot, c) in digits.iter_mut().zip(raw.chars()) {
            if !c.is_ascii_digit() {
                log::debug!("Rejected identifier containing {:?}", c);
                return Err(ValidationIssue::new(
                    ValidationIssueType::Charset,
                    "Identifier must contain only digits",
                ));
            }
            *slot = c as u8 - b'0';
        }

        Ok(digits)
    }
}
