use crate::models::{IdentifierDigits, ParsedFields};

/// Slices the fixed-width fields out of a format-checked identifier.
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn extract(digits: &IdentifierDigits) -> ParsedFields {
        let fields = ParsedFields {
            year: Self::number(&digits[0..2]) as u8,
            month: Self::number(&digits[2..4]) as u8,
            day: Self::number(&digits[4..6]) as u8,
            sequence: Self::number(&digits[6..10]),
            citizenship_digit: digits[10],
            legacy_digit: digits[11],
            check_digit: digits[12],
        };
        log::trace!("Extracted identifier fields: {:?}", fields);
        fields
    }

    fn number(digits: &[u8]) -> u16 {
        digits
            .iter()
            .fold(0u16, |acc, digit| acc * 10 + u16::from(*digit))
    }
}
