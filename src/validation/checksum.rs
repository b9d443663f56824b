use crate::models::{IdentifierDigits, ValidationIssue, ValidationIssueType};

pub struct ChecksumValidator;

impl ChecksumValidator {
    /// Luhn-style check digit over the given payload digits.
    ///
    /// Walking right to left, every second digit is doubled starting with the
    /// rightmost one, and doubles above 9 have 9 taken off. The check digit
    /// brings the total up to the next multiple of ten.
    pub fn compute_check_digit(payload: &[u8]) -> u8 {
        let sum: u32 = payload
            .iter()
            .rev()
            .enumerate()
            .map(|(i, &d)| {
                let d = u32::from(d);
                if i % 2 == 0 {
                    let doubled = d * 2;
                    if doubled > 9 {
                        doubled - 9
                    } else {
                        doubled
                    }
                } else {
                    d
                }
            })
            .sum();

        ((10 - sum % 10) % 10) as u8
    }

    pub fn validate(digits: &IdentifierDigits) -> Result<(), ValidationIssue> {
        let (payload, supplied) = digits.split_at(digits.len() - 1);
        let expected = Self::compute_check_digit(payload);
        if expected == supplied[0] {
            Ok(())
        } else {
            log::debug!("Check digit {} does not match computed {}", supplied[0], expected);
            Err(ValidationIssue::new(ValidationIssueType::Checksum, "Invalid checksum"))
        }
    }
}
