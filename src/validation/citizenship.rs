use crate::models::{
    CitizenshipStatus, IdentifierRules, ParsedFields, ValidationIssue, ValidationIssueType,
};

pub struct CitizenshipValidator;

impl CitizenshipValidator {
    pub fn validate(
        fields: &ParsedFields,
        rules: &IdentifierRules,
    ) -> Result<CitizenshipStatus, ValidationIssue> {
        match fields.citizenship_digit {
            d if d == rules.citizen_digit => Ok(CitizenshipStatus::Citizen),
            d if d == rules.permanent_resident_digit => Ok(CitizenshipStatus::PermanentResident),
            d => {
                log::debug!("Unknown citizenship digit {}", d);
                Err(ValidationIssue::new(
                    ValidationIssueType::Citizenship,
                    format!(
                        "Citizenship digit must be {} or {}",
                        rules.citizen_digit, rules.permanent_resident_digit
                    ),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_digit(citizenship_digit: u8) -> ParsedFields {
        ParsedFields {
            year: 90,
            month: 1,
            day: 8,
            sequence: 5012,
            citizenship_digit,
            legacy_digit: 8,
            check_digit: 0,
        }
    }

    #[test]
    fn test_known_digits() {
        let rules = IdentifierRules::default();
        assert_eq!(
            CitizenshipValidator::validate(&with_digit(0), &rules).unwrap(),
            CitizenshipStatus::Citizen
        );
        assert_eq!(
            CitizenshipValidator::validate(&with_digit(1), &rules).unwrap(),
            CitizenshipStatus::PermanentResident
        );
    }

    #[test]
    fn test_other_digits_rejected() {
        let rules = IdentifierRules::default();
        for d in 2..=9 {
            let issue = CitizenshipValidator::validate(&with_digit(d), &rules).unwrap_err();
            assert_eq!(issue.issue_type, ValidationIssueType::Citizenship);
            assert_eq!(issue.message, "Citizenship digit must be 0 or 1");
        }
    }
}
