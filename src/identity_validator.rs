use crate::models::*;
use crate::processing::FieldExtractor;
use crate::validation::*;

/// Validates identity numbers and derives the attributes encoded in them.
///
/// Stateless apart from its rules, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct IdentityValidator {
    rules: IdentifierRules,
}

impl IdentityValidator {
    pub fn new() -> Self {
        IdentityValidator::default()
    }

    /// Rules are assumed to have passed `IdentifierRules::validate`.
    pub fn with_rules(rules: IdentifierRules) -> Self {
        IdentityValidator { rules }
    }

    pub fn rules(&self) -> &IdentifierRules {
        &self.rules
    }

    // Main validation function. Never fails: every problem ends up in the
    // result's error list.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        // Step 1: Format checks, which stop validation on failure
        let digits = match FormatValidator::validate(raw) {
            Ok(digits) => digits,
            Err(issue) => return ValidationResult::invalid(vec![issue]),
        };

        // Step 2: Slice the fields
        let fields = FieldExtractor::extract(&digits);

        // Step 3: Field checks, all of which run
        let mut errors = Vec::new();
        let birth_date = collect(DateValidator::validate(&fields, &self.rules), &mut errors);
        let citizenship_status =
            collect(CitizenshipValidator::validate(&fields, &self.rules), &mut errors);
        collect(ChecksumValidator::validate(&digits), &mut errors);

        // Step 4: Assemble the result
        match (birth_date, citizenship_status) {
            (Some(birth_date), Some(citizenship_status)) if errors.is_empty() => {
                ValidationResult::valid(birth_date, self.gender(&fields), citizenship_status)
            }
            _ => ValidationResult::invalid(errors),
        }
    }

    fn gender(&self, fields: &ParsedFields) -> Gender {
        if fields.sequence >= self.rules.male_sequence_threshold {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

fn collect<T>(outcome: Result<T, ValidationIssue>, errors: &mut Vec<ValidationIssue>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(issue) => {
            errors.push(issue);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn validate(raw: &str) -> ValidationResult {
        IdentityValidator::new().validate(raw)
    }

    fn issue_types(result: &ValidationResult) -> Vec<ValidationIssueType> {
        result.errors().iter().map(|issue| issue.issue_type).collect()
    }

    #[test]
    fn test_valid_male_citizen() {
        let result = validate("9001085012085");
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert_eq!(result.gender(), Some(Gender::Male));
        assert_eq!(result.citizenship_status(), Some(CitizenshipStatus::Citizen));
        assert_eq!(result.birth_date(), NaiveDate::from_ymd_opt(1990, 1, 8));
    }

    #[test]
    fn test_valid_female() {
        let result = validate("9001084800084");
        assert!(result.is_valid());
        assert_eq!(result.gender(), Some(Gender::Female));
    }

    #[test]
    fn test_gender_threshold_boundary() {
        assert_eq!(validate("9001084999084").gender(), Some(Gender::Female));
        assert_eq!(validate("9001085000080").gender(), Some(Gender::Male));
    }

    #[test]
    fn test_valid_permanent_resident() {
        let result = validate("9001085012184");
        assert!(result.is_valid());
        assert_eq!(
            result.citizenship_status(),
            Some(CitizenshipStatus::PermanentResident)
        );
        assert_eq!(result.citizenship_status().unwrap().to_string(), "Permanent Resident");
    }

    #[test]
    fn test_century_boundary() {
        assert_eq!(validate("4901015000081").birth_date(), NaiveDate::from_ymd_opt(2049, 1, 1));
        assert_eq!(validate("5001015000089").birth_date(), NaiveDate::from_ymd_opt(1950, 1, 1));
        assert_eq!(validate("0002295000083").birth_date(), NaiveDate::from_ymd_opt(2000, 2, 29));
    }

    #[test]
    fn test_wrong_length_short_circuits() {
        for raw in ["", "900108", "90010850120850", "9001 0850 12085"] {
            let result = validate(raw);
            assert!(!result.is_valid());
            assert_eq!(issue_types(&result), vec![ValidationIssueType::Length]);
            assert!(result.birth_date().is_none());
            assert!(result.gender().is_none());
            assert!(result.citizenship_status().is_none());
        }
    }

    #[test]
    fn test_non_digit_short_circuits() {
        // Bad month and citizenship digit as well, but only the charset is reported
        let result = validate("9913085X12985");
        assert!(!result.is_valid());
        assert_eq!(issue_types(&result), vec![ValidationIssueType::Charset]);
        assert_eq!(result.error_messages(), vec!["Identifier must contain only digits"]);
    }

    #[test]
    fn test_month_thirteen() {
        let result = validate("9013085012080");
        assert!(!result.is_valid());
        assert_eq!(result.error_messages(), vec!["Invalid date of birth"]);
        assert!(result.birth_date().is_none());
    }

    #[test]
    fn test_day_overflow_not_normalised() {
        let result = validate("9004315012081");
        assert_eq!(issue_types(&result), vec![ValidationIssueType::Date]);
        let result = validate("9902295000085");
        assert_eq!(issue_types(&result), vec![ValidationIssueType::Date]);
    }

    #[test]
    fn test_bad_citizenship_digit() {
        let result = validate("9001085012283");
        assert!(!result.is_valid());
        assert_eq!(issue_types(&result), vec![ValidationIssueType::Citizenship]);
        assert!(result.gender().is_none());
    }

    #[test]
    fn test_flipped_check_digit() {
        let result = validate("9001085012086");
        assert!(!result.is_valid());
        assert_eq!(result.error_messages(), vec!["Invalid checksum"]);
        assert!(result.birth_date().is_none());
        assert!(result.gender().is_none());
        assert!(result.citizenship_status().is_none());
    }

    #[test]
    fn test_errors_accumulate_in_order() {
        // month 13, day 31, citizenship 2 and a wrong check digit
        let result = validate("9013315012281");
        assert_eq!(
            issue_types(&result),
            vec![
                ValidationIssueType::Date,
                ValidationIssueType::Citizenship,
                ValidationIssueType::Checksum,
            ]
        );
        assert!(result.birth_date().is_none());
    }

    #[test]
    fn test_published_samples_fail_checksum_only() {
        // These carry check digits that the algorithm does not produce.
        for raw in ["9001085012088", "9001084800087", "9001085012185"] {
            let result = validate(raw);
            assert_eq!(issue_types(&result), vec![ValidationIssueType::Checksum], "{}", raw);
        }
        let result = validate("9013085012083");
        assert!(result.has_issue(ValidationIssueType::Date));
    }

    #[test]
    fn test_custom_rules() {
        let validator = IdentityValidator::with_rules(IdentifierRules {
            male_sequence_threshold: 4000,
            ..IdentifierRules::default()
        });
        assert_eq!(validator.validate("9001084800084").gender(), Some(Gender::Male));
    }

    #[test]
    fn test_shared_across_threads() {
        let validator = std::sync::Arc::new(IdentityValidator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let validator = validator.clone();
                std::thread::spawn(move || validator.validate("9001085012085").is_valid())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
