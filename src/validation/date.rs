use crate::models::{IdentifierRules, ParsedFields, ValidationIssue, ValidationIssueType};
use chrono::{Datelike, NaiveDate};

pub struct DateValidator;

impl DateValidator {
    /// Rebuilds the date of birth. The date has to exist exactly as written:
    /// month 13 or 30 February are rejected, never rolled over.
    pub fn validate(
        fields: &ParsedFields,
        rules: &IdentifierRules,
    ) -> Result<NaiveDate, ValidationIssue> {
        let year = rules.full_year(fields.year);
        let month = u32::from(fields.month);
        let day = u32::from(fields.day);

        let date = if (1..=12).contains(&month) && (1..=31).contains(&day) {
            NaiveDate::from_ymd_opt(year, month, day)
                .filter(|d| d.year() == year && d.month() == month && d.day() == day)
        } else {
            None
        };

        date.ok_or_else(|| {
            log::debug!("No such date of birth: {}-{:02}-{:02}", year, month, day);
            ValidationIssue::new(ValidationIssueType::Date, "Invalid date of birth")
        })
    }
}
