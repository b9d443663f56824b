use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Number of characters in a well-formed identifier.
pub const IDENTIFIER_LENGTH: usize = 13;

/// The digits of an identifier that passed the format checks.
pub type IdentifierDigits = [u8; IDENTIFIER_LENGTH];

/// Positional fields of an identifier, `YYMMDD SSSS C A Z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFields {
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub sequence: u16,
    pub citizenship_digit: u8,
    // Legacy classification digit, carried but never checked.
    pub legacy_digit: u8,
    pub check_digit: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CitizenshipStatus {
    Citizen,
    #[serde(rename = "Permanent Resident")]
    PermanentResident,
}

impl fmt::Display for CitizenshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CitizenshipStatus::Citizen => write!(f, "Citizen"),
            CitizenshipStatus::PermanentResident => write!(f, "Permanent Resident"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationIssueType {
    Length,
    Charset,
    Date,
    Citizenship,
    Checksum,
}

impl ValidationIssueType {
    pub const ALL: [ValidationIssueType; 5] = [
        ValidationIssueType::Length,
        ValidationIssueType::Charset,
        ValidationIssueType::Date,
        ValidationIssueType::Citizenship,
        ValidationIssueType::Checksum,
    ];

    /// Format problems stop validation; everything else accumulates.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ValidationIssueType::Length | ValidationIssueType::Charset)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ValidationIssueType::Length => "LENGTH",
            ValidationIssueType::Charset => "CHARSET",
            ValidationIssueType::Date => "DATE",
            ValidationIssueType::Citizenship => "CITIZENSHIP",
            ValidationIssueType::Checksum => "CHECKSUM",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(issue_type: ValidationIssueType, message: impl Into<String>) -> Self {
        ValidationIssue {
            issue_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.issue_type.label(), self.message)
    }
}

/// Outcome of validating one identifier.
///
/// The derived attributes are only ever present when there are no errors,
/// so the fields are private and the two constructors are the only way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<ValidationIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    citizenship_status: Option<CitizenshipStatus>,
}

impl ValidationResult {
    pub fn valid(
        birth_date: NaiveDate,
        gender: Gender,
        citizenship_status: CitizenshipStatus,
    ) -> Self {
        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
            birth_date: Some(birth_date),
            gender: Some(gender),
            citizenship_status: Some(citizenship_status),
        }
    }

    pub fn invalid(errors: Vec<ValidationIssue>) -> Self {
        ValidationResult {
            is_valid: false,
            errors,
            birth_date: None,
            gender: None,
            citizenship_status: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|issue| issue.message.as_str()).collect()
    }

    pub fn has_issue(&self, issue_type: ValidationIssueType) -> bool {
        self.errors.iter().any(|issue| issue.issue_type == issue_type)
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn citizenship_status(&self) -> Option<CitizenshipStatus> {
        self.citizenship_status
    }
}
