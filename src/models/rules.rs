use crate::utils::IdentifierError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thresholds used to interpret the fields of an identifier.
///
/// The defaults are the published layout; overrides are loaded from JSON and
/// any field left out keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierRules {
    /// Two-digit years below this map to the 2000s, the rest to the 1900s.
    pub century_pivot: u8,
    /// Sequence numbers at or above this are male.
    pub male_sequence_threshold: u16,
    pub citizen_digit: u8,
    pub permanent_resident_digit: u8,
}

impl Default for IdentifierRules {
    fn default() -> Self {
        IdentifierRules {
            century_pivot: 50,
            male_sequence_threshold: 5000,
            citizen_digit: 0,
            permanent_resident_digit: 1,
        }
    }
}

impl IdentifierRules {
    pub fn from_json_str(json: &str) -> Result<Self, IdentifierError> {
        let rules: IdentifierRules = serde_json::from_str(json)?;
        rules.validate()?;
        if rules != IdentifierRules::default() {
            log::warn!("Using non-default identifier rules: {:?}", rules);
        }
        Ok(rules)
    }

    pub fn from_path(path: &Path) -> Result<Self, IdentifierError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), IdentifierError> {
        if self.century_pivot > 100 {
            return Err(IdentifierError::InvalidRules(format!(
                "century_pivot must be between 0 and 100, got {}",
                self.century_pivot
            )));
        }
        if self.male_sequence_threshold > 9999 {
            return Err(IdentifierError::InvalidRules(format!(
                "male_sequence_threshold must be at most 9999, got {}",
                self.male_sequence_threshold
            )));
        }
        if self.citizen_digit > 9 || self.permanent_resident_digit > 9 {
            return Err(IdentifierError::InvalidRules(
                "citizenship digits must be single decimal digits".to_string(),
            ));
        }
        if self.citizen_digit == self.permanent_resident_digit {
            return Err(IdentifierError::InvalidRules(format!(
                "citizen and permanent resident digits are both {}",
                self.citizen_digit
            )));
        }
        Ok(())
    }

    pub fn full_year(&self, year: u8) -> i32 {
        if year < self.century_pivot {
            2000 + i32::from(year)
        } else {
            1900 + i32::from(year)
        }
    }
}
