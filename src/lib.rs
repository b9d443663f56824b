pub mod identity_validator;
pub mod models;
pub mod processing;
pub mod telemetry;
pub mod utils;
pub mod validation;

pub use identity_validator::IdentityValidator;
pub use models::{CitizenshipStatus, Gender, IdentifierRules, ValidationIssue, ValidationResult};
pub use processing::IdentifierFormatter;
pub use telemetry::{NoopRecorder, TrackedValidator, UsageRecorder, UsageStats};
pub use utils::IdentifierError;
