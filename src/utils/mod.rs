pub mod error;

pub use error::IdentifierError;
