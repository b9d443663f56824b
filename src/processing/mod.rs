pub mod extractors;
pub mod formatter;
pub mod input;

pub use extractors::FieldExtractor;
pub use formatter::IdentifierFormatter;
pub use input::{normalize, read_batch};
