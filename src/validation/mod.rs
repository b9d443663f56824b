pub mod checksum;
pub mod citizenship;
pub mod date;
pub mod format;

pub use checksum::ChecksumValidator;
pub use citizenship::CitizenshipValidator;
pub use date::DateValidator;
pub use format::FormatValidator;
