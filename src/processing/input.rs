use crate::utils::IdentifierError;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new(r"[\s-]+").expect("separator pattern is valid"))
}

/// Strips whitespace and dashes so a display-formatted identifier can be
/// handed to the validator. Nothing else is touched.
pub fn normalize(raw: &str) -> String {
    separators().replace_all(raw, "").into_owned()
}

/// Reads one identifier per line. Blank lines and `#` comments are skipped.
pub fn read_batch(path: &Path) -> Result<Vec<String>, IdentifierError> {
    let contents = std::fs::read_to_string(path)?;
    let identifiers: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(normalize)
        .collect();
    log::debug!("Read {} identifiers from {:?}", identifiers.len(), path);
    Ok(identifiers)
}
