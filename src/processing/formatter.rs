use crate::models::IDENTIFIER_LENGTH;

/// Display grouping for identifiers: `XXXXXX XXXX XXX`.
pub struct IdentifierFormatter;

impl IdentifierFormatter {
    /// Groups a 13-character string as 6-4-3. Anything else is returned
    /// unchanged; the content is never checked.
    pub fn format(raw: &str) -> String {
        let chars: Vec<char> = raw.chars().collect();
        if chars.len() != IDENTIFIER_LENGTH {
            return raw.to_string();
        }

        let mut formatted = String::with_capacity(raw.len() + 2);
        for (i, c) in chars.into_iter().enumerate() {
            if i == 6 || i == 10 {
                formatted.push(' ');
            }
            formatted.push(c);
        }
        formatted
    }
}
