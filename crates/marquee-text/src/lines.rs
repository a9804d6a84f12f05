#![forbid(unsafe_code)]

//! Logical line splitting.

/// Separates logical lines in input text.
pub const LINE_DELIMITER: char = '|';

/// Split `text` into logical lines.
///
/// Lines are separated by [`LINE_DELIMITER`]. Hard newlines (`\r\n`, `\r`,
/// `\n`) count as delimiters too, so text piped in from files lays out the
/// same way. Always returns at least one (possibly empty) line.
#[must_use]
pub fn split_logical_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find([LINE_DELIMITER, '\r', '\n']) {
        lines.push(&rest[..pos]);
        // `\r\n` is a single break.
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }
    lines.push(rest);
    lines
}
