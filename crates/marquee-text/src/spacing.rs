#![forbid(unsafe_code)]

//! Letter spacing.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

/// Fill inserted between graphemes.
pub const FILL: char = ' ';

/// Insert `spacing` [`FILL`] characters between every pair of adjacent
/// grapheme clusters. Nothing is added before the first or after the last.
///
/// A spacing of zero, or a line with fewer than two graphemes, borrows the
/// input unchanged.
#[must_use]
pub fn letter_space(line: &str, spacing: usize) -> Cow<'_, str> {
    if spacing == 0 {
        return Cow::Borrowed(line);
    }
    let mut graphemes = line.graphemes(true);
    let Some(first) = graphemes.next() else {
        return Cow::Borrowed(line);
    };
    let mut rest = graphemes.peekable();
    if rest.peek().is_none() {
        return Cow::Borrowed(line);
    }

    let count = line.graphemes(true).count();
    let fill = spacing.checked_mul(count - 1);
    let capacity = fill.and_then(|fill| fill.checked_add(line.len()));
    let mut out = String::with_capacity(capacity.unwrap_or(line.len()));
    out.push_str(first);
    for grapheme in rest {
        out.extend(std::iter::repeat_n(FILL, spacing));
        out.push_str(grapheme);
    }
    Cow::Owned(out)
}
