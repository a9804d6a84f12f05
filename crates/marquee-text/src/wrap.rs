#![forbid(unsafe_code)]

//! Fixed-width hard wrapping.
//!
//! Lines are cut into chunks of exactly `width` cells (the last chunk may be
//! shorter). There is no word awareness and no whitespace trimming: a space
//! that lands at the start of a chunk stays there. Cuts only ever fall on
//! grapheme cluster boundaries, and a wide grapheme that would straddle the
//! boundary moves to the next chunk whole.
//!
//! # Example
//! ```
//! use marquee_text::wrap::wrap_hard;
//!
//! let chunks = wrap_hard("this is a very long line to test multi lines", Some(10));
//! assert_eq!(chunks, vec!["this is a ", "very long ", "line to te", "st multi l", "ines"]);
//!
//! // No width: nothing to wrap against.
//! assert_eq!(wrap_hard("anything", None), vec!["anything"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Cut `line` into chunks no wider than `width` cells.
///
/// `None` or a zero width returns the line as a single chunk. An empty line
/// yields one empty chunk. A single grapheme wider than `width` gets a chunk
/// of its own rather than being split.
#[must_use]
pub fn wrap_hard(line: &str, width: Option<usize>) -> Vec<&str> {
    let Some(width) = width.filter(|w| *w > 0) else {
        return vec![line];
    };
    if line.is_ascii() && line.len() <= width {
        return vec![line];
    }

    let mut chunks = Vec::with_capacity(line.len() / width + 1);
    let mut chunk_start = 0;
    let mut chunk_width = 0;

    for (offset, grapheme) in line.grapheme_indices(true) {
        let grapheme_width = grapheme.width();
        if chunk_width + grapheme_width > width && chunk_width > 0 {
            chunks.push(&line[chunk_start..offset]);
            chunk_start = offset;
            chunk_width = 0;
        }
        chunk_width += grapheme_width;
    }

    chunks.push(&line[chunk_start..]);
    chunks
}

/// Calculate the display width of text in cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}
