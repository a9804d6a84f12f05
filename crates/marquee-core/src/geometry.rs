#![forbid(unsafe_code)]

//! Viewport geometry and wrap-width reconciliation.

use std::num::NonZeroUsize;

/// The visible area text is laid out into, in terminal cells.
///
/// Only `width` influences layout. `height` is carried so callers that
/// paginate have the full terminal size on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Width in cells.
    pub width: usize,
    /// Height in rows.
    pub height: usize,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Build a viewport from a terminal size report (columns, rows).
    #[inline]
    #[must_use]
    pub const fn from_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols as usize, rows as usize)
    }

    /// Width usable for layout, or `None` when the viewport reports zero
    /// columns (detached terminals do this).
    #[inline]
    #[must_use]
    pub const fn layout_width(&self) -> Option<usize> {
        if self.width == 0 {
            None
        } else {
            Some(self.width)
        }
    }
}

/// Reconcile the viewport width with an optional hard line-length cap.
///
/// Returns the smaller of the two when both are present, whichever one is
/// present otherwise, and `None` (unbounded) when neither is.
#[must_use]
pub fn effective_width(
    viewport: Option<Viewport>,
    max_length: Option<NonZeroUsize>,
) -> Option<usize> {
    let width = viewport.and_then(|v| v.layout_width());
    let cap = max_length.map(NonZeroUsize::get);
    match (width, cap) {
        (Some(w), Some(c)) => Some(w.min(c)),
        (Some(w), None) => Some(w),
        (None, cap) => cap,
    }
}
