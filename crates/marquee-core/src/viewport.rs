#![forbid(unsafe_code)]

//! Viewport sources.
//!
//! The renderer never queries the terminal itself. Callers hand it a
//! [`ViewportSource`] instead, so tests can pin the size with a plain
//! [`Viewport`] while the CLI asks the real terminal through
//! [`TerminalViewport`].

use crate::geometry::Viewport;

/// Something that can report the current viewport.
pub trait ViewportSource {
    /// The viewport to lay out into, or `None` for unbounded width.
    fn viewport(&self) -> Option<Viewport>;
}

/// A fixed viewport reports itself.
impl ViewportSource for Viewport {
    fn viewport(&self) -> Option<Viewport> {
        Some(*self)
    }
}

impl ViewportSource for Option<Viewport> {
    fn viewport(&self) -> Option<Viewport> {
        *self
    }
}

impl<S: ViewportSource + ?Sized> ViewportSource for &S {
    fn viewport(&self) -> Option<Viewport> {
        (**self).viewport()
    }
}

impl<S: ViewportSource + ?Sized> ViewportSource for Box<S> {
    fn viewport(&self) -> Option<Viewport> {
        (**self).viewport()
    }
}

/// No viewport at all: lines only wrap when a max length is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unbounded;

impl ViewportSource for Unbounded {
    fn viewport(&self) -> Option<Viewport> {
        None
    }
}

/// Queries the attached terminal for its size on every call.
///
/// When the query fails or the terminal reports zero columns, the
/// configured fallback is used (unbounded by default).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalViewport {
    fallback: Option<Viewport>,
}

#[cfg(not(target_arch = "wasm32"))]
impl TerminalViewport {
    /// Terminal source with an unbounded fallback.
    #[must_use]
    pub const fn new() -> Self {
        Self { fallback: None }
    }

    /// Terminal source that falls back to `viewport` when no size is known.
    #[must_use]
    pub const fn with_fallback(viewport: Viewport) -> Self {
        Self {
            fallback: Some(viewport),
        }
    }

    /// The viewport used when the terminal cannot be queried.
    #[must_use]
    pub const fn fallback(&self) -> Option<Viewport> {
        self.fallback
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ViewportSource for TerminalViewport {
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn viewport(&self) -> Option<Viewport> {
        match crossterm::terminal::size() {
            Ok((cols, rows)) if cols > 0 => Some(Viewport::from_terminal(cols, rows)),
            Ok(_) => self.fallback,
            Err(err) => {
                crate::warn!(error = %err, "terminal size unavailable, using fallback");
                self.fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_viewport_reports_itself() {
        let v = Viewport::new(40, 12);
        assert_eq!(v.viewport(), Some(v));
    }

    #[test]
    fn unbounded_reports_nothing() {
        assert_eq!(Unbounded.viewport(), None);
    }

    #[test]
    fn option_source_passes_through() {
        let some: Option<Viewport> = Some(Viewport::new(3, 4));
        assert_eq!(some.viewport(), Some(Viewport::new(3, 4)));
        let none: Option<Viewport> = None;
        assert_eq!(none.viewport(), None);
    }

    #[test]
    fn references_and_boxes_delegate() {
        let v = Viewport::new(10, 10);
        assert_eq!((&v).viewport(), Some(v));
        let boxed: Box<dyn ViewportSource> = Box::new(v);
        assert_eq!(boxed.viewport(), Some(v));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn terminal_viewport_fallback_is_configurable() {
        assert_eq!(TerminalViewport::new().fallback(), None);
        let fallback = Viewport::new(80, 24);
        assert_eq!(
            TerminalViewport::with_fallback(fallback).fallback(),
            Some(fallback)
        );
    }
}
