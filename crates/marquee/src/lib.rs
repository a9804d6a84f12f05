#![forbid(unsafe_code)]

//! Marquee public facade crate.
//!
//! Re-exports the types needed to render text from the internal crates and
//! adds a top-level [`Error`], a [`Result`] alias, and a prelude.
//!
//! # Example
//! ```
//! use marquee::prelude::*;
//!
//! let raw: RawOptions = RawOptions {
//!     align: Some("right".into()),
//!     ..RawOptions::default()
//! };
//! let out = marquee::render_raw("hi", raw, Some(Viewport::new(6, 1))).unwrap();
//! assert_eq!(out.output, vec!["    hi"]);
//! ```

use std::fmt;
use std::io;

// --- Core re-exports -------------------------------------------------------

pub use marquee_core::{Unbounded, Viewport, ViewportSource, effective_width};

#[cfg(not(target_arch = "wasm32"))]
pub use marquee_core::TerminalViewport;

// --- Style re-exports ------------------------------------------------------

pub use marquee_style::ansi::strip_ansi;
pub use marquee_style::{
    CANDY_PALETTE, Candy, ColorSpec, ColorStrategy, Gradient, GradientMode, NamedColor,
    ParseColorError, Plain, Rgb, Solid,
};

// --- Render re-exports -----------------------------------------------------

pub use marquee_render::{
    Align, ConfigError, GradientSpec, MAX_SPACING, RawOptions, RenderConfig, RenderEnv, RenderOutput,
    Renderer, render,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for marquee.
#[derive(Debug)]
pub enum Error {
    /// Options that failed validation.
    InvalidConfig(ConfigError),
    /// I/O failure while writing rendered output.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "invalid options: {err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for marquee APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Convenience ----------------------------------------------------------

/// Validate `raw` and render `text` with it.
///
/// # Errors
///
/// [`Error::InvalidConfig`] when the options do not validate.
pub fn render_raw(text: &str, raw: RawOptions, viewport: Option<Viewport>) -> Result<RenderOutput> {
    let config = RenderConfig::try_from(raw)?;
    Ok(render(text, &config, viewport))
}

/// Write every display line followed by `\n`.
///
/// # Errors
///
/// [`Error::Io`] when the writer fails.
pub fn write_output<W: io::Write>(out: &mut W, output: &RenderOutput) -> Result<()> {
    for line in &output.output {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Align, ColorSpec, Error, GradientSpec, RawOptions, RenderConfig, RenderEnv, RenderOutput,
        Renderer, Result, Rgb, Viewport, ViewportSource,
    };

    // `render` names both the function and the render crate.
    pub use crate::{core, render, style, text};
}

pub use marquee_core as core;
pub use marquee_render as render;
pub use marquee_style as style;
pub use marquee_text as text;
