#![forbid(unsafe_code)]

//! The marquee line renderer.
//!
//! Turns `|`-delimited text into display lines in six stages: split,
//! letter-space, wrap, align, line height, color. The stages run inside one
//! pure function, [`render`]; [`Renderer`] binds a
//! [`ViewportSource`](marquee_core::ViewportSource) for callers that want the
//! terminal size looked up for them.
//!
//! # Example
//! ```
//! use marquee_core::Viewport;
//! use marquee_render::{Align, RenderConfig, render};
//!
//! let config = RenderConfig::new().align(Align::Center);
//! let out = render("center", &config, Some(Viewport::new(10, 10)));
//! assert_eq!(out.output, vec!["  center"]);
//! assert_eq!(out.lines, 1);
//! ```

pub mod align;
pub mod config;
pub mod error;
pub mod renderer;

pub use config::{Align, GradientSpec, MAX_SPACING, RawOptions, RenderConfig, RenderEnv};
pub use error::ConfigError;
pub use renderer::{RenderOutput, Renderer, render};
