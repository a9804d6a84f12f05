#![forbid(unsafe_code)]

//! Color handling for marquee.
//!
//! - [`Rgb`] and the fixed [`NamedColor`] palette
//! - [`ColorSpec`], the parsed form of a user-supplied color name
//! - [`ColorStrategy`] and its implementations ([`Solid`], [`Candy`],
//!   [`Gradient`], [`Plain`]) which paint one display row at a time
//! - [`ansi`], truecolor SGR writers and escape stripping
//!
//! # Example
//! ```
//! use marquee_style::{ColorSpec, ColorStrategy, Solid, ansi::strip_ansi};
//!
//! let red: ColorSpec = "red".parse().unwrap();
//! let solid = Solid::new(red.rgb().unwrap());
//! let painted = solid.colorize(0, "test");
//! assert_eq!(painted, "\x1b[38;2;255;0;0mtest\x1b[39m");
//! assert_eq!(strip_ansi(&painted), "test");
//! ```

pub mod ansi;
pub mod color;
pub mod gradient;
pub mod strategy;

pub use color::{ColorSpec, NamedColor, ParseColorError, Rgb};
pub use gradient::{Gradient, GradientMode};
pub use strategy::{CANDY_PALETTE, Candy, ColorStrategy, Plain, Solid, paint_background};
