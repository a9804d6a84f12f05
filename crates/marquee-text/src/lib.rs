#![forbid(unsafe_code)]

//! Text layout primitives for marquee.
//!
//! - [`split_logical_lines`] - break input on the `|` delimiter
//! - [`letter_space`] - widen a line with fill between graphemes
//! - [`wrap_hard`] - cut a line into fixed-width chunks
//!
//! # Example
//! ```
//! use marquee_text::{letter_space, split_logical_lines, wrap_hard};
//!
//! let lines = split_logical_lines("text|more");
//! assert_eq!(lines, vec!["text", "more"]);
//!
//! let spaced = letter_space("text", 2);
//! assert_eq!(spaced, "t  e  x  t");
//!
//! let chunks = wrap_hard("testing long test", Some(7));
//! assert_eq!(chunks, vec!["testing", " long t", "est"]);
//! ```

pub mod lines;
pub mod spacing;
pub mod wrap;

pub use lines::{LINE_DELIMITER, split_logical_lines};
pub use spacing::{FILL, letter_space};
pub use wrap::{display_width, wrap_hard};
