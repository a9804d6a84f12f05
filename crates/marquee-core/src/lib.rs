#![forbid(unsafe_code)]

//! Core: viewport geometry, injectable viewport sources, and logging.

pub mod geometry;
pub mod logging;
pub mod viewport;

pub use geometry::{Viewport, effective_width};
pub use viewport::{Unbounded, ViewportSource};

#[cfg(not(target_arch = "wasm32"))]
pub use viewport::TerminalViewport;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
