#![forbid(unsafe_code)]

//! Library half of the marquee binary: argument parsing and log setup,
//! kept here so they can be tested without spawning the process.

pub mod cli;
pub mod logging;
