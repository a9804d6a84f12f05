#![forbid(unsafe_code)]

//! Log setup for the binary.

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "MARQUEE_LOG";

/// Install a stderr `fmt` subscriber filtered by `MARQUEE_LOG`
/// (default `warn`). A second call is a no-op.
#[cfg(feature = "tracing")]
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Logging is compiled out without the `tracing` feature.
#[cfg(not(feature = "tracing"))]
pub fn init() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init();
        init();
        assert_eq!(LOG_ENV, "MARQUEE_LOG");
    }
}
