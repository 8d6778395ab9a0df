//! Tracing setup for the `fcmp` binary.
//!
//! Logs go to stderr so stdout stays clean for tables and plots. `RUST_LOG`
//! wins over the `-v`/`-q` flags when set.

use tracing_subscriber::EnvFilter;

/// Map CLI verbosity flags to a default filter directive.
pub fn filter_directive(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(filter_directive(0, true), "error");
        assert_eq!(filter_directive(0, false), "warn");
        assert_eq!(filter_directive(1, true), "debug");
        assert_eq!(filter_directive(5, false), "trace");
    }
}
