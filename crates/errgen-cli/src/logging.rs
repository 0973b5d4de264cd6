//! Log output on stderr

use tracing_subscriber::EnvFilter;

/// Filter directive for the given verbosity flags.
pub(crate) fn filter_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the global subscriber
///
/// Without `-v`/`-q`, `RUST_LOG` is honored when set.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let directive = filter_directive(verbose, quiet);
    let filter = if verbose == 0 && !quiet {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    } else {
        EnvFilter::new(directive)
    };

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
