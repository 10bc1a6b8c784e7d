//! Tracing setup for the command-line binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive string
pub const LOG_ENV: &str = "CASH_AUDIT_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once; later calls are no-ops
///
/// `CASH_AUDIT_LOG` wins when set. Otherwise the crate logs warnings, or
/// debug events with `verbose`. Output goes to stderr so reports written
/// to stdout stay clean.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
            EnvFilter::new(if verbose {
                "cash_audit=debug"
            } else {
                "cash_audit=warn"
            })
        });

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
        tracing::debug!("tracing initialized twice without panicking");
    }
}
