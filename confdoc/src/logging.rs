//! Tracing setup for the binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "confdoc=warn",
        1 => "confdoc=info",
        _ => "confdoc=debug",
    }
}

/// Initialize the subscriber. Events go to stderr so generated output on
/// stdout stays clean.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_directive(0), "confdoc=warn");
        assert_eq!(default_directive(1), "confdoc=info");
        assert_eq!(default_directive(2), "confdoc=debug");
        assert_eq!(default_directive(7), "confdoc=debug");
    }
}
