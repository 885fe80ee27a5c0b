use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber with timestamp, level, and target.
///
/// Diagnostics go to stderr so they never interleave with reported messages
/// on stdout. `RUST_LOG` takes precedence; otherwise `debug` selects DEBUG
/// over WARN. Calling this more than once is harmless.
pub fn init(debug: bool) {
    let _ = fmt()
        .with_env_filter(filter(debug))
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::SystemTime)
        .with_level(true)
        .with_target(true)
        .try_init();
}

fn filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(debug)))
}

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "debug");
        assert_eq!(default_directive(false), "warn");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
