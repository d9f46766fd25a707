use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber for hosts that do not bring their own.
///
/// `RUST_LOG` wins over `default_filter`. Calling this twice is a no-op.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_repeatable() {
        init_tracing("info");
        init_tracing("debug");
        tracing::info!("tracing initialized twice without panicking");
    }
}
