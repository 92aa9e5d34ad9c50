//! Logging setup.
//!
//! The library only emits `tracing` events; binaries embedding it call
//! [`init`] once to get them on stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// Honours `RUST_LOG`, defaulting to `info`. Returns an error instead of
/// panicking if a subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_level(true))
        .try_init()?;

    tracing::debug!("Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_an_error() {
        // Another test binary may have installed one already; only the
        // second call in this process is guaranteed to fail.
        let _ = init();
        assert!(init().is_err());
    }
}
