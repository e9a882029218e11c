// ============================================================================
// Logging
// Installs a fmt subscriber for the crate's tracing events
// ============================================================================

use tracing::Level;

/// Install a global `fmt` subscriber capped at `level`.
///
/// The engine emits `trace` events when a multiply wraps and when parsing
/// fails, so `Level::TRACE` shows both.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_logging(
    level: Level,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        // Another test may have installed the subscriber first
        let _ = init_logging(Level::TRACE);
        assert!(init_logging(Level::DEBUG).is_err());
    }
}
