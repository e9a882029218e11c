// ============================================================================
// Utilities Module
// Logging setup for binaries, demos and benchmarks
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
