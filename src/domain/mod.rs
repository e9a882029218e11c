// ============================================================================
// Domain Models Module
// Locale symbols, number styles and decimal contexts
// ============================================================================

pub mod config;
pub mod locale;
pub mod style;

pub use config::DecimalContext;
pub use locale::NumberFormatInfo;
pub use style::NumberStyle;
