// ============================================================================
// Interfaces Module
// Contains the trait contracts consumed by the arithmetic engine
// ============================================================================

mod format_provider;

pub use format_provider::{FormatProvider, InvariantFormat};
