// ============================================================================
// Format Provider Interface
// Defines the locale contract used when converting to and from text
// ============================================================================

/// Source of the culture-specific symbols used by formatting and parsing.
///
/// The engine owns no locale state; every text conversion borrows a
/// provider for the duration of the call.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so a single provider can be
/// shared between threads.
pub trait FormatProvider: Send + Sync {
    /// Separator between the integral and fractional digits (e.g. `"."`).
    fn decimal_separator(&self) -> &str;

    /// Prefix marking a negative number (e.g. `"-"`).
    fn negative_sign(&self) -> &str;

    /// Prefix explicitly marking a positive number.
    fn positive_sign(&self) -> &str {
        "+"
    }

    /// Separator between digit groups in the integral part (e.g. `","`).
    fn group_separator(&self) -> &str {
        ","
    }
}

impl<P: FormatProvider + ?Sized> FormatProvider for &P {
    fn decimal_separator(&self) -> &str {
        (**self).decimal_separator()
    }

    fn negative_sign(&self) -> &str {
        (**self).negative_sign()
    }

    fn positive_sign(&self) -> &str {
        (**self).positive_sign()
    }

    fn group_separator(&self) -> &str {
        (**self).group_separator()
    }
}

/// Provider with the culture-independent symbols (`.`, `-`, `+`, `,`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvariantFormat;

impl FormatProvider for InvariantFormat {
    fn decimal_separator(&self) -> &str {
        "."
    }

    fn negative_sign(&self) -> &str {
        "-"
    }
}
