// ============================================================================
// Number Format Info
// Owned locale symbols with culture presets
// ============================================================================

use crate::interfaces::FormatProvider;
use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Culture-specific symbols for decimal text.
///
/// Implements [`FormatProvider`], so it can be handed straight to the
/// engine's `format` and `parse` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberFormatInfo {
    /// Separator between integral and fractional digits
    pub decimal_separator: String,

    /// Negative sign prefix
    pub negative_sign: String,

    /// Positive sign prefix
    pub positive_sign: String,

    /// Digit group separator for the integral part
    pub group_separator: String,
}

impl NumberFormatInfo {
    /// Create symbols with the given decimal separator and invariant signs.
    pub fn new(decimal_separator: impl Into<String>) -> Self {
        Self {
            decimal_separator: decimal_separator.into(),
            ..Self::invariant()
        }
    }

    /// Builder method: Set negative sign
    pub fn with_negative_sign(mut self, sign: impl Into<String>) -> Self {
        self.negative_sign = sign.into();
        self
    }

    /// Builder method: Set positive sign
    pub fn with_positive_sign(mut self, sign: impl Into<String>) -> Self {
        self.positive_sign = sign.into();
        self
    }

    /// Builder method: Set group separator
    pub fn with_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.group_separator = separator.into();
        self
    }

    /// Validate the symbols.
    ///
    /// Decimal separator and signs must be non-empty, and the decimal
    /// separator must differ from the group separator and signs, otherwise
    /// parsing would be ambiguous.
    pub fn validate(&self) -> NumericResult<()> {
        if self.decimal_separator.is_empty()
            || self.negative_sign.is_empty()
            || self.positive_sign.is_empty()
        {
            return Err(NumericError::InvalidFormat);
        }

        if self.decimal_separator == self.group_separator
            || self.decimal_separator == self.negative_sign
            || self.decimal_separator == self.positive_sign
        {
            return Err(NumericError::InvalidFormat);
        }

        if self.decimal_separator.chars().any(|c| c.is_ascii_digit()) {
            return Err(NumericError::InvalidFormat);
        }

        Ok(())
    }
}

impl Default for NumberFormatInfo {
    fn default() -> Self {
        Self::invariant()
    }
}

impl FormatProvider for NumberFormatInfo {
    fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    fn negative_sign(&self) -> &str {
        &self.negative_sign
    }

    fn positive_sign(&self) -> &str {
        &self.positive_sign
    }

    fn group_separator(&self) -> &str {
        &self.group_separator
    }
}

// ============================================================================
// Preset Cultures (Factory Methods)
// ============================================================================

impl NumberFormatInfo {
    /// Culture-independent symbols
    /// - Decimal: `.`
    /// - Group: `,`
    pub fn invariant() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            negative_sign: "-".to_string(),
            positive_sign: "+".to_string(),
            group_separator: ",".to_string(),
        }
    }

    /// German-style symbols
    /// - Decimal: `,`
    /// - Group: `.`
    pub fn german() -> Self {
        Self::new(",").with_group_separator(".")
    }

    /// French-style symbols
    /// - Decimal: `,`
    /// - Group: narrow no-break space
    pub fn french() -> Self {
        Self::new(",").with_group_separator("\u{202f}")
    }

    /// Swiss-style symbols
    /// - Decimal: `.`
    /// - Group: `'`
    pub fn swiss() -> Self {
        Self::new(".").with_group_separator("'")
    }
}
