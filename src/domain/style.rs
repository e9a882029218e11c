// ============================================================================
// Number Style
// Lexical elements accepted when parsing decimal text
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which lexical elements a parse accepts around and inside the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberStyle {
    /// Leading Unicode whitespace is skipped
    pub allow_leading_white: bool,

    /// Trailing Unicode whitespace is skipped
    pub allow_trailing_white: bool,

    /// A leading positive or negative sign is accepted
    pub allow_leading_sign: bool,

    /// The decimal separator and a fractional part are accepted
    pub allow_decimal_point: bool,

    /// Group separators are accepted between integral digits
    pub allow_thousands: bool,
}

impl NumberStyle {
    /// Bare digits only
    pub const NONE: Self = Self {
        allow_leading_white: false,
        allow_trailing_white: false,
        allow_leading_sign: false,
        allow_decimal_point: false,
        allow_thousands: false,
    };

    /// Whitespace and sign around an integer
    pub const INTEGER: Self = Self {
        allow_leading_white: true,
        allow_trailing_white: true,
        allow_leading_sign: true,
        allow_decimal_point: false,
        allow_thousands: false,
    };

    /// Integer plus decimal point and group separators
    pub const NUMBER: Self = Self {
        allow_leading_white: true,
        allow_trailing_white: true,
        allow_leading_sign: true,
        allow_decimal_point: true,
        allow_thousands: true,
    };

    /// Builder method: Toggle leading and trailing whitespace
    pub const fn with_whitespace(mut self, allow: bool) -> Self {
        self.allow_leading_white = allow;
        self.allow_trailing_white = allow;
        self
    }

    /// Builder method: Toggle the leading sign
    pub const fn with_leading_sign(mut self, allow: bool) -> Self {
        self.allow_leading_sign = allow;
        self
    }

    /// Builder method: Toggle the decimal point
    pub const fn with_decimal_point(mut self, allow: bool) -> Self {
        self.allow_decimal_point = allow;
        self
    }

    /// Builder method: Toggle group separators
    pub const fn with_thousands(mut self, allow: bool) -> Self {
        self.allow_thousands = allow;
        self
    }
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self::NUMBER
    }
}
