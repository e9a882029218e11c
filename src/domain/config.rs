// ============================================================================
// Decimal Context
// Scale, rounding and locale bundled for repeated engine calls
// ============================================================================

use super::locale::NumberFormatInfo;
use super::style::NumberStyle;
use crate::numeric::{MidpointRounding, NumericError, NumericResult, ScaledInteger};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of decimal places any supported domain can scale by (`u64`)
const MAX_CONTEXT_DECIMALS: u32 = 19;

// ============================================================================
// Context Configuration
// ============================================================================

/// Everything the engine needs besides the raw value: how many fraction
/// digits a value carries, how surplus digits are rounded, and which
/// locale symbols and lexical elements are used for text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalContext {
    /// Number of fraction digits; the scaling factor is `10^decimals`
    pub decimals: u32,

    /// Rounding applied when parsing and when dropping digits
    pub rounding: MidpointRounding,

    /// Lexical elements accepted by `parse`
    pub style: NumberStyle,

    /// Locale symbols for `format` and `parse`
    pub format: NumberFormatInfo,
}

impl DecimalContext {
    /// Create an invariant-culture context that rounds to even
    pub fn new(decimals: u32) -> Self {
        Self {
            decimals,
            rounding: MidpointRounding::ToEven,
            style: NumberStyle::NUMBER,
            format: NumberFormatInfo::invariant(),
        }
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding(mut self, rounding: MidpointRounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builder method: Set accepted number style
    pub fn with_style(mut self, style: NumberStyle) -> Self {
        self.style = style;
        self
    }

    /// Builder method: Set locale symbols
    pub fn with_format(mut self, format: NumberFormatInfo) -> Self {
        self.format = format;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// - `InvalidScale` if no supported domain can hold `10^decimals`
    /// - `InvalidFormat` if the locale symbols are empty or ambiguous
    pub fn validate(&self) -> NumericResult<()> {
        if self.decimals > MAX_CONTEXT_DECIMALS {
            return Err(NumericError::InvalidScale(self.decimals));
        }

        self.format.validate()
    }

    /// The scaling factor `10^decimals` in `T`
    ///
    /// # Errors
    /// Returns `InvalidScale` if the factor does not fit in `T`
    /// (19 decimals fit `u64` but not `i64`).
    pub fn scaling_factor<T: ScaledInteger>(&self) -> NumericResult<T> {
        T::pow10(self.decimals).ok_or(NumericError::InvalidScale(self.decimals))
    }

    // ========================================================================
    // Engine Operations
    // ========================================================================

    /// Scaled multiply; wraps silently like the engine
    pub fn multiply<T: ScaledInteger>(&self, left: T, right: T) -> NumericResult<T> {
        Ok(left.multiply(right, self.scaling_factor()?))
    }

    /// Scaled divide
    ///
    /// # Errors
    /// Returns `DivisionByZero` instead of panicking on a zero divisor.
    pub fn divide<T: ScaledInteger>(&self, left: T, right: T) -> NumericResult<T> {
        if right == T::ZERO {
            return Err(NumericError::DivisionByZero);
        }
        Ok(left.divide(right, self.scaling_factor()?))
    }

    /// Round `value` so it keeps only `decimals` fraction digits, using the
    /// context's rounding mode. Asking for at least as many digits as the
    /// context carries leaves the value untouched.
    pub fn round<T: ScaledInteger>(&self, value: T, decimals: u32) -> T {
        if decimals >= self.decimals {
            return value;
        }
        value.round_digits(self.decimals - decimals, self.rounding)
    }

    /// Render a scaled value with the context's locale symbols
    pub fn format<T: ScaledInteger>(&self, value: T) -> NumericResult<String> {
        Ok(value.format(self.scaling_factor()?, &self.format))
    }

    /// Parse text with the context's style, symbols and rounding mode
    pub fn parse<T: ScaledInteger>(&self, text: &str) -> NumericResult<T> {
        T::parse_with_rounding(
            text,
            self.scaling_factor()?,
            self.style,
            &self.format,
            self.rounding,
        )
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl DecimalContext {
    /// Invariant culture: `.` decimal separator, `,` groups
    pub fn invariant(decimals: u32) -> Self {
        Self::new(decimals)
    }

    /// Continental European: `,` decimal separator, `.` groups
    pub fn european(decimals: u32) -> Self {
        Self::new(decimals).with_format(NumberFormatInfo::german())
    }

    /// Swiss: `.` decimal separator, `'` groups
    pub fn swiss(decimals: u32) -> Self {
        Self::new(decimals).with_format(NumberFormatInfo::swiss())
    }

    /// Two-decimal currency amounts rounded half away from zero
    pub fn accounting() -> Self {
        Self::new(2).with_rounding(MidpointRounding::AwayFromZero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = DecimalContext::new(4);

        assert_eq!(ctx.decimals, 4);
        assert_eq!(ctx.rounding, MidpointRounding::ToEven);
        assert_eq!(ctx.style, NumberStyle::NUMBER);
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let ctx = DecimalContext::new(2)
            .with_rounding(MidpointRounding::ToZero)
            .with_style(NumberStyle::INTEGER)
            .with_format(NumberFormatInfo::french());

        assert_eq!(ctx.rounding, MidpointRounding::ToZero);
        assert_eq!(ctx.style, NumberStyle::INTEGER);
        assert_eq!(ctx.format, NumberFormatInfo::french());
    }

    #[test]
    fn test_validation() {
        assert!(DecimalContext::new(19).validate().is_ok());
        assert_eq!(
            DecimalContext::new(20).validate(),
            Err(NumericError::InvalidScale(20))
        );

        let clashing = DecimalContext::new(2).with_format(NumberFormatInfo::new(","));
        assert_eq!(clashing.validate(), Err(NumericError::InvalidFormat));
    }

    #[test]
    fn test_scaling_factor_depends_on_domain() {
        let ctx = DecimalContext::new(19);

        assert_eq!(ctx.scaling_factor::<u64>(), Ok(10_000_000_000_000_000_000));
        assert_eq!(ctx.scaling_factor::<i64>(), Err(NumericError::InvalidScale(19)));
        assert_eq!(DecimalContext::new(3).scaling_factor::<i64>(), Ok(1000));
    }

    #[test]
    fn test_multiply_divide() {
        let ctx = DecimalContext::new(3);

        assert_eq!(ctx.multiply(2000i64, 3000), Ok(6000));
        assert_eq!(ctx.divide(6000u64, 2000), Ok(3000));
        assert_eq!(ctx.divide(6000i64, 0), Err(NumericError::DivisionByZero));
        assert_eq!(
            DecimalContext::new(19).multiply(1i64, 1),
            Err(NumericError::InvalidScale(19))
        );
    }

    #[test]
    fn test_round_drops_digits() {
        let ctx = DecimalContext::new(4);

        assert_eq!(ctx.round(12_345i64, 2), 12_300);
        assert_eq!(ctx.round(12_345i64, 4), 12_345);
        assert_eq!(ctx.round(12_345i64, 6), 12_345);
        assert_eq!(ctx.round(-12_350i64, 2), -12_400);

        let away = ctx.with_rounding(MidpointRounding::AwayFromZero);
        assert_eq!(away.round(12_350u64, 2), 12_400);
    }

    #[test]
    fn test_format_with_locale() {
        assert_eq!(DecimalContext::invariant(2).format(-123_456i64), Ok("-1234.56".to_string()));
        assert_eq!(DecimalContext::european(2).format(123_456i64), Ok("1234,56".to_string()));
        assert_eq!(DecimalContext::swiss(3).format(5u64), Ok("0.005".to_string()));
    }

    #[test]
    fn test_parse_uses_context_rounding() {
        let ctx = DecimalContext::invariant(2);
        assert_eq!(ctx.parse::<i64>("2.345"), Ok(234));
        assert_eq!(DecimalContext::accounting().parse::<i64>("2.345"), Ok(235));

        let floor = ctx.with_rounding(MidpointRounding::ToNegativeInfinity);
        assert_eq!(floor.parse::<i64>("-2.341"), Ok(-235));
        assert_eq!(floor.parse::<i64>("2.349"), Ok(234));
    }

    #[test]
    fn test_parse_with_locale() {
        assert_eq!(DecimalContext::european(3).parse::<i64>("1.234,5"), Ok(1_234_500));
        assert_eq!(DecimalContext::swiss(2).parse::<u64>("1'000.25"), Ok(100_025));
        assert_eq!(
            DecimalContext::invariant(2)
                .with_style(NumberStyle::INTEGER)
                .parse::<i64>("1.5"),
            Err(NumericError::InvalidFormat)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let ctx = DecimalContext::swiss(4).with_rounding(MidpointRounding::ToPositiveInfinity);

        let json = serde_json::to_string(&ctx).unwrap();
        let back: DecimalContext = serde_json::from_str(&json).unwrap();

        assert_eq!(back, ctx);
    }
}
