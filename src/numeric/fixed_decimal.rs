// ============================================================================
// Fixed-Point Decimal
// Typed wrapper over the signed scaled engine with compile-time precision
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::MidpointRounding;
use super::scaled::ScaledInteger;
use crate::domain::NumberStyle;
use crate::interfaces::{FormatProvider, InvariantFormat};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Fixed-point decimal number with compile-time precision.
///
/// Internally stores `value × 10^DECIMALS` as an i64 and delegates all
/// arithmetic, rounding and text conversion to the scaled engine.
///
/// # Type Parameter
/// - `DECIMALS`: Number of decimal places (0-18). Default is 9.
///
/// # Example
/// ```
/// use scaled_arithmetic::numeric::FixedDecimal;
///
/// let price = FixedDecimal::<3>::from_integer(100).unwrap(); // 100.000
/// let qty: FixedDecimal<3> = "2.5".parse().unwrap();         // 2.500
/// assert_eq!(price.wrapping_mul(qty).to_string(), "250");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8 = 9>(i64);

// ============================================================================
// Scale Constants
// ============================================================================

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

impl<const D: u8> FixedDecimal<D> {
    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = pow10(D);

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(pow10(D));

    /// Maximum representable value
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Create from integer and fractional parts.
    ///
    /// `fraction` is in units of `1 / SCALE` and takes the sign of `integer`.
    ///
    /// # Errors
    /// - `InvalidFormat` if `fraction >= SCALE`
    /// - `Overflow` if the value is too large to represent
    #[inline]
    pub fn from_parts(integer: i64, fraction: u64) -> NumericResult<Self> {
        if fraction >= Self::SCALE as u64 {
            return Err(NumericError::InvalidFormat);
        }

        let int_scaled = integer
            .checked_mul(Self::SCALE)
            .ok_or(NumericError::Overflow)?;

        let frac_signed = if integer < 0 {
            -(fraction as i64)
        } else {
            fraction as i64
        };

        int_scaled
            .checked_add(frac_signed)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Get absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for `MIN`.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        self.0.checked_abs().map(Self).ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Multiplication that wraps on overflow, exactly like the engine's
    /// `multiply`.
    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.multiply(rhs.0, Self::SCALE))
    }

    /// Checked multiplication, truncating toward zero.
    ///
    /// Uses an i128 intermediate and reports results outside the i64 range
    /// instead of wrapping.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let result = (self.0 as i128) * (rhs.0 as i128) / (Self::SCALE as i128);
        narrow(result)
    }

    /// Checked division, truncating toward zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` or `Underflow` if the result is out of range
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }
        let result = (self.0 as i128) * (Self::SCALE as i128) / (rhs.0 as i128);
        narrow(result)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Largest whole number not above `self`.
    #[inline]
    pub fn floor(self) -> Self {
        Self(ScaledInteger::floor(self.0, Self::SCALE))
    }

    /// Smallest whole number not below `self`.
    #[inline]
    pub fn ceil(self) -> Self {
        Self(ScaledInteger::ceiling(self.0, Self::SCALE))
    }

    /// Round to `decimals` decimal places.
    ///
    /// Digits beyond the rounded one are discarded before the rounding
    /// decision. `decimals >= DECIMALS` returns `self`.
    #[inline]
    pub fn round_dp(self, decimals: u8, mode: MidpointRounding) -> Self {
        let drop = D.saturating_sub(decimals);
        Self(self.0.round_digits(u32::from(drop), mode))
    }

    // ========================================================================
    // Locale-Aware Text
    // ========================================================================

    /// Format with the given locale symbols.
    ///
    /// Trailing fraction zeros are kept; a zero fraction is omitted.
    pub fn format_with<P: FormatProvider + ?Sized>(self, provider: &P) -> String {
        self.0.format(Self::SCALE, provider)
    }

    /// Parse with the given locale symbols, rounding surplus digits to even.
    ///
    /// # Errors
    /// - `InvalidFormat` if `text` is not a decimal number
    /// - `Overflow` if the value does not fit
    pub fn parse_with<P: FormatProvider + ?Sized>(text: &str, provider: &P) -> NumericResult<Self> {
        i64::parse_with_rounding(
            text,
            Self::SCALE,
            NumberStyle::NUMBER,
            provider,
            MidpointRounding::ToEven,
        )
        .map(Self)
    }
}

#[inline]
fn narrow<const D: u8>(wide: i128) -> NumericResult<FixedDecimal<D>> {
    if wide > i64::MAX as i128 {
        Err(NumericError::Overflow)
    } else if wide < i64::MIN as i128 {
        Err(NumericError::Underflow)
    } else {
        Ok(FixedDecimal(wide as i64))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u8> Neg for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// Infallible Add/Sub for ergonomics (panics on overflow - use checked_* in production)
impl<const D: u8> Add for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("FixedDecimal addition overflow")
    }
}

impl<const D: u8> Sub for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("FixedDecimal subtraction overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8> fmt::Debug for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDecimal<{}>({}, raw={})", D, self, self.0)
    }
}

impl<const D: u8> fmt::Display for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(&InvariantFormat))
    }
}

impl<const D: u8> std::str::FromStr for FixedDecimal<D> {
    type Err = NumericError;

    /// Parse invariant decimal text (`.` separator, `-` sign).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &InvariantFormat)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl<const D: u8> FixedDecimal<D> {
    /// Convert from rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `PrecisionLoss` if significant digits would be lost
    /// - `Overflow` if the value is too large
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let scaled = d
            .checked_mul(rust_decimal::Decimal::from(Self::SCALE))
            .ok_or(NumericError::Overflow)?;

        if scaled.fract() != rust_decimal::Decimal::ZERO {
            return Err(NumericError::PrecisionLoss);
        }

        scaled.to_i64().map(Self).ok_or(NumericError::Overflow)
    }

    /// Convert to rust_decimal::Decimal.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::new(self.0, u32::from(D))
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Monetary amount with 4 decimal places
pub type Money = FixedDecimal<4>;

/// Nano-precision value with 9 decimal places
pub type Nano = FixedDecimal<9>;

// ============================================================================
// Tests
// ============================================================================
