// ============================================================================
// Scaled Arithmetic
// Capability trait for raw scaled integers and the stateless engine facade
// ============================================================================

use super::errors::NumericResult;
use super::rounding::MidpointRounding;
use crate::domain::NumberStyle;
use crate::interfaces::FormatProvider;
use std::fmt;

/// A native integer holding `true_value × scaling_factor`.
///
/// Implemented for `i64` (see `signed.rs`) and `u64` (see `unsigned.rs`).
/// Intermediates are computed in the matching 128-bit type.
///
/// # Preconditions
/// - `scaling_factor > 0`; a zero factor or divisor panics like native
///   integer division.
/// - `format` and `parse` additionally require a power-of-ten factor.
pub trait ScaledInteger:
    Copy + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Zero in this domain
    const ZERO: Self;

    /// Largest `d` for which `10^d` is representable
    const MAX_DECIMALS: u32;

    /// `10^exp`, or `None` if it does not fit.
    fn pow10(exp: u32) -> Option<Self>;

    /// `(self × rhs) / scaling_factor`, truncated to the native width.
    ///
    /// Out-of-range results wrap (two's-complement truncation); this is
    /// never reported as an error.
    fn multiply(self, rhs: Self, scaling_factor: Self) -> Self;

    /// `(self × scaling_factor) / rhs`, truncated to the native width.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    fn divide(self, rhs: Self, scaling_factor: Self) -> Self;

    /// Largest multiple of `scaling_factor` not above `self`.
    fn floor(self, scaling_factor: Self) -> Self;

    /// Smallest multiple of `scaling_factor` not below `self`.
    fn ceiling(self, scaling_factor: Self) -> Self;

    /// Round away the last decimal digit; the result is a multiple of 10.
    fn round(self, mode: MidpointRounding) -> Self;

    /// Round away `digits` decimal digits.
    ///
    /// The lower `digits - 1` digits are discarded without rounding; only
    /// the last stripped digit goes through [`round`](Self::round).
    fn round_digits(self, digits: u32, mode: MidpointRounding) -> Self;

    /// Render as decimal text using the provider's symbols.
    fn format<P: FormatProvider + ?Sized>(self, scaling_factor: Self, provider: &P) -> String;

    /// Parse decimal text, rounding surplus fraction digits with `mode`.
    ///
    /// # Errors
    /// - `InvalidFormat` if `text` is not a number in `style`
    /// - `Overflow` if the scaled result does not fit
    fn parse_with_rounding<P: FormatProvider + ?Sized>(
        text: &str,
        scaling_factor: Self,
        style: NumberStyle,
        provider: &P,
        mode: MidpointRounding,
    ) -> NumericResult<Self>;
}

/// Stateless entry point for scaled fixed-point arithmetic.
///
/// Every operation is a pure function over a raw scaled value and its
/// scaling factor, available for both `i64` and `u64`.
///
/// # Example
/// ```
/// use scaled_arithmetic::numeric::{MidpointRounding, ScaledArithmetic};
/// use scaled_arithmetic::interfaces::InvariantFormat;
///
/// // 2.000 × 3.000 = 6.000 at three decimals
/// assert_eq!(ScaledArithmetic::multiply(2000i64, 3000, 1000), 6000);
/// assert_eq!(ScaledArithmetic::round(25i64, MidpointRounding::ToEven), 20);
/// assert_eq!(ScaledArithmetic::format(-1234i64, 1000, &InvariantFormat), "-1.234");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaledArithmetic;

impl ScaledArithmetic {
    /// See [`ScaledInteger::multiply`].
    #[inline]
    pub fn multiply<T: ScaledInteger>(left: T, right: T, scaling_factor: T) -> T {
        left.multiply(right, scaling_factor)
    }

    /// See [`ScaledInteger::divide`].
    #[inline]
    pub fn divide<T: ScaledInteger>(left: T, right: T, scaling_factor: T) -> T {
        left.divide(right, scaling_factor)
    }

    /// See [`ScaledInteger::floor`].
    #[inline]
    pub fn floor<T: ScaledInteger>(value: T, scaling_factor: T) -> T {
        ScaledInteger::floor(value, scaling_factor)
    }

    /// See [`ScaledInteger::ceiling`].
    #[inline]
    pub fn ceiling<T: ScaledInteger>(value: T, scaling_factor: T) -> T {
        ScaledInteger::ceiling(value, scaling_factor)
    }

    /// See [`ScaledInteger::round`].
    #[inline]
    pub fn round<T: ScaledInteger>(value: T, mode: MidpointRounding) -> T {
        ScaledInteger::round(value, mode)
    }

    /// See [`ScaledInteger::round_digits`].
    #[inline]
    pub fn round_digits<T: ScaledInteger>(value: T, digits: u32, mode: MidpointRounding) -> T {
        value.round_digits(digits, mode)
    }

    /// See [`ScaledInteger::format`].
    #[inline]
    pub fn format<T: ScaledInteger, P: FormatProvider + ?Sized>(
        value: T,
        scaling_factor: T,
        provider: &P,
    ) -> String {
        value.format(scaling_factor, provider)
    }

    /// Parse decimal text, rounding surplus fraction digits to even.
    ///
    /// # Errors
    /// - `InvalidFormat` if `text` is not a number in `style`
    /// - `Overflow` if the scaled result does not fit in `T`
    #[inline]
    pub fn parse<T: ScaledInteger, P: FormatProvider + ?Sized>(
        text: &str,
        scaling_factor: T,
        style: NumberStyle,
        provider: &P,
    ) -> NumericResult<T> {
        T::parse_with_rounding(text, scaling_factor, style, provider, MidpointRounding::ToEven)
    }

    /// See [`ScaledInteger::parse_with_rounding`].
    #[inline]
    pub fn parse_with_rounding<T: ScaledInteger, P: FormatProvider + ?Sized>(
        text: &str,
        scaling_factor: T,
        style: NumberStyle,
        provider: &P,
        mode: MidpointRounding,
    ) -> NumericResult<T> {
        T::parse_with_rounding(text, scaling_factor, style, provider, mode)
    }

    /// `10^decimals` in `T`, the scaling factor for `decimals` fraction digits.
    #[inline]
    pub fn scaling_factor<T: ScaledInteger>(decimals: u32) -> Option<T> {
        T::pow10(decimals)
    }
}
