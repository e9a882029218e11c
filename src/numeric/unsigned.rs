// ============================================================================
// Unsigned Scaled Arithmetic
// ScaledInteger for u64 with u128 intermediates
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::MidpointRounding;
use super::scaled::ScaledInteger;
use super::text::{format_magnitude, is_power_of_ten, scale_fraction, split_number};
use crate::domain::NumberStyle;
use crate::interfaces::FormatProvider;

impl ScaledInteger for u64 {
    const ZERO: Self = 0;
    const MAX_DECIMALS: u32 = 19;

    #[inline]
    fn pow10(exp: u32) -> Option<Self> {
        10u64.checked_pow(exp)
    }

    #[inline]
    fn multiply(self, rhs: Self, scaling_factor: Self) -> Self {
        let wide = (self as u128) * (rhs as u128) / (scaling_factor as u128);
        let narrowed = wide as u64;

        if narrowed as u128 != wide {
            tracing::trace!(
                left = self,
                right = rhs,
                scaling_factor,
                result = narrowed,
                "scaled multiply wrapped to 64 bits"
            );
        }

        narrowed
    }

    #[inline]
    fn divide(self, rhs: Self, scaling_factor: Self) -> Self {
        ((self as u128) * (scaling_factor as u128) / (rhs as u128)) as u64
    }

    #[inline]
    fn floor(self, scaling_factor: Self) -> Self {
        (self / scaling_factor) * scaling_factor
    }

    #[inline]
    fn ceiling(self, scaling_factor: Self) -> Self {
        if self % scaling_factor == 0 {
            return self;
        }
        ((self / scaling_factor) * scaling_factor).wrapping_add(scaling_factor)
    }

    /// Without a negative direction `ToNegativeInfinity` truncates like
    /// `ToZero`, and `ToPositiveInfinity` always rounds a non-zero digit up.
    #[inline]
    fn round(self, mode: MidpointRounding) -> Self {
        let quotient = self / 10;
        let dropped = (self % 10) as u8;
        let kept = (quotient % 10) as u8;

        let quotient = if mode.rounds_away(kept, dropped, false) {
            quotient + 1
        } else {
            quotient
        };

        quotient.wrapping_mul(10)
    }

    fn round_digits(self, digits: u32, mode: MidpointRounding) -> Self {
        if digits == 0 {
            return self;
        }

        match 10u64.checked_pow(digits - 1) {
            Some(unit) => ScaledInteger::round(self / unit, mode).wrapping_mul(unit),
            None => 0,
        }
    }

    fn format<P: FormatProvider + ?Sized>(self, scaling_factor: Self, provider: &P) -> String {
        debug_assert!(
            is_power_of_ten(scaling_factor as u128),
            "scaling factor must be a positive power of ten"
        );

        format_magnitude(self as u128, scaling_factor as u128, false, provider)
    }

    fn parse_with_rounding<P: FormatProvider + ?Sized>(
        text: &str,
        scaling_factor: Self,
        style: NumberStyle,
        provider: &P,
        mode: MidpointRounding,
    ) -> NumericResult<Self> {
        debug_assert!(
            is_power_of_ten(scaling_factor as u128),
            "scaling factor must be a positive power of ten"
        );

        parse_unsigned(text, scaling_factor as u128, style, provider, mode).inspect_err(|err| {
            tracing::trace!(text, scaling_factor, error = %err, "failed to parse unsigned scaled value");
        })
    }
}

fn parse_unsigned<P: FormatProvider + ?Sized>(
    text: &str,
    scale: u128,
    style: NumberStyle,
    provider: &P,
    mode: MidpointRounding,
) -> NumericResult<u64> {
    let parts = split_number(text, style, provider)?;

    let integral = parts
        .integral
        .checked_mul(scale)
        .ok_or(NumericError::Overflow)?;
    let fraction = scale_fraction(
        &parts.fraction,
        scale,
        (parts.integral % 10) as u8,
        mode,
        false,
    );
    let magnitude = integral
        .checked_add(fraction)
        .ok_or(NumericError::Overflow)?;

    // "-0" is zero; any other negative value is out of range
    if parts.negative && magnitude != 0 {
        return Err(NumericError::Overflow);
    }

    u64::try_from(magnitude).map_err(|_| NumericError::Overflow)
}
