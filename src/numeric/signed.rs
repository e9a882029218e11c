// ============================================================================
// Signed Scaled Arithmetic
// ScaledInteger for i64 with i128 intermediates
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::MidpointRounding;
use super::scaled::ScaledInteger;
use super::text::{format_magnitude, is_power_of_ten, scale_fraction, split_number};
use crate::domain::NumberStyle;
use crate::interfaces::FormatProvider;

impl ScaledInteger for i64 {
    const ZERO: Self = 0;
    const MAX_DECIMALS: u32 = 18;

    #[inline]
    fn pow10(exp: u32) -> Option<Self> {
        10i64.checked_pow(exp)
    }

    #[inline]
    fn multiply(self, rhs: Self, scaling_factor: Self) -> Self {
        let wide = (self as i128) * (rhs as i128) / (scaling_factor as i128);
        let narrowed = wide as i64;

        if narrowed as i128 != wide {
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
        ((self as i128) * (scaling_factor as i128) / (rhs as i128)) as i64
    }

    #[inline]
    fn floor(self, scaling_factor: Self) -> Self {
        if self % scaling_factor == 0 {
            return self;
        }

        // Division truncates toward zero, so negatives need one more unit
        let truncated = (self / scaling_factor) * scaling_factor;
        if self < 0 {
            truncated.wrapping_sub(scaling_factor)
        } else {
            truncated
        }
    }

    #[inline]
    fn ceiling(self, scaling_factor: Self) -> Self {
        if self % scaling_factor == 0 {
            return self;
        }

        let truncated = (self / scaling_factor) * scaling_factor;
        if self > 0 {
            truncated.wrapping_add(scaling_factor)
        } else {
            truncated
        }
    }

    #[inline]
    fn round(self, mode: MidpointRounding) -> Self {
        let quotient = self / 10;
        let dropped = (self % 10).unsigned_abs() as u8;
        let kept = (quotient % 10).unsigned_abs() as u8;
        let negative = self < 0;

        let quotient = if mode.rounds_away(kept, dropped, negative) {
            if negative {
                quotient - 1
            } else {
                quotient + 1
            }
        } else {
            quotient
        };

        quotient.wrapping_mul(10)
    }

    fn round_digits(self, digits: u32, mode: MidpointRounding) -> Self {
        if digits == 0 {
            return self;
        }

        match 10i64.checked_pow(digits - 1) {
            Some(unit) => ScaledInteger::round(self / unit, mode).wrapping_mul(unit),
            None => 0,
        }
    }

    fn format<P: FormatProvider + ?Sized>(self, scaling_factor: Self, provider: &P) -> String {
        debug_assert!(
            scaling_factor > 0 && is_power_of_ten(scaling_factor as u128),
            "scaling factor must be a positive power of ten"
        );

        format_magnitude(
            u128::from(self.unsigned_abs()),
            scaling_factor as u128,
            self < 0,
            provider,
        )
    }

    fn parse_with_rounding<P: FormatProvider + ?Sized>(
        text: &str,
        scaling_factor: Self,
        style: NumberStyle,
        provider: &P,
        mode: MidpointRounding,
    ) -> NumericResult<Self> {
        debug_assert!(
            scaling_factor > 0 && is_power_of_ten(scaling_factor as u128),
            "scaling factor must be a positive power of ten"
        );

        parse_signed(text, scaling_factor as u128, style, provider, mode).inspect_err(|err| {
            tracing::trace!(text, scaling_factor, error = %err, "failed to parse signed scaled value");
        })
    }
}

fn parse_signed<P: FormatProvider + ?Sized>(
    text: &str,
    scale: u128,
    style: NumberStyle,
    provider: &P,
    mode: MidpointRounding,
) -> NumericResult<i64> {
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
        parts.negative,
    );
    let magnitude = integral
        .checked_add(fraction)
        .ok_or(NumericError::Overflow)?;

    let magnitude = i128::try_from(magnitude).map_err(|_| NumericError::Overflow)?;
    let value = if parts.negative { -magnitude } else { magnitude };

    i64::try_from(value).map_err(|_| NumericError::Overflow)
}
