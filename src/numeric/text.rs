// ============================================================================
// Decimal Text Helpers
// Lexical splitting, fraction scaling and magnitude formatting shared by
// the signed and unsigned engines
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::MidpointRounding;
use crate::domain::NumberStyle;
use crate::interfaces::FormatProvider;
use arrayvec::ArrayString;
use smallvec::SmallVec;
use std::fmt::Write;

/// Decimal digits stored inline before spilling to the heap.
type DigitBuf = SmallVec<[u8; 24]>;

/// Sign, integral magnitude and raw fraction digits of a decimal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NumberParts {
    pub negative: bool,
    pub integral: u128,
    pub fraction: DigitBuf,
}

/// Returns `true` when `value` is 1, 10, 100, ...
#[inline]
pub(crate) fn is_power_of_ten(mut value: u128) -> bool {
    if value == 0 {
        return false;
    }
    while value % 10 == 0 {
        value /= 10;
    }
    value == 1
}

/// Number of decimal digits in `value` (`1000` has four).
#[inline]
pub(crate) fn digit_count(mut value: u128) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

/// Split `text` into sign, integral magnitude and fraction digits.
///
/// # Errors
/// - `InvalidFormat` if an element is present that `style` does not allow,
///   a non-digit appears, or there are no digits at all
/// - `Overflow` if the integral digits do not fit in 128 bits
pub(crate) fn split_number<P: FormatProvider + ?Sized>(
    text: &str,
    style: NumberStyle,
    provider: &P,
) -> NumericResult<NumberParts> {
    let mut s = text;
    if style.allow_leading_white {
        s = s.trim_start();
    }
    if style.allow_trailing_white {
        s = s.trim_end();
    }

    let mut negative = false;
    if style.allow_leading_sign {
        let neg = provider.negative_sign();
        let pos = provider.positive_sign();
        if let Some(rest) = strip_symbol(s, neg) {
            negative = true;
            s = rest;
        } else if let Some(rest) = strip_symbol(s, pos) {
            s = rest;
        }
    }

    let separator = provider.decimal_separator();
    let (int_text, frac_text) = match s.find(separator) {
        Some(pos) if !separator.is_empty() => {
            if !style.allow_decimal_point {
                return Err(NumericError::InvalidFormat);
            }
            (&s[..pos], &s[pos + separator.len()..])
        },
        _ => (s, ""),
    };

    let (integral, int_digits) = parse_integral(int_text, style, provider.group_separator())?;

    let mut fraction = DigitBuf::with_capacity(frac_text.len());
    for b in frac_text.bytes() {
        if !b.is_ascii_digit() {
            return Err(NumericError::InvalidFormat);
        }
        fraction.push(b - b'0');
    }

    if int_digits == 0 && fraction.is_empty() {
        return Err(NumericError::InvalidFormat);
    }

    Ok(NumberParts {
        negative,
        integral,
        fraction,
    })
}

#[inline]
fn strip_symbol<'a>(s: &'a str, symbol: &str) -> Option<&'a str> {
    if symbol.is_empty() {
        None
    } else {
        s.strip_prefix(symbol)
    }
}

/// Accumulate integral digits, skipping group separators after the first
/// digit when the style allows them. Returns the magnitude and digit count.
fn parse_integral(text: &str, style: NumberStyle, group: &str) -> NumericResult<(u128, usize)> {
    let mut rest = text;
    let mut value: u128 = 0;
    let mut digits = 0usize;

    while let Some(&b) = rest.as_bytes().first() {
        if style.allow_thousands && digits > 0 && !group.is_empty() && rest.starts_with(group) {
            rest = &rest[group.len()..];
            continue;
        }

        if !b.is_ascii_digit() {
            return Err(NumericError::InvalidFormat);
        }

        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(b - b'0')))
            .ok_or(NumericError::Overflow)?;
        digits += 1;
        rest = &rest[1..];
    }

    Ok((value, digits))
}

/// Scale raw fraction digits to `scaling_factor`.
///
/// A leading unit digit is prepended so leading zeros survive, then digits
/// are appended (×10) or rounded away one at a time until the width matches
/// the digit count of `scaling_factor`; finally the unit is subtracted.
/// A carry into the unit digit yields a full `scaling_factor`.
///
/// `integral_digit` is the last integral digit; it decides tie parity once
/// only the unit digit is left to keep.
pub(crate) fn scale_fraction(
    fraction: &[u8],
    scaling_factor: u128,
    integral_digit: u8,
    mode: MidpointRounding,
    negative: bool,
) -> u128 {
    let width = digit_count(scaling_factor);

    let mut digits = DigitBuf::with_capacity(fraction.len() + 1);
    digits.push(1);
    digits.extend_from_slice(fraction);

    while digits.len() > width {
        let Some(dropped) = digits.pop() else {
            break;
        };
        let kept = match digits.as_slice() {
            [unit] => (integral_digit + unit + 9) % 10,
            [.., last] => *last,
            [] => break,
        };
        if mode.rounds_away(kept, dropped, negative) {
            increment(&mut digits);
        }
    }

    let mut mantissa = digits
        .iter()
        .fold(0u128, |acc, &d| acc * 10 + u128::from(d));
    for _ in digits.len()..width {
        mantissa *= 10;
    }

    mantissa.saturating_sub(scaling_factor)
}

/// Add one unit in the last place. The leading unit digit absorbs the
/// final carry, so the width never grows.
fn increment(digits: &mut [u8]) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
}

/// Render `magnitude / scaling_factor` with an optional negative sign.
///
/// The fraction is zero-padded by rendering `fraction + scaling_factor`
/// and dropping its leading `1`.
pub(crate) fn format_magnitude<P: FormatProvider + ?Sized>(
    magnitude: u128,
    scaling_factor: u128,
    negative: bool,
    provider: &P,
) -> String {
    let integral = magnitude / scaling_factor;
    let fraction = magnitude % scaling_factor;

    let mut out = String::with_capacity(48);
    if negative {
        out.push_str(provider.negative_sign());
    }

    // Writing into a String or an ArrayString large enough for any u128
    // cannot fail.
    let _ = write!(out, "{}", integral);

    if fraction != 0 {
        let mut padded = ArrayString::<40>::new();
        let _ = write!(padded, "{}", fraction + scaling_factor);
        out.push_str(provider.decimal_separator());
        out.push_str(&padded[1..]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NumberFormatInfo;
    use crate::interfaces::InvariantFormat;

    fn split(text: &str) -> NumericResult<NumberParts> {
        split_number(text, NumberStyle::NUMBER, &InvariantFormat)
    }

    #[test]
    fn test_power_of_ten() {
        assert!(is_power_of_ten(1));
        assert!(is_power_of_ten(10));
        assert!(is_power_of_ten(1_000_000_000_000_000_000));
        assert!(!is_power_of_ten(0));
        assert!(!is_power_of_ten(20));
        assert!(!is_power_of_ten(1001));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(1), 1);
        assert_eq!(digit_count(1000), 4);
        assert_eq!(digit_count(u64::MAX as u128), 20);
    }

    #[test]
    fn test_split_basic() {
        let parts = split("-12.050").unwrap();
        assert!(parts.negative);
        assert_eq!(parts.integral, 12);
        assert_eq!(parts.fraction.as_slice(), &[0, 5, 0]);

        let parts = split("  +7 ").unwrap();
        assert!(!parts.negative);
        assert_eq!(parts.integral, 7);
        assert!(parts.fraction.is_empty());
    }

    #[test]
    fn test_split_partial_forms() {
        assert_eq!(split(".5").unwrap().fraction.as_slice(), &[5]);
        assert_eq!(split("3.").unwrap().integral, 3);
        assert_eq!(split("."), Err(NumericError::InvalidFormat));
        assert_eq!(split("-"), Err(NumericError::InvalidFormat));
        assert_eq!(split(""), Err(NumericError::InvalidFormat));
    }

    #[test]
    fn test_split_rejects_garbage() {
        for text in ["abc", "1.2.3", "--1", "1e5", "1 000", "1.-5", ",100"] {
            assert_eq!(split(text), Err(NumericError::InvalidFormat), "{text}");
        }
    }

    #[test]
    fn test_split_group_separators() {
        assert_eq!(split("1,234,567.5").unwrap().integral, 1_234_567);

        let no_groups = NumberStyle::NUMBER.with_thousands(false);
        assert_eq!(
            split_number("1,234", no_groups, &InvariantFormat),
            Err(NumericError::InvalidFormat)
        );
    }

    #[test]
    fn test_split_respects_style() {
        let bare = NumberStyle::NONE;
        assert_eq!(
            split_number(" 1", bare, &InvariantFormat),
            Err(NumericError::InvalidFormat)
        );
        assert_eq!(
            split_number("-1", bare, &InvariantFormat),
            Err(NumericError::InvalidFormat)
        );
        assert_eq!(
            split_number("1.5", NumberStyle::INTEGER, &InvariantFormat),
            Err(NumericError::InvalidFormat)
        );
    }

    #[test]
    fn test_split_locale() {
        let german = NumberFormatInfo::german();
        let parts = split_number("-1.234,5", NumberStyle::NUMBER, &german).unwrap();
        assert!(parts.negative);
        assert_eq!(parts.integral, 1234);
        assert_eq!(parts.fraction.as_slice(), &[5]);
    }

    #[test]
    fn test_split_integral_overflow() {
        let text = "9".repeat(40);
        assert_eq!(split(&text), Err(NumericError::Overflow));
    }

    #[test]
    fn test_scale_fraction_pads_and_rounds() {
        let even = MidpointRounding::ToEven;
        assert_eq!(scale_fraction(&[0, 5], 1000, 0, even, false), 50);
        assert_eq!(scale_fraction(&[], 1000, 0, even, false), 0);
        assert_eq!(scale_fraction(&[2, 3, 4, 5], 1000, 0, even, false), 234);
        assert_eq!(scale_fraction(&[2, 3, 5, 5], 1000, 0, even, false), 236);
        assert_eq!(scale_fraction(&[7], 1, 0, even, false), 1);
    }

    #[test]
    fn test_scale_fraction_tie_uses_integral_parity() {
        let even = MidpointRounding::ToEven;
        // 2.5 -> 2, 3.5 -> 4 at zero decimals
        assert_eq!(scale_fraction(&[5], 1, 2, even, false), 0);
        assert_eq!(scale_fraction(&[5], 1, 3, even, false), 1);
        // 0.45 -> 0.4 -> 0 (tie broken by the even integral digit)
        assert_eq!(scale_fraction(&[4, 5], 1, 0, even, false), 0);
    }

    #[test]
    fn test_scale_fraction_carry_into_unit() {
        let even = MidpointRounding::ToEven;
        assert_eq!(scale_fraction(&[9, 9, 9, 5], 1000, 0, even, false), 1000);
    }

    #[test]
    fn test_scale_fraction_is_sign_aware() {
        let down = MidpointRounding::ToNegativeInfinity;
        assert_eq!(scale_fraction(&[1, 2, 3, 4], 1000, 0, down, false), 123);
        assert_eq!(scale_fraction(&[1, 2, 3, 4], 1000, 0, down, true), 124);
    }

    #[test]
    fn test_format_magnitude() {
        let inv = InvariantFormat;
        assert_eq!(format_magnitude(1234, 1000, true, &inv), "-1.234");
        assert_eq!(format_magnitude(1000, 1000, false, &inv), "1");
        assert_eq!(format_magnitude(5, 1000, false, &inv), "0.005");
        assert_eq!(format_magnitude(1500, 1000, false, &inv), "1.500");
        assert_eq!(format_magnitude(42, 1, false, &inv), "42");
    }
}
