// ============================================================================
// Rounding Modes
// Single-digit rounding policy shared by the signed and unsigned engines
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::RoundingStrategy;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Policy for resolving the digit dropped by a rounding step.
///
/// `ToEven` and `AwayFromZero` only differ from plain nearest-rounding at an
/// exact tie. `ToZero`, `ToNegativeInfinity` and `ToPositiveInfinity` are
/// directed: they ignore the size of the dropped digit.
///
/// | mode | <5 | =5 | >5 |
/// |---|---|---|---|
/// | `ToEven` | toward 0 | even neighbour | away from 0 |
/// | `AwayFromZero` | toward 0 | away from 0 | away from 0 |
/// | `ToZero` | toward 0 | toward 0 | toward 0 |
/// | `ToNegativeInfinity` | down | down | down |
/// | `ToPositiveInfinity` | up | up | up |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum MidpointRounding {
    /// Banker's rounding: ties go to the even neighbour
    #[default]
    ToEven = 0,
    /// Ties go away from zero
    AwayFromZero = 1,
    /// Truncation
    ToZero = 2,
    /// Floor at the rounded digit
    ToNegativeInfinity = 3,
    /// Ceiling at the rounded digit
    ToPositiveInfinity = 4,
}

impl MidpointRounding {
    /// All modes, in tag order.
    pub const ALL: [MidpointRounding; 5] = [
        MidpointRounding::ToEven,
        MidpointRounding::AwayFromZero,
        MidpointRounding::ToZero,
        MidpointRounding::ToNegativeInfinity,
        MidpointRounding::ToPositiveInfinity,
    ];

    /// Decide whether dropping `dropped` moves the remaining magnitude one
    /// unit away from zero.
    ///
    /// `kept` is the last digit that survives (only its parity matters) and
    /// `negative` is the sign of the value being rounded. Unsigned callers
    /// always pass `false`, which makes `ToNegativeInfinity` truncate.
    #[inline]
    pub(crate) fn rounds_away(self, kept: u8, dropped: u8, negative: bool) -> bool {
        if dropped == 0 {
            return false;
        }

        match self {
            MidpointRounding::ToEven => dropped > 5 || (dropped == 5 && kept % 2 == 1),
            MidpointRounding::AwayFromZero => dropped >= 5,
            MidpointRounding::ToZero => false,
            MidpointRounding::ToNegativeInfinity => negative,
            MidpointRounding::ToPositiveInfinity => !negative,
        }
    }

    /// Stable name used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            MidpointRounding::ToEven => "ToEven",
            MidpointRounding::AwayFromZero => "AwayFromZero",
            MidpointRounding::ToZero => "ToZero",
            MidpointRounding::ToNegativeInfinity => "ToNegativeInfinity",
            MidpointRounding::ToPositiveInfinity => "ToPositiveInfinity",
        }
    }
}

impl TryFrom<u8> for MidpointRounding {
    type Error = NumericError;

    fn try_from(tag: u8) -> NumericResult<Self> {
        Self::ALL
            .get(tag as usize)
            .copied()
            .ok_or(NumericError::InvalidRoundingMode(tag))
    }
}

impl From<MidpointRounding> for u8 {
    #[inline]
    fn from(mode: MidpointRounding) -> Self {
        mode as u8
    }
}

impl fmt::Display for MidpointRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MidpointRounding {
    type Err = NumericError;

    /// Accepts the variant name, case-insensitively, or its numeric tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(mode) = Self::ALL
            .iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
        {
            return Ok(*mode);
        }

        match s.parse::<u8>() {
            Ok(tag) => Self::try_from(tag),
            Err(_) => Err(NumericError::InvalidFormat),
        }
    }
}

// ============================================================================
// Conversion to rust_decimal (for API boundaries)
// ============================================================================

impl From<MidpointRounding> for RoundingStrategy {
    fn from(mode: MidpointRounding) -> Self {
        match mode {
            MidpointRounding::ToEven => RoundingStrategy::MidpointNearestEven,
            MidpointRounding::AwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            MidpointRounding::ToZero => RoundingStrategy::ToZero,
            MidpointRounding::ToNegativeInfinity => RoundingStrategy::ToNegativeInfinity,
            MidpointRounding::ToPositiveInfinity => RoundingStrategy::ToPositiveInfinity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_to_even() {
        assert_eq!(MidpointRounding::default(), MidpointRounding::ToEven);
    }

    #[test]
    fn test_try_from_tag() {
        for (tag, mode) in MidpointRounding::ALL.iter().enumerate() {
            assert_eq!(MidpointRounding::try_from(tag as u8), Ok(*mode));
            assert_eq!(u8::from(*mode), tag as u8);
        }
        assert_eq!(
            MidpointRounding::try_from(5),
            Err(NumericError::InvalidRoundingMode(5))
        );
        assert_eq!(
            MidpointRounding::try_from(255),
            Err(NumericError::InvalidRoundingMode(255))
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ToEven".parse(), Ok(MidpointRounding::ToEven));
        assert_eq!("awayfromzero".parse(), Ok(MidpointRounding::AwayFromZero));
        assert_eq!("4".parse(), Ok(MidpointRounding::ToPositiveInfinity));
        assert_eq!(
            "9".parse::<MidpointRounding>(),
            Err(NumericError::InvalidRoundingMode(9))
        );
        assert_eq!(
            "HalfUp".parse::<MidpointRounding>(),
            Err(NumericError::InvalidFormat)
        );
    }

    #[test]
    fn test_display_roundtrip() {
        for mode in MidpointRounding::ALL {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }

    #[test]
    fn test_rounds_away_table() {
        use MidpointRounding::*;

        // (mode, kept, dropped, negative, expected)
        let cases = [
            (ToEven, 2, 4, false, false),
            (ToEven, 2, 5, false, false),
            (ToEven, 1, 5, false, true),
            (ToEven, 2, 6, false, true),
            (AwayFromZero, 2, 4, false, false),
            (AwayFromZero, 2, 5, false, true),
            (AwayFromZero, 2, 5, true, true),
            (ToZero, 9, 9, false, false),
            (ToZero, 9, 9, true, false),
            (ToNegativeInfinity, 3, 1, false, false),
            (ToNegativeInfinity, 3, 1, true, true),
            (ToPositiveInfinity, 3, 1, false, true),
            (ToPositiveInfinity, 3, 1, true, false),
        ];

        for (mode, kept, dropped, negative, expected) in cases {
            assert_eq!(
                mode.rounds_away(kept, dropped, negative),
                expected,
                "{mode} kept={kept} dropped={dropped} negative={negative}"
            );
        }
    }

    #[test]
    fn test_zero_digit_never_rounds() {
        for mode in MidpointRounding::ALL {
            assert!(!mode.rounds_away(7, 0, false));
            assert!(!mode.rounds_away(7, 0, true));
        }
    }

    #[test]
    fn test_rounding_strategy_mapping() {
        assert_eq!(
            RoundingStrategy::from(MidpointRounding::ToEven),
            RoundingStrategy::MidpointNearestEven
        );
        assert_eq!(
            RoundingStrategy::from(MidpointRounding::ToPositiveInfinity),
            RoundingStrategy::ToPositiveInfinity
        );
    }
}
