// ============================================================================
// Scaled Arithmetic Library
// Fixed-point decimal arithmetic on raw scaled integers
// ============================================================================

//! # Scaled Arithmetic
//!
//! Decimal-like arithmetic on plain `i64` / `u64` values that carry an
//! implicit power-of-ten scaling factor (`raw = value × scaling_factor`).
//!
//! ## Features
//!
//! - **Widened multiply / divide** through 128-bit intermediates
//! - **Floor, ceiling and five rounding modes** on the last decimal digit
//! - **Locale-aware formatting and parsing** with checked overflow
//! - **`FixedDecimal<D>`** typed wrapper with checked operators
//! - **`DecimalContext`** bundling scale, rounding and locale
//!
//! ## Example
//!
//! ```rust
//! use scaled_arithmetic::prelude::*;
//!
//! // Three decimals: 1.5 is stored as 1500
//! let price = 1500i64;
//! let quantity = 2250i64;
//!
//! let total = ScaledArithmetic::multiply(price, quantity, 1000);
//! assert_eq!(total, 3375);
//! assert_eq!(ScaledArithmetic::format(total, 1000, &InvariantFormat), "3.375");
//!
//! // Round away the last digit
//! assert_eq!(ScaledArithmetic::round(total, MidpointRounding::ToEven), 3380);
//!
//! // Parse German-style text
//! let ctx = DecimalContext::european(3);
//! assert_eq!(ctx.parse::<i64>("-1.234,5678"), Ok(-1_234_568));
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{DecimalContext, NumberFormatInfo, NumberStyle};
    pub use crate::interfaces::{FormatProvider, InvariantFormat};
    pub use crate::numeric::{
        FixedDecimal, MidpointRounding, Money, Nano, NumericError, NumericResult,
        ScaledArithmetic, ScaledInteger,
    };
}
