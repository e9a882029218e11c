// ============================================================================
// Numeric Module
// Scaled fixed-point arithmetic on raw 64-bit integers
// ============================================================================
//
// This module provides:
// - ScaledArithmetic: stateless engine facade (multiply, divide, floor,
//   ceiling, rounding, locale-aware formatting and parsing)
// - ScaledInteger: the capability trait, implemented for i64 and u64
// - MidpointRounding: the five rounding modes
// - FixedDecimal<D>: typed wrapper with compile-time precision
// - NumericError: error types for parsing and checked operations
//
// Design principles:
// - No floating-point operations
// - 128-bit intermediates for products
// - Multiply wraps on overflow; parsing reports it

mod errors;
mod fixed_decimal;
mod rounding;
mod scaled;
mod signed;
mod text;
mod unsigned;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{FixedDecimal, Money, Nano};
pub use rounding::MidpointRounding;
pub use scaled::{ScaledArithmetic, ScaledInteger};
