//! Fixed-point price, amount and fee utilities.
//!
//! ## Overview
//!
//! All prices, amounts and fee magnitudes in settlecore use fixed-point
//! representation to avoid floating-point errors. Values are stored as u64
//! scaled by 10^8.
//!
//! ## Why Fixed-Point?
//!
//! Floating-point arithmetic can produce different results on different
//! hardware. A settlement engine must be bit-for-bit reproducible: the same
//! (order, fill) pair must settle to the same margin amount on every replay.
//!
//! ## Rounding
//!
//! The one product the settlement path needs, amount x per-unit value, is
//! computed in widening u128 arithmetic and truncated (floored), never
//! rounded up. Rounding up would manufacture value out of thin air on every
//! fill.
//!
//! ## Examples
//!
//! ```
//! use settlecore::types::price::{to_fixed, from_fixed};
//!
//! let price = to_fixed("987.65432").unwrap();
//! assert_eq!(price, 98_765_432_000);
//! assert_eq!(from_fixed(price), "987.65432000");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point arithmetic: 10^8
///
/// This provides 8 decimal places of precision.
pub const SCALE: u64 = 100_000_000;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to fixed-point u64
///
/// # Arguments
///
/// * `s` - Decimal string (e.g., "987.65432")
///
/// # Returns
///
/// * `Some(u64)` - The fixed-point representation
/// * `None` - If parsing fails, the value is negative, or out of range
///
/// # Example
///
/// ```
/// use settlecore::types::price::to_fixed;
///
/// assert_eq!(to_fixed("1.0"), Some(100_000_000));
/// assert_eq!(to_fixed("0.0020"), Some(200_000));
/// assert_eq!(to_fixed("-1.0"), None);
/// ```
pub fn to_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a Decimal to fixed-point u64
///
/// Returns None if the value is negative or out of range.
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    let rounded = scaled.round_dp(0);
    rounded.to_u64()
}

/// Convert fixed-point u64 to a Decimal
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Convert fixed-point u64 to a string with 8 decimal places
///
/// # Example
///
/// ```
/// use settlecore::types::price::from_fixed;
///
/// assert_eq!(from_fixed(100_000_000), "1.00000000");
/// assert_eq!(from_fixed(98_765_432_000), "987.65432000");
/// ```
pub fn from_fixed(value: u64) -> String {
    let decimal = fixed_to_decimal(value);
    format!("{:.8}", decimal)
}

// ============================================================================
// Settlement Arithmetic
// ============================================================================

/// Multiply a fixed-point amount by a fixed-point per-unit value,
/// truncating toward zero.
///
/// The intermediate product is held in u128, so the operation never
/// overflows; the result is returned in fixed-point (scaled by 10^8) as
/// u128 because the notional of a large order can exceed u64.
///
/// # Arguments
///
/// * `amount` - Position amount (fixed-point)
/// * `per_unit` - Quote value per unit (fixed-point)
///
/// # Returns
///
/// `floor(amount * per_unit / SCALE)` in fixed-point
///
/// # Example
///
/// ```
/// use settlecore::types::price::mul_scaled_floor;
///
/// // 2.0 units at 1.5 quote per unit = 3.0 quote
/// assert_eq!(mul_scaled_floor(200_000_000, 150_000_000), 300_000_000);
///
/// // The smallest representable amount at 1.5 per unit floors to 1
/// assert_eq!(mul_scaled_floor(1, 150_000_000), 1);
/// ```
pub fn mul_scaled_floor(amount: u64, per_unit: u64) -> u128 {
    (amount as u128) * (per_unit as u128) / (SCALE as u128)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_constant() {
        assert_eq!(SCALE, 100_000_000);
    }

    #[test]
    fn test_to_fixed_basic() {
        assert_eq!(to_fixed("1.0"), Some(100_000_000));
        assert_eq!(to_fixed("1"), Some(100_000_000));
        assert_eq!(to_fixed("0.5"), Some(50_000_000));
        assert_eq!(to_fixed("0.00000001"), Some(1));
        assert_eq!(to_fixed("987.65432"), Some(98_765_432_000));
    }

    #[test]
    fn test_to_fixed_edge_cases() {
        assert_eq!(to_fixed("0"), Some(0));
        assert_eq!(to_fixed("0.0"), Some(0));

        // Negative values should return None
        assert_eq!(to_fixed("-1.0"), None);

        // Invalid strings should return None
        assert_eq!(to_fixed("abc"), None);
        assert_eq!(to_fixed(""), None);
    }

    #[test]
    fn test_from_fixed() {
        assert_eq!(from_fixed(100_000_000), "1.00000000");
        assert_eq!(from_fixed(50_000_000), "0.50000000");
        assert_eq!(from_fixed(1), "0.00000001");
        assert_eq!(from_fixed(0), "0.00000000");
    }

    #[test]
    fn test_roundtrip() {
        let values = ["1.0", "0.5", "50000.12345678", "0.00000001", "987.65432"];

        for s in values {
            let fixed = to_fixed(s).unwrap();
            let back = from_fixed(fixed);
            let original = Decimal::from_str(s).unwrap();
            let converted = Decimal::from_str(&back).unwrap();
            assert_eq!(original, converted, "Roundtrip failed for {}", s);
        }
    }

    #[test]
    fn test_mul_scaled_floor_exact() {
        // 2.0 * 1.5 = 3.0
        assert_eq!(mul_scaled_floor(200_000_000, 150_000_000), 300_000_000);

        // Anything times zero is zero
        assert_eq!(mul_scaled_floor(0, 150_000_000), 0);
        assert_eq!(mul_scaled_floor(200_000_000, 0), 0);
    }

    #[test]
    fn test_mul_scaled_floor_truncates() {
        // 0.00000001 * 1.5 = 0.000000015, floors to 0.00000001
        assert_eq!(mul_scaled_floor(1, 150_000_000), 1);

        // 0.00000003 * 0.33333333 floors to 0 (9.9999999e-9)
        assert_eq!(mul_scaled_floor(3, 33_333_333), 0);
    }

    #[test]
    fn test_mul_scaled_floor_no_overflow() {
        // u64::MAX * u64::MAX fits in the u128 intermediate
        let result = mul_scaled_floor(u64::MAX, u64::MAX);
        let expected = (u64::MAX as u128) * (u64::MAX as u128) / (SCALE as u128);
        assert_eq!(result, expected);
    }
}
