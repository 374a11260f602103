//! Settlement result derived from an accepted fill.
//!
//! The result is a pure function of (order, fill). It is returned to the
//! caller and never stored: the only durable effect of a fill is the
//! ledger's cumulative filled amount.
//!
//! ## Perspective
//!
//! The result is expressed from the counterparty's point of view, so its
//! direction flag is the opposite of the order's. A buy order settles as a
//! sell-side delta for the party on the other side.

use crate::types::price::mul_scaled_floor;
use crate::types::{Fill, Order};

/// Capability flag marking a trade authorized through the order engine.
///
/// Downstream accounting distinguishes trade paths by this flag; it is
/// opaque to the engine itself.
pub const TRADE_FLAG_ORDER_ENGINE: u32 = 1;

// ============================================================================
// SettlementResult
// ============================================================================

/// The margin transfer and position delta produced by one accepted fill.
///
/// ## Margin Math
///
/// The per-unit margin nets the fee against the price in the direction
/// that matches who is paying whom:
///
/// - buying while being paid a fee, or selling while paying one, reduces
///   the margin owed: `per_unit = price - fee`
/// - the other two combinations increase it: `per_unit = price + fee`
///
/// `margin_amount = floor(amount * per_unit)` in fixed-point, truncated so
/// that rounding never creates value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementResult {
    /// Margin to transfer, in fixed-point quote units (scaled by 10^8).
    /// Held as u128 because a large order's notional exceeds u64.
    pub margin_amount: u128,

    /// Position delta magnitude; equals the fill amount (fixed-point)
    pub position_amount: u64,

    /// Direction of the counterparty's delta: opposite of the order's
    pub is_buy: bool,

    /// Capability flags for downstream accounting
    pub trader_flags: u32,
}

impl SettlementResult {
    /// Compute the settlement for an accepted fill.
    ///
    /// Pure function; call only after the fill has passed validation.
    ///
    /// # Example
    ///
    /// ```
    /// use settlecore::types::{AccountId, Fill, Order, OrderFlags, SettlementResult};
    ///
    /// let order = Order::new(
    ///     OrderFlags::buy(),
    ///     100_000_000,            // 1.0 unit
    ///     5_000_000_000_000,      // limit 50000.0
    ///     0,
    ///     200_000,                // limit fee 0.002
    ///     AccountId::from_low_u64(1),
    ///     None,
    ///     0,
    ///     0,
    /// );
    /// let fill = Fill::new(100_000_000, 5_000_000_000_000, 200_000, false);
    ///
    /// let result = SettlementResult::from_fill(&order, &fill);
    /// // 1.0 * (50000.0 + 0.002) = 50000.002
    /// assert_eq!(result.margin_amount, 5_000_000_200_000);
    /// assert!(!result.is_buy); // counterparty side of a buy
    /// ```
    pub fn from_fill(order: &Order, fill: &Fill) -> Self {
        let fee_reduces_margin = order.is_buy() == fill.is_negative_fee;
        let per_unit = if fee_reduces_margin {
            fill.price.saturating_sub(fill.fee)
        } else {
            fill.price.saturating_add(fill.fee)
        };

        Self {
            margin_amount: mul_scaled_floor(fill.amount, per_unit),
            position_amount: fill.amount,
            is_buy: !order.is_buy(),
            trader_flags: TRADE_FLAG_ORDER_ENGINE,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountId, OrderFlags};

    fn order_with_flags(flags: OrderFlags) -> Order {
        Order::new(
            flags,
            100_000_000,
            5_000_000_000_000,
            0,
            200_000,
            AccountId::from_low_u64(1),
            None,
            0,
            0,
        )
    }

    #[test]
    fn test_buy_positive_fee_adds() {
        let order = order_with_flags(OrderFlags::buy());
        let fill = Fill::new(100_000_000, 5_000_000_000_000, 200_000, false);

        let result = SettlementResult::from_fill(&order, &fill);
        // 1.0 * (50000.0 + 0.002)
        assert_eq!(result.margin_amount, 5_000_000_200_000);
    }

    #[test]
    fn test_buy_negative_fee_subtracts() {
        let order = order_with_flags(OrderFlags::buy());
        let fill = Fill::new(100_000_000, 5_000_000_000_000, 200_000, true);

        let result = SettlementResult::from_fill(&order, &fill);
        // 1.0 * (50000.0 - 0.002)
        assert_eq!(result.margin_amount, 4_999_999_800_000);
    }

    #[test]
    fn test_sell_positive_fee_subtracts() {
        let order = order_with_flags(OrderFlags::sell());
        let fill = Fill::new(100_000_000, 5_000_000_000_000, 200_000, false);

        let result = SettlementResult::from_fill(&order, &fill);
        assert_eq!(result.margin_amount, 4_999_999_800_000);
    }

    #[test]
    fn test_sell_negative_fee_adds() {
        let order = order_with_flags(OrderFlags::sell());
        let fill = Fill::new(100_000_000, 5_000_000_000_000, 200_000, true);

        let result = SettlementResult::from_fill(&order, &fill);
        assert_eq!(result.margin_amount, 5_000_000_200_000);
    }

    #[test]
    fn test_margin_truncates_never_rounds_up() {
        let order = order_with_flags(OrderFlags::buy());
        // 0.00000003 units at 0.33333333 per unit: true product is
        // 9.9999999e-9, which must floor to zero
        let fill = Fill::new(3, 33_333_333, 0, false);

        let result = SettlementResult::from_fill(&order, &fill);
        assert_eq!(result.margin_amount, 0);
    }

    #[test]
    fn test_direction_is_counterparty_side() {
        let buy = order_with_flags(OrderFlags::buy());
        let sell = order_with_flags(OrderFlags::sell());
        let fill = Fill::new(100_000_000, 5_000_000_000_000, 0, false);

        assert!(!SettlementResult::from_fill(&buy, &fill).is_buy);
        assert!(SettlementResult::from_fill(&sell, &fill).is_buy);
    }

    #[test]
    fn test_position_amount_and_flags() {
        let order = order_with_flags(OrderFlags::buy());
        let fill = Fill::new(75_000_000, 5_000_000_000_000, 0, false);

        let result = SettlementResult::from_fill(&order, &fill);
        assert_eq!(result.position_amount, 75_000_000);
        assert_eq!(result.trader_flags, TRADE_FLAG_ORDER_ENGINE);
    }

    #[test]
    fn test_fee_never_underflows_price() {
        let order = order_with_flags(OrderFlags::buy());
        // Fee magnitude larger than the price on the subtractive side
        let fill = Fill::new(100_000_000, 100, 200, true);

        let result = SettlementResult::from_fill(&order, &fill);
        assert_eq!(result.margin_amount, 0);
    }
}
