//! Fill type: one proposed execution against a standing order.
//!
//! A fill is transient. It is validated, settled, and forgotten; only its
//! cumulative effect on the order ledger (the filled amount) is retained.

// ============================================================================
// Fill struct
// ============================================================================

/// A single proposed execution against an order.
///
/// ## Fields
///
/// All values use fixed-point representation (scaled by 10^8). The fee is a
/// magnitude with its sign carried by `is_negative_fee`; a negative fee
/// means the taker pays the maker.
///
/// ## Example
///
/// ```
/// use settlecore::types::Fill;
///
/// // Fill 0.5 units at $50,000 with a 0.002 fee per unit
/// let fill = Fill::new(50_000_000, 5_000_000_000_000, 200_000, false);
/// assert_eq!(fill.amount, 50_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    /// Amount to execute, at most the order's remaining amount (fixed-point)
    pub amount: u64,

    /// Execution price in quote per unit (fixed-point)
    pub price: u64,

    /// Fee magnitude in quote per unit (fixed-point)
    pub fee: u64,

    /// Sign of the fee; true means the fee flows to the maker's side
    pub is_negative_fee: bool,
}

impl Fill {
    /// Create a new fill
    ///
    /// # Arguments
    ///
    /// * `amount` - Amount to execute (fixed-point)
    /// * `price` - Execution price (fixed-point)
    /// * `fee` - Fee magnitude (fixed-point)
    /// * `is_negative_fee` - Fee sign
    pub fn new(amount: u64, price: u64, fee: u64, is_negative_fee: bool) -> Self {
        Self {
            amount,
            price,
            fee,
            is_negative_fee,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_new() {
        let fill = Fill::new(50_000_000, 5_000_000_000_000, 200_000, true);

        assert_eq!(fill.amount, 50_000_000);
        assert_eq!(fill.price, 5_000_000_000_000);
        assert_eq!(fill.fee, 200_000);
        assert!(fill.is_negative_fee);
    }
}
