//! Core data types for settlecore
//!
//! All numeric values use fixed-point representation (scaled by 10^8).
//!
//! ## Types
//!
//! - [`Order`]: a maker's signed, immutable trading intent
//! - [`OrderFlags`]: the order's three boolean properties
//! - [`AccountId`]: 32-byte opaque identity
//! - [`Fill`]: one proposed execution against an order
//! - [`SettlementResult`]: margin transfer and position delta of a fill
//!
//! ## Fixed-Point Arithmetic
//!
//! All prices, amounts and fee magnitudes are stored as `u64` scaled by
//! 10^8. Example: 987.65432 is stored as 98_765_432_000u64.

mod fill;
mod order;
mod settlement;
pub mod price;

// Re-export all types at module level
pub use fill::Fill;
pub use order::{
    AccountId, Order, OrderFlags, FLAG_IS_BUY, FLAG_IS_DECREASE_ONLY, FLAG_IS_NEGATIVE_LIMIT_FEE,
};
pub use settlement::{SettlementResult, TRADE_FLAG_ORDER_ENGINE};
