//! # settlecore
//!
//! Order-validation and settlement core for a peer-to-peer derivatives
//! venue.
//!
//! ## Architecture
//!
//! The core consists of:
//! - **Types**: Order, Fill, SettlementResult and fixed-point math
//! - **Hash**: canonical, domain-separated order identity
//! - **Auth**: signature authorization over an injected recovery backend
//! - **Ledger**: per-order cumulative fill and lifecycle state
//! - **Engine**: the fill validator, settlement calculator, and
//!   lifecycle manager
//!
//! ## Design Principles
//!
//! 1. **Determinism**: identical inputs settle identically on every
//!    replay; no randomness, no clocks, no floating point
//! 2. **No Floating Point**: all math uses fixed-point arithmetic
//!    (10^8 scaling) with truncating settlement products
//! 3. **All-or-Nothing Calls**: every entry point fully commits or fails
//!    with no state change
//! 4. **Replay Safety**: cumulative fill bookkeeping makes repeated or
//!    out-of-order submission converge on `Overfill`, never on double
//!    settlement

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Fill, SettlementResult, fixed-point math
pub mod types;

/// Canonical order identity: domain-separated hashing
pub mod hash;

/// Signature authorization over an injected recovery capability
pub mod auth;

/// Order ledger: status and cumulative filled amount per identity
pub mod ledger;

/// Settlement engine: fill validation, settlement, lifecycle
pub mod engine;

/// Categorical validation and lifecycle errors
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use auth::{EmbeddedRecovery, SignatureAuthority, SignerRecovery, SIGNATURE_LEN};
pub use engine::{EngineEvent, FillContext, PositionSnapshot, SettlementEngine};
pub use error::EngineError;
pub use hash::{HashDomain, OrderId};
pub use ledger::{LedgerEntry, OrderLedger, OrderStatus};
pub use types::{AccountId, Fill, Order, OrderFlags, SettlementResult, TRADE_FLAG_ORDER_ENGINE};
