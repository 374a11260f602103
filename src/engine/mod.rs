//! Settlement engine: fill validation, settlement, and order lifecycle.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: the same (order, fill, context) tuple always
//!    produces the same outcome
//! 2. **All-or-nothing**: a call either fully commits (ledger updated,
//!    one event emitted, result returned) or fails with no state change
//! 3. **Synchronous validation**: external context (current time,
//!    reference price, maker position) arrives as call inputs; the engine
//!    performs no I/O mid-validation
//! 4. **Single writer**: every mutating entry point takes `&mut self`,
//!    which linearizes all read-modify-write of ledger entries
//!
//! ## Control Flow
//!
//! The single-writer authority presents a candidate (order, fill,
//! signature, context) tuple. The engine computes the order's canonical
//! identity, consults the ledger for prior status and filled amount,
//! authorizes the order by signature when it has no recorded approval,
//! runs the fill checks in fixed order, and on success records the
//! increased filled amount and computes the settlement transfer. Approve
//! and cancel are invoked independently by the maker.
//!
//! ## Example
//!
//! ```
//! use settlecore::auth::EmbeddedRecovery;
//! use settlecore::engine::{FillContext, PositionSnapshot, SettlementEngine};
//! use settlecore::hash::HashDomain;
//! use settlecore::types::{AccountId, Fill, Order, OrderFlags};
//!
//! let venue = AccountId::from_low_u64(1000);
//! let maker = AccountId::from_low_u64(1);
//! let taker = AccountId::from_low_u64(2);
//!
//! let domain = HashDomain::new("settlecore", "1", 1, venue);
//! let mut engine = SettlementEngine::new(domain, EmbeddedRecovery, venue);
//!
//! let order = Order::new(
//!     OrderFlags::buy(),
//!     100_000_000,            // 1.0 unit
//!     5_000_000_000_000,      // limit 50000.0
//!     0,
//!     200_000,                // limit fee 0.002
//!     maker,
//!     Some(taker),
//!     0,
//!     1,
//! );
//! let fill = Fill::new(100_000_000, 5_000_000_000_000, 200_000, false);
//! let signature = EmbeddedRecovery::sign(maker);
//!
//! let ctx = FillContext {
//!     caller: venue,
//!     maker,
//!     taker,
//!     current_time: 1_700_000_000,
//!     reference_price: 5_000_000_000_000,
//!     maker_position: PositionSnapshot::flat(),
//! };
//!
//! let result = engine.submit_fill(&order, &fill, Some(&signature), &ctx).unwrap();
//! assert_eq!(result.position_amount, 100_000_000);
//! ```

pub mod events;

mod fills;
mod lifecycle;

pub use events::EngineEvent;

use crate::auth::{SignatureAuthority, SignerRecovery};
use crate::hash::{HashDomain, OrderId};
use crate::ledger::{OrderLedger, OrderStatus};
use crate::types::{AccountId, Order};

// ============================================================================
// External context
// ============================================================================

/// A maker's current position as reported by the external position
/// oracle: magnitude plus sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionSnapshot {
    /// Absolute position size (fixed-point)
    pub magnitude: u64,

    /// True for a long position, false for a short
    pub is_positive: bool,
}

impl PositionSnapshot {
    /// A flat (zero) position
    pub fn flat() -> Self {
        Self {
            magnitude: 0,
            is_positive: true,
        }
    }

    /// A long position of the given magnitude
    pub fn long(magnitude: u64) -> Self {
        Self {
            magnitude,
            is_positive: true,
        }
    }

    /// A short position of the given magnitude
    pub fn short(magnitude: u64) -> Self {
        Self {
            magnitude,
            is_positive: false,
        }
    }
}

/// Externally verified context for one fill submission.
///
/// The single-writer authority authenticates the parties and snapshots
/// the oracle values before the call; the engine never fetches them
/// itself.
#[derive(Debug, Clone, Copy)]
pub struct FillContext {
    /// The account presenting the fill
    pub caller: AccountId,

    /// The maker the caller claims to settle against
    pub maker: AccountId,

    /// The taker the caller claims to settle for
    pub taker: AccountId,

    /// Current Unix timestamp
    pub current_time: u64,

    /// Reference price for trigger evaluation (fixed-point)
    pub reference_price: u64,

    /// The maker's current position, for decrease-only enforcement
    pub maker_position: PositionSnapshot,
}

// ============================================================================
// SettlementEngine
// ============================================================================

/// The order-validation and settlement core.
///
/// Owns the order ledger (its only durable state) and the event stream.
/// Constructed with a hashing domain, a signature-recovery backend, and
/// the identity of the trusted single-writer authority.
pub struct SettlementEngine<R: SignerRecovery> {
    domain: HashDomain,
    signatures: SignatureAuthority<R>,
    authority: AccountId,
    ledger: OrderLedger,
    events: Vec<EngineEvent>,
}

impl<R: SignerRecovery> SettlementEngine<R> {
    /// Create an engine
    ///
    /// # Arguments
    ///
    /// * `domain` - Hashing domain binding identities to this deployment
    /// * `recovery` - Signature recovery backend
    /// * `authority` - The trusted single-writer authority; the only
    ///   caller besides an order's named taker that may present fills
    pub fn new(domain: HashDomain, recovery: R, authority: AccountId) -> Self {
        Self::with_ledger(domain, recovery, authority, OrderLedger::new())
    }

    /// Create an engine over an existing ledger.
    ///
    /// The ledger is the engine's only durable state; restoring a
    /// persisted one resumes every order exactly where it left off.
    pub fn with_ledger(
        domain: HashDomain,
        recovery: R,
        authority: AccountId,
        ledger: OrderLedger,
    ) -> Self {
        Self {
            domain,
            signatures: SignatureAuthority::new(recovery),
            authority,
            ledger,
            events: Vec::new(),
        }
    }

    /// Canonical identity of an order under this engine's domain
    #[inline]
    pub fn order_id(&self, order: &Order) -> OrderId {
        self.domain.order_id(order)
    }

    /// Read access to the ledger
    #[inline]
    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    /// Status and cumulative filled amount for a batch of order
    /// identities
    pub fn query_status(&self, ids: &[OrderId]) -> Vec<(OrderStatus, u64)> {
        ids.iter()
            .map(|id| {
                let entry = self.ledger.entry(id);
                (entry.status, entry.filled_amount)
            })
            .collect()
    }

    /// Events emitted since the last drain, in emission order
    #[inline]
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    /// Take all accumulated events, leaving the stream empty
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
