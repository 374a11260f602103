//! Order ledger: the engine's only durable state.
//!
//! ## Layout
//!
//! One entry per canonical order identity, holding the order's lifecycle
//! status and its cumulative filled amount. Entries are created lazily
//! (absence reads as open and unfilled) and never deleted.
//!
//! ## Invariants
//!
//! - `filled_amount` is monotonically non-decreasing and never exceeds the
//!   cap passed to `record_fill`
//! - status only moves open -> approved, open -> canceled,
//!   approved -> canceled; approved and canceled are terminal apart from
//!   idempotent re-application
//! - a failed `record_fill` mutates nothing

use std::collections::HashMap;

use crate::error::EngineError;
use crate::hash::OrderId;

// ============================================================================
// OrderStatus
// ============================================================================

/// Lifecycle status of an order identity.
///
/// Represented as u8 for compact external encoding:
/// - Open = 0
/// - Approved = 1
/// - Canceled = 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    /// No lifecycle action recorded; fills require a maker signature
    #[default]
    Open,
    /// Maker approved on-record; fills need no signature
    Approved,
    /// Maker canceled; no further fills or approvals, ever
    Canceled,
}

impl OrderStatus {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            OrderStatus::Open => 0,
            OrderStatus::Approved => 1,
            OrderStatus::Canceled => 2,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(OrderStatus::Open),
            1 => Some(OrderStatus::Approved),
            2 => Some(OrderStatus::Canceled),
            _ => None,
        }
    }
}

// ============================================================================
// LedgerEntry
// ============================================================================

/// Per-order persistent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerEntry {
    /// Lifecycle status
    pub status: OrderStatus,

    /// Cumulative filled amount (fixed-point); never decreases
    pub filled_amount: u64,
}

// ============================================================================
// OrderLedger
// ============================================================================

/// Mapping from canonical order identity to ledger entry.
///
/// The ledger performs no validation beyond the overfill cap; the
/// settlement engine is its only mutator.
#[derive(Debug, Default)]
pub struct OrderLedger {
    entries: HashMap<OrderId, LedgerEntry>,
}

impl OrderLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a ledger with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Number of materialized entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been materialized yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current status of an order identity (lazily Open)
    #[inline]
    pub fn status(&self, id: &OrderId) -> OrderStatus {
        self.entry(id).status
    }

    /// Cumulative filled amount of an order identity (lazily 0)
    #[inline]
    pub fn filled_amount(&self, id: &OrderId) -> u64 {
        self.entry(id).filled_amount
    }

    /// Full entry for an order identity (lazily default)
    #[inline]
    pub fn entry(&self, id: &OrderId) -> LedgerEntry {
        self.entries.get(id).copied().unwrap_or_default()
    }

    /// Record a fill against an order identity.
    ///
    /// # Arguments
    ///
    /// * `id` - Canonical order identity
    /// * `amount` - Fill amount to add (fixed-point)
    /// * `cap` - The order's total amount; the cumulative bound
    ///
    /// # Returns
    ///
    /// The new cumulative filled amount, or `Overfill` if it would exceed
    /// the cap. On error nothing is written.
    pub fn record_fill(&mut self, id: OrderId, amount: u64, cap: u64) -> Result<u64, EngineError> {
        let current = self.filled_amount(&id);
        let new_total = current.checked_add(amount).ok_or(EngineError::Overfill)?;
        if new_total > cap {
            return Err(EngineError::Overfill);
        }

        self.entries.entry(id).or_default().filled_amount = new_total;
        Ok(new_total)
    }

    /// Overwrite the status of an order identity.
    ///
    /// Transition legality (who may move what to what) is the lifecycle
    /// layer's responsibility.
    pub fn set_status(&mut self, id: OrderId, status: OrderStatus) {
        self.entries.entry(id).or_default().status = status;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
