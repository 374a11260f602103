//! Observable engine events for external indexers and auditors.
//!
//! Each successful mutating call emits exactly one event; failures and
//! idempotent no-op lifecycle calls emit none. Events accumulate on the
//! engine in emission order until drained.

use crate::hash::OrderId;
use crate::types::{AccountId, Fill, OrderFlags};

/// One observable state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// A fill was accepted and recorded
    OrderFilled {
        /// Canonical identity of the filled order
        order_id: OrderId,
        /// The order's boolean properties
        flags: OrderFlags,
        /// The order's trigger price (0 for none)
        trigger_price: u64,
        /// The accepted fill
        fill: Fill,
    },

    /// An order was approved on-record by its maker
    OrderApproved {
        /// Canonical identity of the approved order
        order_id: OrderId,
        /// The approving account
        approver: AccountId,
    },

    /// An order was canceled by its maker
    OrderCanceled {
        /// Canonical identity of the canceled order
        order_id: OrderId,
        /// The canceling account
        canceler: AccountId,
    },
}

impl EngineEvent {
    /// The order identity this event concerns
    pub fn order_id(&self) -> OrderId {
        match self {
            EngineEvent::OrderFilled { order_id, .. } => *order_id,
            EngineEvent::OrderApproved { order_id, .. } => *order_id,
            EngineEvent::OrderCanceled { order_id, .. } => *order_id,
        }
    }
}
