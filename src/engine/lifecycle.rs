//! Maker-authorized order lifecycle: approve and cancel.
//!
//! Lifecycle transitions are independent of fills. Approval puts the
//! maker's authorization on record so later fills need no signature;
//! cancellation is irreversible and dominates everything that follows.
//! Re-applying the current status is a success with no event, so replayed
//! lifecycle calls cannot duplicate the audit stream.

use tracing::{debug, info};

use crate::auth::SignerRecovery;
use crate::engine::{EngineEvent, SettlementEngine};
use crate::error::EngineError;
use crate::ledger::OrderStatus;
use crate::types::{AccountId, Order};

impl<R: SignerRecovery> SettlementEngine<R> {
    /// Record the maker's approval of an order.
    ///
    /// # Errors
    ///
    /// * `NotMaker` - the caller is not the order's maker
    /// * `AlreadyCanceled` - cancellation is terminal; it cannot be
    ///   approved over
    ///
    /// Approving an already-approved order is a no-op success with no
    /// event.
    pub fn approve(&mut self, order: &Order, caller: AccountId) -> Result<(), EngineError> {
        let order_id = self.order_id(order);

        if caller != order.maker {
            debug!(order = %order_id, %caller, "approval rejected: not maker");
            return Err(EngineError::NotMaker);
        }

        match self.ledger.status(&order_id) {
            OrderStatus::Canceled => {
                debug!(order = %order_id, "approval rejected: already canceled");
                Err(EngineError::AlreadyCanceled)
            }
            OrderStatus::Approved => Ok(()),
            OrderStatus::Open => {
                self.ledger.set_status(order_id, OrderStatus::Approved);
                self.events.push(EngineEvent::OrderApproved {
                    order_id,
                    approver: caller,
                });
                info!(order = %order_id, "order approved");
                Ok(())
            }
        }
    }

    /// Cancel an order, from any prior status.
    ///
    /// # Errors
    ///
    /// * `NotMaker` - the caller is not the order's maker
    ///
    /// Canceling an already-canceled order is a no-op success with no
    /// event. Cancellation is irreversible.
    pub fn cancel(&mut self, order: &Order, caller: AccountId) -> Result<(), EngineError> {
        let order_id = self.order_id(order);

        if caller != order.maker {
            debug!(order = %order_id, %caller, "cancellation rejected: not maker");
            return Err(EngineError::NotMaker);
        }

        match self.ledger.status(&order_id) {
            OrderStatus::Canceled => Ok(()),
            OrderStatus::Open | OrderStatus::Approved => {
                self.ledger.set_status(order_id, OrderStatus::Canceled);
                self.events.push(EngineEvent::OrderCanceled {
                    order_id,
                    canceler: caller,
                });
                info!(order = %order_id, "order canceled");
                Ok(())
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::EmbeddedRecovery;
    use crate::hash::HashDomain;
    use crate::types::OrderFlags;

    fn maker() -> AccountId {
        AccountId::from_low_u64(1)
    }

    fn engine() -> SettlementEngine<EmbeddedRecovery> {
        let venue = AccountId::from_low_u64(1000);
        let domain = HashDomain::new("settlecore", "1", 1, venue);
        SettlementEngine::new(domain, EmbeddedRecovery, venue)
    }

    fn order() -> Order {
        Order::new(
            OrderFlags::buy(),
            100_000_000,
            5_000_000_000_000,
            0,
            200_000,
            maker(),
            None,
            0,
            1,
        )
    }

    #[test]
    fn test_approve_sets_status_and_emits() {
        let mut engine = engine();
        let order = order();
        let id = engine.order_id(&order);

        engine.approve(&order, maker()).unwrap();

        assert_eq!(engine.ledger().status(&id), OrderStatus::Approved);
        assert_eq!(
            engine.drain_events(),
            vec![EngineEvent::OrderApproved {
                order_id: id,
                approver: maker(),
            }]
        );
    }

    #[test]
    fn test_approve_requires_maker() {
        let mut engine = engine();
        let order = order();

        assert_eq!(
            engine.approve(&order, AccountId::from_low_u64(9)),
            Err(EngineError::NotMaker)
        );
        assert!(engine.events().is_empty());
    }

    #[test]
    fn test_approve_is_idempotent_without_duplicate_events() {
        let mut engine = engine();
        let order = order();

        engine.approve(&order, maker()).unwrap();
        engine.approve(&order, maker()).unwrap();

        assert_eq!(engine.events().len(), 1);
    }

    #[test]
    fn test_approve_after_cancel_fails() {
        let mut engine = engine();
        let order = order();

        engine.cancel(&order, maker()).unwrap();

        assert_eq!(
            engine.approve(&order, maker()),
            Err(EngineError::AlreadyCanceled)
        );
    }

    #[test]
    fn test_cancel_sets_status_and_emits() {
        let mut engine = engine();
        let order = order();
        let id = engine.order_id(&order);

        engine.cancel(&order, maker()).unwrap();

        assert_eq!(engine.ledger().status(&id), OrderStatus::Canceled);
        assert_eq!(
            engine.drain_events(),
            vec![EngineEvent::OrderCanceled {
                order_id: id,
                canceler: maker(),
            }]
        );
    }

    #[test]
    fn test_cancel_requires_maker() {
        let mut engine = engine();
        let order = order();

        assert_eq!(
            engine.cancel(&order, AccountId::from_low_u64(9)),
            Err(EngineError::NotMaker)
        );
    }

    #[test]
    fn test_cancel_wins_over_approved() {
        let mut engine = engine();
        let order = order();
        let id = engine.order_id(&order);

        engine.approve(&order, maker()).unwrap();
        engine.cancel(&order, maker()).unwrap();

        assert_eq!(engine.ledger().status(&id), OrderStatus::Canceled);
    }

    #[test]
    fn test_cancel_is_idempotent_without_duplicate_events() {
        let mut engine = engine();
        let order = order();

        engine.cancel(&order, maker()).unwrap();
        engine.cancel(&order, maker()).unwrap();

        assert_eq!(engine.events().len(), 1);
    }
}
