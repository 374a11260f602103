//! Fill validation and settlement.
//!
//! ## Check Order
//!
//! The checks run in a fixed order; the first failure aborts the call.
//! Checks 1-8 are pure reads, only the final overfill check writes, so a
//! rejected fill leaves no trace in the ledger:
//!
//! 1. caller authorization (venue authority or the order's named taker)
//! 2. ledger status, with signature authorization for open orders
//! 3. counterparty match (maker, and taker unless wildcard)
//! 4. expiration
//! 5. price bound (at-or-better than the limit, never worse)
//! 6. fee bound (favorable fees always pass)
//! 7. trigger activation against the reference price
//! 8. decrease-only against the maker position snapshot
//! 9. overfill: commit the cumulative filled amount

use tracing::{debug, info};

use crate::auth::SignerRecovery;
use crate::engine::{EngineEvent, FillContext, PositionSnapshot, SettlementEngine};
use crate::error::EngineError;
use crate::hash::OrderId;
use crate::ledger::OrderStatus;
use crate::types::{Fill, Order, SettlementResult};

impl<R: SignerRecovery> SettlementEngine<R> {
    /// Validate a fill against an order and, on success, record it and
    /// return the settlement transfer.
    ///
    /// # Arguments
    ///
    /// * `order` - The standing order
    /// * `fill` - The proposed execution
    /// * `signature` - Maker signature over the order's canonical
    ///   identity; ignored when the order is already approved on-record
    /// * `ctx` - Externally verified call context
    ///
    /// # Errors
    ///
    /// One categorical [`EngineError`] per violated rule; the ledger is
    /// untouched on every error path. Resubmitting an identical
    /// successful fill eventually fails with `Overfill` once the order is
    /// fully consumed.
    pub fn submit_fill(
        &mut self,
        order: &Order,
        fill: &Fill,
        signature: Option<&[u8]>,
        ctx: &FillContext,
    ) -> Result<SettlementResult, EngineError> {
        let order_id = self.order_id(order);

        match self.apply_fill(order_id, order, fill, signature, ctx) {
            Ok(total_filled) => {
                let result = SettlementResult::from_fill(order, fill);
                self.events.push(EngineEvent::OrderFilled {
                    order_id,
                    flags: order.flags,
                    trigger_price: order.trigger_price,
                    fill: *fill,
                });
                info!(
                    order = %order_id,
                    amount = fill.amount,
                    price = fill.price,
                    total_filled,
                    "order filled"
                );
                Ok(result)
            }
            Err(err) => {
                debug!(order = %order_id, %err, "fill rejected");
                Err(err)
            }
        }
    }

    /// Run the nine checks; the final one commits the filled amount and
    /// returns the new cumulative total.
    fn apply_fill(
        &mut self,
        order_id: OrderId,
        order: &Order,
        fill: &Fill,
        signature: Option<&[u8]>,
        ctx: &FillContext,
    ) -> Result<u64, EngineError> {
        // 1. Caller authorization
        if ctx.caller != self.authority && order.taker != Some(ctx.caller) {
            return Err(EngineError::SenderMismatch);
        }

        // 2. Ledger status; open orders need a maker signature, approved
        //    orders substitute status for it
        match self.ledger.status(&order_id) {
            OrderStatus::Canceled => return Err(EngineError::OrderCanceled),
            OrderStatus::Approved => {}
            OrderStatus::Open => {
                let raw = signature.ok_or(EngineError::InvalidSignature)?;
                if !self.signatures.authorize(order, order_id.0, raw)? {
                    return Err(EngineError::InvalidSignature);
                }
            }
        }

        // 3. Counterparty match
        if order.maker != ctx.maker {
            return Err(EngineError::MakerMismatch);
        }
        if let Some(taker) = order.taker {
            if taker != ctx.taker {
                return Err(EngineError::TakerMismatch);
            }
        }

        // 4. Expiration
        if order.is_expired_at(ctx.current_time) {
            return Err(EngineError::OrderExpired);
        }

        // 5-8. Pure fill constraints
        check_fill_price(order, fill)?;
        check_fill_fee(order, fill)?;
        check_trigger(order, ctx.reference_price)?;
        check_decrease_only(order, fill, &ctx.maker_position)?;

        // 9. Overfill; the single mutation of the call
        self.ledger.record_fill(order_id, fill.amount, order.amount)
    }
}

// ============================================================================
// Pure fill constraints
// ============================================================================

/// The fill may execute at-or-better than the limit price, never worse.
fn check_fill_price(order: &Order, fill: &Fill) -> Result<(), EngineError> {
    let within_limit = if order.is_buy() {
        fill.price <= order.limit_price
    } else {
        fill.price >= order.limit_price
    };

    if within_limit {
        Ok(())
    } else {
        Err(EngineError::InvalidFillPrice)
    }
}

/// A negative limit fee demands a negative fill fee of at least that
/// magnitude; a non-negative limit accepts any negative fee, or a
/// non-negative fee up to the limit.
fn check_fill_fee(order: &Order, fill: &Fill) -> Result<(), EngineError> {
    let within_limit = if order.is_negative_limit_fee() {
        fill.is_negative_fee && fill.fee >= order.limit_fee
    } else {
        fill.is_negative_fee || fill.fee <= order.limit_fee
    };

    if within_limit {
        Ok(())
    } else {
        Err(EngineError::InvalidFillFee)
    }
}

/// A conditional order activates only once the reference price reaches
/// its trigger: at-or-above for a buy, at-or-below for a sell.
fn check_trigger(order: &Order, reference_price: u64) -> Result<(), EngineError> {
    if !order.has_trigger() {
        return Ok(());
    }

    let triggered = if order.is_buy() {
        order.trigger_price <= reference_price
    } else {
        order.trigger_price >= reference_price
    };

    if triggered {
        Ok(())
    } else {
        Err(EngineError::TriggerNotReached)
    }
}

/// A decrease-only fill must shrink an existing position on the opposite
/// side of the order's direction. A flat position fails either direction.
fn check_decrease_only(
    order: &Order,
    fill: &Fill,
    position: &PositionSnapshot,
) -> Result<(), EngineError> {
    if !order.is_decrease_only() {
        return Ok(());
    }

    let opposite_side = if order.is_buy() {
        !position.is_positive
    } else {
        position.is_positive
    };

    if position.magnitude > 0 && opposite_side && fill.amount <= position.magnitude {
        Ok(())
    } else {
        Err(EngineError::DecreaseOnlyViolation)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
