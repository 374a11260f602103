//! Error categories for the settlement engine.
//!
//! Every error aborts the whole call with no ledger mutation. The engine
//! never retries internally; the calling layer decides whether to resubmit
//! with different parameters (a fresh reference price, a smaller amount).

use thiserror::Error;

/// Categorical, non-retryable validation and lifecycle errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The presenting caller is neither the venue authority nor the
    /// order's named taker
    #[error("caller is neither the venue authority nor the order's taker")]
    SenderMismatch,

    /// An open order was presented without a signature that recovers to
    /// its maker
    #[error("order is not approved and carries no valid maker signature")]
    InvalidSignature,

    /// The order has been canceled; cancellation is irreversible
    #[error("order has been canceled")]
    OrderCanceled,

    /// The order's maker does not match the presented maker
    #[error("order maker does not match the presented maker")]
    MakerMismatch,

    /// The order names a taker and it is not the presented taker
    #[error("order taker does not match the presented taker")]
    TakerMismatch,

    /// The order's expiration has passed
    #[error("order has expired")]
    OrderExpired,

    /// The fill price is worse than the order's limit price
    #[error("fill price violates the order's limit price")]
    InvalidFillPrice,

    /// The fill fee is worse than the order's limit fee
    #[error("fill fee violates the order's limit fee")]
    InvalidFillFee,

    /// The conditional order's trigger price has not been reached
    #[error("reference price has not reached the trigger price")]
    TriggerNotReached,

    /// A decrease-only fill would grow, flip, or act on a flat position
    #[error("fill violates the order's decrease-only constraint")]
    DecreaseOnlyViolation,

    /// The fill would push the cumulative filled amount past the order
    /// amount
    #[error("fill would exceed the order amount")]
    Overfill,

    /// A lifecycle call came from someone other than the order's maker
    #[error("only the order's maker may approve or cancel it")]
    NotMaker,

    /// Approval was attempted on an order that is already canceled
    #[error("order is already canceled")]
    AlreadyCanceled,

    /// The signature blob is not the expected length
    #[error("signature must be 65 bytes, got {0}")]
    InvalidSignatureEncoding(usize),
}
