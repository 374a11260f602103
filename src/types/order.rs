//! Order types for the settlecore validation engine.
//!
//! ## Off-Channel Orders
//!
//! An [`Order`] is a maker's standing, signed intent. It is agreed between
//! two counterparties away from the venue and only touches the core when a
//! fill is submitted against it. Orders are immutable once created; all
//! mutable state (cumulative filled amount, lifecycle status) lives in the
//! order ledger, keyed by the order's canonical identity.
//!
//! ## Fixed-Point Representation
//!
//! Amounts, prices and fee magnitudes are stored as u64 scaled by 10^8
//! (SCALE constant). This provides 8 decimal places of precision without
//! floating-point errors.

use std::fmt;

// ============================================================================
// AccountId
// ============================================================================

/// A 32-byte account identity.
///
/// The core never interprets identities; it only compares them. How an
/// identity maps to a key pair is the signing layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    /// Build an identity from a small integer, big-endian in the low bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use settlecore::types::AccountId;
    ///
    /// let id = AccountId::from_low_u64(7);
    /// assert_eq!(id.0[31], 7);
    /// assert_eq!(id.0[0], 0);
    /// ```
    pub fn from_low_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        AccountId(bytes)
    }

    /// Raw bytes of the identity
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex encoding of the identity
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

// ============================================================================
// OrderFlags
// ============================================================================

/// Flag bit for a buy order (bit 0 of the packed byte)
pub const FLAG_IS_BUY: u8 = 0b001;

/// Flag bit for a decrease-only order (bit 1 of the packed byte)
pub const FLAG_IS_DECREASE_ONLY: u8 = 0b010;

/// Flag bit for a negative limit fee (bit 2 of the packed byte)
pub const FLAG_IS_NEGATIVE_LIMIT_FEE: u8 = 0b100;

/// The three independent boolean properties of an order.
///
/// The flags are carried as named booleans in the public API, and packed
/// into a single byte with stable bit positions only at the canonical-hash
/// boundary. The bit layout is part of the order's identity and must never
/// change:
///
/// - bit 0: `is_buy`
/// - bit 1: `is_decrease_only`
/// - bit 2: `is_negative_limit_fee`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrderFlags {
    /// Buy (true) or sell (false)
    pub is_buy: bool,

    /// Fills may only reduce the maker's existing position
    pub is_decrease_only: bool,

    /// The limit fee is negative: the maker demands to be paid
    pub is_negative_limit_fee: bool,
}

impl OrderFlags {
    /// Create a flag set
    pub fn new(is_buy: bool, is_decrease_only: bool, is_negative_limit_fee: bool) -> Self {
        Self {
            is_buy,
            is_decrease_only,
            is_negative_limit_fee,
        }
    }

    /// Flags for a plain buy order
    pub fn buy() -> Self {
        Self::new(true, false, false)
    }

    /// Flags for a plain sell order
    pub fn sell() -> Self {
        Self::new(false, false, false)
    }

    /// Pack the flags into a single byte with stable bit positions.
    ///
    /// This byte participates in the canonical order hash, so the bit
    /// assignment is frozen.
    ///
    /// # Example
    ///
    /// ```
    /// use settlecore::types::OrderFlags;
    ///
    /// assert_eq!(OrderFlags::buy().to_byte(), 0b001);
    /// assert_eq!(OrderFlags::new(false, true, true).to_byte(), 0b110);
    /// ```
    pub fn to_byte(self) -> u8 {
        let mut byte = 0u8;
        if self.is_buy {
            byte |= FLAG_IS_BUY;
        }
        if self.is_decrease_only {
            byte |= FLAG_IS_DECREASE_ONLY;
        }
        if self.is_negative_limit_fee {
            byte |= FLAG_IS_NEGATIVE_LIMIT_FEE;
        }
        byte
    }

    /// Unpack a flag byte. Returns None if unknown bits are set.
    pub fn from_byte(byte: u8) -> Option<Self> {
        if byte & !(FLAG_IS_BUY | FLAG_IS_DECREASE_ONLY | FLAG_IS_NEGATIVE_LIMIT_FEE) != 0 {
            return None;
        }
        Some(Self {
            is_buy: byte & FLAG_IS_BUY != 0,
            is_decrease_only: byte & FLAG_IS_DECREASE_ONLY != 0,
            is_negative_limit_fee: byte & FLAG_IS_NEGATIVE_LIMIT_FEE != 0,
        })
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A maker's signed intent to trade.
///
/// ## Fields
///
/// All amount/price/fee fields use fixed-point representation (scaled by
/// 10^8). The limit fee is a magnitude; its sign is carried by
/// `flags.is_negative_limit_fee`.
///
/// ## Sentinels
///
/// - `trigger_price == 0`: no trigger, the order is always active
/// - `taker == None`: fillable by anyone
/// - `expiration == 0`: never expires
///
/// ## Example
///
/// ```
/// use settlecore::types::{AccountId, Order, OrderFlags};
///
/// // Buy 1 unit at up to $50,000, paying at most a 0.002 fee per unit
/// let order = Order::new(
///     OrderFlags::buy(),
///     100_000_000,            // amount: 1.00000000
///     5_000_000_000_000,      // limit price: 50000.00000000
///     0,                      // no trigger
///     200_000,                // limit fee: 0.00200000
///     AccountId::from_low_u64(1),
///     None,                   // any taker
///     0,                      // never expires
///     42,                     // salt
/// );
/// assert!(order.is_buy());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    /// The three boolean order properties
    pub flags: OrderFlags,

    /// Total order amount in position units (fixed-point, scaled by 10^8)
    pub amount: u64,

    /// Limit price in quote per unit (fixed-point, scaled by 10^8)
    pub limit_price: u64,

    /// Trigger price; 0 means the order is unconditionally active
    pub trigger_price: u64,

    /// Limit fee magnitude (fixed-point); sign carried by the flags
    pub limit_fee: u64,

    /// The party whose signature stands behind this order
    pub maker: AccountId,

    /// The only party allowed to fill, or None for anyone
    pub taker: Option<AccountId>,

    /// Unix timestamp after which the order is dead; 0 means never
    pub expiration: u64,

    /// Uniqueness salt; part of the canonical identity
    pub salt: u64,
}

impl Order {
    /// Create a new order
    ///
    /// # Arguments
    ///
    /// * `flags` - Buy/sell, decrease-only, negative-limit-fee
    /// * `amount` - Total amount in position units (fixed-point)
    /// * `limit_price` - Worst acceptable price (fixed-point)
    /// * `trigger_price` - Activation threshold, 0 for none (fixed-point)
    /// * `limit_fee` - Fee bound magnitude (fixed-point)
    /// * `maker` - Signing party
    /// * `taker` - Named counterparty, or None for anyone
    /// * `expiration` - Unix timestamp, 0 for never
    /// * `salt` - Uniqueness salt
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flags: OrderFlags,
        amount: u64,
        limit_price: u64,
        trigger_price: u64,
        limit_fee: u64,
        maker: AccountId,
        taker: Option<AccountId>,
        expiration: u64,
        salt: u64,
    ) -> Self {
        Self {
            flags,
            amount,
            limit_price,
            trigger_price,
            limit_fee,
            maker,
            taker,
            expiration,
            salt,
        }
    }

    /// Whether this is a buy order
    #[inline]
    pub fn is_buy(&self) -> bool {
        self.flags.is_buy
    }

    /// Whether fills may only decrease the maker's position
    #[inline]
    pub fn is_decrease_only(&self) -> bool {
        self.flags.is_decrease_only
    }

    /// Whether the limit fee is negative (maker demands payment)
    #[inline]
    pub fn is_negative_limit_fee(&self) -> bool {
        self.flags.is_negative_limit_fee
    }

    /// Whether the order has a trigger price
    #[inline]
    pub fn has_trigger(&self) -> bool {
        self.trigger_price != 0
    }

    /// Whether the order is expired at the given time
    #[inline]
    pub fn is_expired_at(&self, current_time: u64) -> bool {
        self.expiration != 0 && self.expiration < current_time
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_from_low_u64() {
        let id = AccountId::from_low_u64(0x0102);
        assert_eq!(id.0[30], 0x01);
        assert_eq!(id.0[31], 0x02);
        assert!(id.0[..24].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_account_id_hex() {
        let id = AccountId([0xAB; 32]);
        assert_eq!(id.to_hex().len(), 64);
        assert_eq!(format!("{}", id), format!("0x{}", "ab".repeat(32)));
    }

    #[test]
    fn test_flags_packing() {
        assert_eq!(OrderFlags::buy().to_byte(), 0b001);
        assert_eq!(OrderFlags::sell().to_byte(), 0b000);
        assert_eq!(OrderFlags::new(true, true, false).to_byte(), 0b011);
        assert_eq!(OrderFlags::new(true, true, true).to_byte(), 0b111);
        assert_eq!(OrderFlags::new(false, false, true).to_byte(), 0b100);
    }

    #[test]
    fn test_flags_roundtrip() {
        for byte in 0u8..8 {
            let flags = OrderFlags::from_byte(byte).unwrap();
            assert_eq!(flags.to_byte(), byte);
        }
    }

    #[test]
    fn test_flags_reject_unknown_bits() {
        assert_eq!(OrderFlags::from_byte(0b1000), None);
        assert_eq!(OrderFlags::from_byte(0xFF), None);
    }

    #[test]
    fn test_order_new() {
        let maker = AccountId::from_low_u64(1);
        let taker = AccountId::from_low_u64(2);
        let order = Order::new(
            OrderFlags::buy(),
            100_000_000,
            5_000_000_000_000,
            0,
            200_000,
            maker,
            Some(taker),
            1_700_000_000,
            7,
        );

        assert!(order.is_buy());
        assert!(!order.is_decrease_only());
        assert!(!order.is_negative_limit_fee());
        assert!(!order.has_trigger());
        assert_eq!(order.maker, maker);
        assert_eq!(order.taker, Some(taker));
        assert_eq!(order.salt, 7);
    }

    #[test]
    fn test_order_expiry() {
        let mut order = Order::new(
            OrderFlags::sell(),
            100_000_000,
            5_000_000_000_000,
            0,
            0,
            AccountId::from_low_u64(1),
            None,
            1_000,
            0,
        );

        assert!(!order.is_expired_at(999));
        assert!(!order.is_expired_at(1_000));
        assert!(order.is_expired_at(1_001));

        // Expiration 0 never expires
        order.expiration = 0;
        assert!(!order.is_expired_at(u64::MAX));
    }
}
