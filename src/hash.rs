//! Canonical order identity.
//!
//! ## Contract
//!
//! The canonical hash of an order's economic terms is both its signing
//! payload and its ledger key. It must be deterministic, stable across
//! process restarts, and domain-separated: identical terms submitted
//! against a different venue deployment must never collide.
//!
//! ## Construction
//!
//! The order fields are packed into a fixed-arity container (the three
//! boolean flags collapse into a single byte with frozen bit positions, a
//! wildcard taker becomes all-zero bytes), SSZ-encoded for a deterministic
//! byte layout, and hashed with SHA-256 under a precomputed domain
//! separator:
//!
//! ```text
//! separator = sha256(ssz(name_hash, version_hash, instance_id, verifier))
//! order_id  = sha256(separator || sha256(ssz(order_fields)))
//! ```
//!
//! ## Salt
//!
//! The uniqueness salt is part of the canonical identity. Two orders that
//! differ only in salt are distinct orders with independent ledger entries
//! and fill caps.

use std::fmt;

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::types::{AccountId, Order};

// ============================================================================
// OrderId
// ============================================================================

/// Canonical 32-byte order identity: ledger key and signing digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrderId(pub [u8; 32]);

impl OrderId {
    /// Raw digest bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex encoding of the digest
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

// ============================================================================
// SSZ hash inputs
// ============================================================================

/// Domain fields in fixed-arity form. Variable-length strings enter as
/// their SHA-256 digests to keep the container fixed-size.
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
struct DomainInput {
    name_hash: [u8; 32],
    version_hash: [u8; 32],
    instance_id: u64,
    verifier: [u8; 32],
}

/// An order's economic terms in fixed-arity form.
///
/// The flag byte layout is frozen (see `OrderFlags::to_byte`); a wildcard
/// taker is encoded as all-zero bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
struct OrderHashInput {
    flags: u8,
    amount: u64,
    limit_price: u64,
    trigger_price: u64,
    limit_fee: u64,
    maker: [u8; 32],
    taker: [u8; 32],
    expiration: u64,
    salt: u64,
}

impl OrderHashInput {
    fn from_order(order: &Order) -> Self {
        Self {
            flags: order.flags.to_byte(),
            amount: order.amount,
            limit_price: order.limit_price,
            trigger_price: order.trigger_price,
            limit_fee: order.limit_fee,
            maker: order.maker.0,
            taker: order.taker.map(|t| t.0).unwrap_or([0u8; 32]),
            expiration: order.expiration,
            salt: order.salt,
        }
    }
}

// ============================================================================
// HashDomain
// ============================================================================

/// A venue deployment's hashing domain.
///
/// The separator binds every order identity to a venue name, a schema
/// version, a network/instance identifier, and the validating engine's own
/// identity. It is computed once at construction; `order_id` is then a
/// pure function of the order.
///
/// # Example
///
/// ```
/// use settlecore::hash::HashDomain;
/// use settlecore::types::{AccountId, Order, OrderFlags};
///
/// let domain = HashDomain::new("settlecore", "1", 1, AccountId::from_low_u64(99));
/// let order = Order::new(
///     OrderFlags::buy(),
///     100_000_000,
///     5_000_000_000_000,
///     0,
///     200_000,
///     AccountId::from_low_u64(1),
///     None,
///     0,
///     0,
/// );
///
/// // Deterministic: hashing twice gives the same identity
/// assert_eq!(domain.order_id(&order), domain.order_id(&order));
/// ```
#[derive(Debug, Clone)]
pub struct HashDomain {
    name: String,
    version: String,
    instance_id: u64,
    verifier: AccountId,
    separator: [u8; 32],
}

impl HashDomain {
    /// Create a hashing domain and precompute its separator
    ///
    /// # Arguments
    ///
    /// * `name` - Venue name
    /// * `version` - Hash schema version
    /// * `instance_id` - Network/instance identifier
    /// * `verifier` - The validating engine's own identity
    pub fn new(name: &str, version: &str, instance_id: u64, verifier: AccountId) -> Self {
        let input = DomainInput {
            name_hash: sha256(name.as_bytes()),
            version_hash: sha256(version.as_bytes()),
            instance_id,
            verifier: verifier.0,
        };
        let separator = sha256(&ssz_bytes(&input));

        Self {
            name: name.to_string(),
            version: version.to_string(),
            instance_id,
            verifier,
            separator,
        }
    }

    /// The venue name this domain binds to
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hash schema version this domain binds to
    #[inline]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The network/instance identifier this domain binds to
    #[inline]
    pub fn instance_id(&self) -> u64 {
        self.instance_id
    }

    /// The validating engine identity this domain binds to
    #[inline]
    pub fn verifier(&self) -> AccountId {
        self.verifier
    }

    /// The precomputed 32-byte domain separator
    #[inline]
    pub fn separator(&self) -> [u8; 32] {
        self.separator
    }

    /// Compute the canonical identity of an order under this domain.
    ///
    /// Pure and side-effect free; identical orders always hash to the same
    /// identity, and any change to an economic field, the flag byte, or
    /// the domain produces a different one.
    pub fn order_id(&self, order: &Order) -> OrderId {
        let struct_hash = sha256(&ssz_bytes(&OrderHashInput::from_order(order)));

        let mut hasher = Sha256::new();
        hasher.update(self.separator);
        hasher.update(struct_hash);

        let mut id = [0u8; 32];
        id.copy_from_slice(&hasher.finalize());
        OrderId(id)
    }
}

/// SHA-256 of the given bytes
fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);

    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// SSZ-encode a fixed-size container.
fn ssz_bytes<T: SimpleSerialize>(value: &T) -> Vec<u8> {
    // Fixed-size containers with no variable fields cannot fail to encode.
    ssz_rs::serialize(value).expect("fixed-size SSZ container")
}

// ============================================================================
// Unit Tests
// ============================================================================
