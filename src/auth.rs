//! Signature authorization for off-channel orders.
//!
//! ## Design
//!
//! Key handling and curve arithmetic are not this crate's business. The
//! engine consumes signature recovery as an injected capability: a
//! [`SignerRecovery`] backend turns a digest and a well-formed signature
//! into *some* identity, and authorization is the comparison of that
//! identity against the order's maker.
//!
//! Recovery itself cannot fail on well-formed input; a signature of the
//! wrong length is the only encoding error this layer raises. Everything
//! else is an identity mismatch, which the validator reports as an
//! invalid signature.
//!
//! Signatures are checked only while an order's ledger status is open.
//! Once an order is approved on-ledger, the recorded status substitutes
//! for the signature entirely.

use crate::error::EngineError;
use crate::types::{AccountId, Order};

/// Expected signature length in bytes (64-byte signature + recovery byte)
pub const SIGNATURE_LEN: usize = 65;

// ============================================================================
// SignerRecovery trait
// ============================================================================

/// Recovery backend: digest + signature -> signer identity.
///
/// Implementations must be deterministic and must return an identity for
/// every well-formed signature; a signature produced by the wrong key
/// simply recovers to the wrong identity.
pub trait SignerRecovery {
    /// Recover the signer identity from a digest and a well-formed
    /// signature
    fn recover(&self, digest: [u8; 32], signature: &[u8; SIGNATURE_LEN]) -> AccountId;
}

// ============================================================================
// EmbeddedRecovery
// ============================================================================

/// Reference recovery backend that reads the signer identity out of the
/// signature body (first 32 bytes).
///
/// Suitable for demos, tests, and deployments where the surrounding
/// authority has already authenticated the submitter. Production venues
/// inject a curve-based backend instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedRecovery;

impl EmbeddedRecovery {
    /// Produce the signature that recovers to the given identity
    pub fn sign(signer: AccountId) -> [u8; SIGNATURE_LEN] {
        let mut signature = [0u8; SIGNATURE_LEN];
        signature[..32].copy_from_slice(&signer.0);
        signature
    }
}

impl SignerRecovery for EmbeddedRecovery {
    fn recover(&self, _digest: [u8; 32], signature: &[u8; SIGNATURE_LEN]) -> AccountId {
        let mut id = [0u8; 32];
        id.copy_from_slice(&signature[..32]);
        AccountId(id)
    }
}

// ============================================================================
// SignatureAuthority
// ============================================================================

/// Wraps a recovery backend with encoding validation and maker
/// authorization.
pub struct SignatureAuthority<R: SignerRecovery> {
    backend: R,
}

impl<R: SignerRecovery> SignatureAuthority<R> {
    /// Create an authority over the given recovery backend
    pub fn new(backend: R) -> Self {
        Self { backend }
    }

    /// Recover the signer identity from a raw signature blob.
    ///
    /// # Errors
    ///
    /// `InvalidSignatureEncoding` if the blob is not exactly
    /// [`SIGNATURE_LEN`] bytes. Recovery on a well-formed blob always
    /// yields an identity; callers compare it to the expected maker.
    pub fn recover(&self, digest: [u8; 32], raw: &[u8]) -> Result<AccountId, EngineError> {
        let signature: &[u8; SIGNATURE_LEN] = raw
            .try_into()
            .map_err(|_| EngineError::InvalidSignatureEncoding(raw.len()))?;
        Ok(self.backend.recover(digest, signature))
    }

    /// Whether the signature over the digest authorizes the order.
    ///
    /// True iff the recovered identity equals `order.maker`.
    pub fn authorize(
        &self,
        order: &Order,
        digest: [u8; 32],
        raw: &[u8],
    ) -> Result<bool, EngineError> {
        Ok(self.recover(digest, raw)? == order.maker)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
