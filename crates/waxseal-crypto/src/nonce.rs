use rand::rngs::OsRng;
use rand::RngCore;
use waxseal_core::{Nonce, NonceBytes, TokenError, NONCE_LEN};

/// CSPRNG seam for drawing fresh nonces.
///
/// Behind a trait so tests can inject deterministic or failing sources;
/// production code uses [`OsNonceSource`].
pub trait NonceSource {
    /// Fills `buf` with cryptographically secure random bytes.
    fn fill(&self, buf: &mut [u8]) -> Result<(), TokenError>;
}

/// Operating-system CSPRNG via `rand::rngs::OsRng`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn fill(&self, buf: &mut [u8]) -> Result<(), TokenError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|_| TokenError::RandomSource)
    }
}

/// Resolves a nonce choice into concrete bytes, drawing from `source` for
/// the `Random` arm. A failed draw is never substituted with a weaker
/// source.
pub(crate) fn resolve_nonce<R: NonceSource>(
    source: &R,
    nonce: Nonce,
) -> Result<NonceBytes, TokenError> {
    match nonce {
        Nonce::Explicit(bytes) => Ok(bytes),
        Nonce::Random => {
            let mut bytes = [0_u8; NONCE_LEN];
            source.fill(&mut bytes)?;
            Ok(bytes)
        }
    }
}
