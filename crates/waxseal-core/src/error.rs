use thiserror::Error;

/// Failure taxonomy for token construction, signing, and verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Secret key was not exactly 32 bytes.
    #[error("invalid key length")]
    InvalidKeyLength,
    /// The CSPRNG could not produce nonce bytes.
    #[error("random source failure")]
    RandomSource,
    /// Input shorter than the fixed header; not a cryptographic failure.
    #[error("token too short")]
    TokenTooShort,
    /// The AEAD primitive reported a sealing failure.
    #[error("seal failed")]
    SealFailed,
    /// The authentication tag did not validate. Covers tampering, a wrong
    /// key, and corrupted bytes alike; the message never distinguishes
    /// between them.
    #[error("authentication failed")]
    AuthenticationFailed,
}
