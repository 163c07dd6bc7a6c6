use waxseal_core::header::{build_header, split_token};
use waxseal_core::{Nonce, Token, TokenError};

use crate::aead::{AeadCipher, XChaCha20Poly1305Cipher};
use crate::nonce::{resolve_nonce, NonceSource, OsNonceSource};

/// Issues and verifies sealed tokens under a single secret key.
///
/// Immutable after construction. Safe for concurrent `sign` and `verify`
/// calls from multiple threads: the cipher instance is never mutated and
/// each sign call assembles its header in a stack-local buffer.
#[derive(Debug)]
pub struct Signer<C = XChaCha20Poly1305Cipher, R = OsNonceSource> {
    cipher: C,
    nonces: R,
}

impl Signer {
    /// Creates a signer if and only if `key` is exactly 32 bytes; fails
    /// with [`TokenError::InvalidKeyLength`] otherwise.
    ///
    /// The key is retained only inside the cipher instance.
    pub fn new(key: &[u8]) -> Result<Self, TokenError> {
        Ok(Self {
            cipher: XChaCha20Poly1305Cipher::new(key)?,
            nonces: OsNonceSource,
        })
    }
}

impl<C: AeadCipher, R: NonceSource> Signer<C, R> {
    /// Creates a signer over injected cipher and nonce-source backends.
    pub fn with_backends(cipher: C, nonces: R) -> Self {
        Self { cipher, nonces }
    }

    /// Seals `msg` into a token: `version tag ‖ nonce ‖ ciphertext ‖ tag`.
    ///
    /// With [`Nonce::Random`] every call produces a fresh token. With
    /// [`Nonce::Explicit`] the output is deterministic: the same key,
    /// nonce, and message always yield byte-identical tokens, which is the
    /// supported mechanism for regenerating a token. Never reuse an
    /// explicit nonce with a different message or key.
    pub fn sign(&self, msg: &[u8], nonce: Nonce) -> Result<Token, TokenError> {
        let nonce = resolve_nonce(&self.nonces, nonce)?;
        let header = build_header(&nonce);
        let sealed = self.cipher.seal(&nonce, &header, msg)?;

        let mut out = Vec::with_capacity(header.len() + sealed.len());
        out.extend_from_slice(&header);
        out.extend_from_slice(&sealed);
        Ok(Token::from_bytes(out))
    }

    /// Verifies and decrypts a token, returning the original message if
    /// and only if the token is authentic under this signer's key.
    ///
    /// All-or-nothing: any tag failure yields
    /// [`TokenError::AuthenticationFailed`] and no plaintext. The header
    /// version byte is covered by the associated data but not dispatched
    /// on; a token sealed under different conventions simply fails to
    /// authenticate.
    pub fn verify(&self, token: &[u8]) -> Result<Vec<u8>, TokenError> {
        let (header, nonce, sealed) = split_token(token)?;
        self.cipher.open(&nonce, header, sealed)
    }
}
