use std::fmt;

use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    Key, XChaCha20Poly1305, XNonce,
};
use waxseal_core::{NonceBytes, TokenError, KEY_LEN};

/// AEAD seam used by the signer.
///
/// Implementations hold the secret key and must be safe for concurrent
/// use; `seal` and `open` take `&self` only. The sealed form is
/// `ciphertext ‖ 16-byte auth tag`.
pub trait AeadCipher {
    fn seal(
        &self,
        nonce: &NonceBytes,
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, TokenError>;
    fn open(&self, nonce: &NonceBytes, aad: &[u8], sealed: &[u8]) -> Result<Vec<u8>, TokenError>;
}

/// XChaCha20-Poly1305 backend, initialized once from a 32-byte key.
#[derive(Clone)]
pub struct XChaCha20Poly1305Cipher {
    cipher: XChaCha20Poly1305,
}

impl XChaCha20Poly1305Cipher {
    /// Creates the cipher if and only if `key` is exactly 32 bytes.
    ///
    /// No other key validation is performed.
    pub fn new(key: &[u8]) -> Result<Self, TokenError> {
        if key.len() != KEY_LEN {
            return Err(TokenError::InvalidKeyLength);
        }
        Ok(Self {
            cipher: XChaCha20Poly1305::new(Key::from_slice(key)),
        })
    }
}

impl fmt::Debug for XChaCha20Poly1305Cipher {
    // key material stays opaque
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XChaCha20Poly1305Cipher").finish_non_exhaustive()
    }
}

impl AeadCipher for XChaCha20Poly1305Cipher {
    fn seal(
        &self,
        nonce: &NonceBytes,
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, TokenError> {
        self.cipher
            .encrypt(
                XNonce::from_slice(nonce),
                Payload {
                    msg: plaintext,
                    aad,
                },
            )
            .map_err(|_| TokenError::SealFailed)
    }

    fn open(&self, nonce: &NonceBytes, aad: &[u8], sealed: &[u8]) -> Result<Vec<u8>, TokenError> {
        self.cipher
            .decrypt(XNonce::from_slice(nonce), Payload { msg: sealed, aad })
            .map_err(|_| TokenError::AuthenticationFailed)
    }
}
