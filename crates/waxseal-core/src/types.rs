/// Fixed ASCII version tag prefixed to every token.
pub const VERSION_TAG: u8 = b'A';
/// Secret key length required by the AEAD construction.
pub const KEY_LEN: usize = 32;
/// Extended nonce length.
pub const NONCE_LEN: usize = 24;
/// Version tag plus nonce.
pub const HEADER_LEN: usize = 1 + NONCE_LEN;
/// Authentication tag appended to the ciphertext by the AEAD primitive.
pub const TAG_LEN: usize = 16;

/// Raw 24-byte nonce value.
pub type NonceBytes = [u8; NONCE_LEN];

/// Nonce selection for a sign call.
///
/// `Random` draws fresh bytes from the signer's CSPRNG and is what most
/// callers want. `Explicit` exists for deterministic token reproduction;
/// the caller owns uniqueness per `(key, message)` pair, and reuse with a
/// different message under the same key breaks the cipher's guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nonce {
    Random,
    Explicit(NonceBytes),
}

/// Sealed token: `version tag ‖ nonce ‖ ciphertext ‖ auth tag`.
///
/// Self-describing opaque bytes; no side-channel metadata is needed to
/// verify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(Vec<u8>);

impl Token {
    /// Wraps already-assembled token bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrows the raw wire bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the token, returning the raw wire bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Token {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::{Token, HEADER_LEN, NONCE_LEN, TAG_LEN, VERSION_TAG};

    #[test]
    fn header_is_version_tag_plus_nonce() {
        assert_eq!(HEADER_LEN, 1 + NONCE_LEN);
        assert_eq!(VERSION_TAG, b'A');
        assert_eq!(TAG_LEN, 16);
    }

    #[test]
    fn token_round_trips_raw_bytes() {
        let raw = vec![0x41_u8, 0x00, 0xFF];
        let token = Token::from_bytes(raw.clone());
        assert_eq!(token.as_bytes(), raw.as_slice());
        assert_eq!(token.len(), 3);
        assert!(!token.is_empty());
        assert_eq!(token.into_vec(), raw);
    }
}
