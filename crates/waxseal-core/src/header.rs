use crate::error::TokenError;
use crate::types::{NonceBytes, HEADER_LEN, NONCE_LEN, VERSION_TAG};

/// Assembles the 25-byte header `version tag ‖ nonce`.
///
/// Returned by value so every sign call works on its own stack-local copy;
/// concurrent calls never share header state.
pub fn build_header(nonce: &NonceBytes) -> [u8; HEADER_LEN] {
    let mut header = [0_u8; HEADER_LEN];
    header[0] = VERSION_TAG;
    header[1..].copy_from_slice(nonce);
    header
}

/// Splits a candidate token into `(header, nonce, sealed body)`.
///
/// The header doubles as the associated data for the AEAD open; the nonce
/// is the header minus its leading version tag.
pub fn split_token(token: &[u8]) -> Result<(&[u8], NonceBytes, &[u8]), TokenError> {
    if token.len() < HEADER_LEN {
        return Err(TokenError::TokenTooShort);
    }
    let (header, sealed) = token.split_at(HEADER_LEN);
    let mut nonce = [0_u8; NONCE_LEN];
    nonce.copy_from_slice(&header[1..]);
    Ok((header, nonce, sealed))
}
