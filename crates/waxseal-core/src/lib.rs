//! Core waxseal primitives shared across crates.
//!
//! Includes wire-format constants, the nonce sum type, header helpers, and base errors.

pub mod error;
pub mod header;
pub mod types;

pub use error::TokenError;
pub use types::{Nonce, NonceBytes, Token, HEADER_LEN, KEY_LEN, NONCE_LEN, TAG_LEN, VERSION_TAG};
