//! Token sealing and verification for waxseal.
//!
//! Includes the AEAD cipher seam, the CSPRNG nonce-source seam, and the
//! `Signer` that combines them.

pub mod aead;
pub mod nonce;
pub mod signer;

pub use signer::Signer;
