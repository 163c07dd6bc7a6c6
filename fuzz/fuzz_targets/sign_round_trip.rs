#![no_main]

use libfuzzer_sys::fuzz_target;
use waxseal_core::{Nonce, NONCE_LEN};
use waxseal_crypto::Signer;

fuzz_target!(|data: &[u8]| {
    let signer = match Signer::new(&[0x5A_u8; 32]) {
        Ok(signer) => signer,
        Err(_) => return,
    };

    let (nonce_part, msg) = if data.len() >= NONCE_LEN {
        data.split_at(NONCE_LEN)
    } else {
        return;
    };
    let mut nonce = [0_u8; NONCE_LEN];
    nonce.copy_from_slice(nonce_part);

    let token = match signer.sign(msg, Nonce::Explicit(nonce)) {
        Ok(token) => token,
        Err(_) => return,
    };
    match signer.verify(token.as_bytes()) {
        Ok(recovered) => assert_eq!(recovered, msg),
        Err(_) => panic!("freshly signed token must verify"),
    }
});
