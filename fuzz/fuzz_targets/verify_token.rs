#![no_main]

use libfuzzer_sys::fuzz_target;
use waxseal_crypto::Signer;

fuzz_target!(|data: &[u8]| {
    let signer = match Signer::new(&[0x5A_u8; 32]) {
        Ok(signer) => signer,
        Err(_) => return,
    };
    let _ = signer.verify(data);
});
