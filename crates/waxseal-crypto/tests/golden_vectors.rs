use waxseal_core::{Nonce, NONCE_LEN};
use waxseal_crypto::Signer;

fn read_vector(name: &str) -> Vec<u8> {
    let path = format!("{}/tests/vectors/{name}", env!("CARGO_MANIFEST_DIR"));
    let hex_text = std::fs::read_to_string(path).expect("vector file must exist");
    hex::decode(hex_text.trim()).expect("vector file must hold valid hex")
}

fn ramp_key() -> [u8; 32] {
    let mut key = [0_u8; 32];
    for (i, b) in key.iter_mut().enumerate() {
        *b = i as u8;
    }
    key
}

fn ramp_nonce() -> [u8; NONCE_LEN] {
    let mut nonce = [0_u8; NONCE_LEN];
    for (i, b) in nonce.iter_mut().enumerate() {
        *b = 0xA0 + i as u8;
    }
    nonce
}

#[test]
fn golden_zero_key_hello_token_matches() {
    let signer = Signer::new(&[0_u8; 32]).expect("key should be accepted");
    let token = signer
        .sign(b"hello", Nonce::Explicit([0_u8; NONCE_LEN]))
        .expect("sign should succeed");

    let expected = read_vector("token_zero_key_hello.hex");
    assert_eq!(
        hex::encode(token.as_bytes()),
        hex::encode(&expected),
        "update tests/vectors/token_zero_key_hello.hex on a deliberate format change"
    );
}

#[test]
fn golden_ramp_key_ticket_token_matches() {
    let signer = Signer::new(&ramp_key()).expect("key should be accepted");
    let token = signer
        .sign(b"signed capability ticket", Nonce::Explicit(ramp_nonce()))
        .expect("sign should succeed");

    let expected = read_vector("token_ramp_key_ticket.hex");
    assert_eq!(hex::encode(token.as_bytes()), hex::encode(&expected));
}

#[test]
fn golden_tokens_verify_back_to_their_messages() {
    let zero = Signer::new(&[0_u8; 32]).expect("key should be accepted");
    assert_eq!(
        zero.verify(&read_vector("token_zero_key_hello.hex"))
            .expect("golden token should verify"),
        b"hello"
    );

    let ramp = Signer::new(&ramp_key()).expect("key should be accepted");
    assert_eq!(
        ramp.verify(&read_vector("token_ramp_key_ticket.hex"))
            .expect("golden token should verify"),
        b"signed capability ticket"
    );
}
