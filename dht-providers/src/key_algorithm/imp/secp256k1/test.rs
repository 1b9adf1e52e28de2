use super::*;

const GENERATOR_UNCOMPRESSED: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

fn generator_compressed() -> Vec<u8> {
    vec![
        2, 121, 190, 102, 126, 249, 220, 187, 172, 85, 160, 98, 149, 206, 135, 11, 7, 2, 155,
        252, 219, 45, 206, 40, 217, 89, 242, 129, 91, 22, 248, 23, 152,
    ]
}

fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}

#[test]
fn test_uncompressed_key_is_normalized() {
    let key = hex_to_bytes(GENERATOR_UNCOMPRESSED);
    assert_eq!(
        generator_compressed(),
        Secp256k1.normalize_public_key(&key).unwrap()
    );
}

#[test]
fn test_bytes_to_jwk() {
    let jwk = Secp256k1
        .bytes_to_jwk(&generator_compressed(), None)
        .unwrap();

    assert_eq!(
        PublicKeyJwk::Ec(PublicKeyJwkEllipticData {
            r#use: None,
            crv: "secp256k1".to_owned(),
            x: "eb5mfvncu6xVoGKVzocLBwKb_NstzijZWfKBWxb4F5g".to_owned(),
            y: Some("SDradyajxGVdpPv8DhEIqP0XtEimhVQZnEfQj_sQ1Lg".to_owned()),
        }),
        jwk
    );
    assert_eq!(
        generator_compressed(),
        Secp256k1.jwk_to_bytes(&jwk).unwrap()
    );
}

#[test]
fn test_generated_key_round_trip() {
    let key = Secp256k1.generate_key_pair();
    assert_eq!(33, key.public.len());
    assert_eq!(32, key.private.len());

    let jwk = Secp256k1.bytes_to_jwk(&key.public, None).unwrap();
    assert_eq!(key.public, Secp256k1.jwk_to_bytes(&jwk).unwrap());
}

#[test]
fn test_rejects_invalid_point() {
    assert!(Secp256k1.normalize_public_key(&[5; 33]).is_err());
    assert!(Secp256k1.normalize_public_key(&[]).is_err());
}
