use super::*;

#[test]
fn test_jwk_to_bytes() {
    let jwk = PublicKeyJwk::Ec(PublicKeyJwkEllipticData {
        r#use: None,
        crv: "P-256".to_owned(),
        x: "CQKO9r8IF7mEYhZImiOoLqw70WYLAohqT3JkomZW3x4".to_owned(),
        y: Some("khCene-e-_GAeE8N-aWUUucY_dVGRGCqpQmVhPwDHUM".to_owned()),
    });

    assert_eq!(
        vec![
            3, 9, 2, 142, 246, 191, 8, 23, 185, 132, 98, 22, 72, 154, 35, 168, 46, 172, 59, 209,
            102, 11, 2, 136, 106, 79, 114, 100, 162, 102, 86, 223, 30
        ],
        Es256.jwk_to_bytes(&jwk).unwrap()
    )
}

#[test]
fn test_bytes_to_jwk_accepts_uncompressed_point() {
    let key = Es256.generate_key_pair();
    let uncompressed = Es256::decompress_public_key(&key.public).unwrap();
    assert_eq!(65, uncompressed.len());

    let jwk = Es256.bytes_to_jwk(&uncompressed, None).unwrap();
    assert_eq!(jwk, Es256.bytes_to_jwk(&key.public, None).unwrap());
    assert_eq!(key.public, Es256.jwk_to_bytes(&jwk).unwrap());
    assert_eq!(
        key.public,
        Es256.normalize_public_key(&uncompressed).unwrap()
    );
}

#[test]
fn test_jwk_to_bytes_rejects_other_curve() {
    let jwk = PublicKeyJwk::Ec(PublicKeyJwkEllipticData {
        r#use: None,
        crv: "secp256k1".to_owned(),
        x: "CQKO9r8IF7mEYhZImiOoLqw70WYLAohqT3JkomZW3x4".to_owned(),
        y: Some("khCene-e-_GAeE8N-aWUUucY_dVGRGCqpQmVhPwDHUM".to_owned()),
    });

    assert!(Es256.jwk_to_bytes(&jwk).is_err());
}
