use std::{collections::HashMap, sync::Arc};

use super::{
    signer::{eddsa::EDDSASigner, es256::ES256Signer, secp256k1::Secp256k1Signer},
    utilities, CryptoProviderImpl,
};
use crate::{CryptoProvider, CryptoProviderError, Signer, SignerError};

#[test]
fn test_random_seed_is_not_constant() {
    assert_ne!(
        utilities::generate_random_seed_32(),
        utilities::generate_random_seed_32()
    );
}

#[test]
fn test_eddsa_sign_and_verify() {
    let (private, public) = EDDSASigner::random();
    let signer = EDDSASigner {};

    let signature = signer.sign(b"payload", &public, &private).unwrap();
    assert_eq!(64, signature.len());
    signer.verify(b"payload", &signature, &public).unwrap();

    assert_eq!(
        Err(SignerError::InvalidSignature),
        signer.verify(b"payload!", &signature, &public)
    );
}

#[test]
fn test_eddsa_sign_with_mismatched_public_key() {
    let (private, _) = EDDSASigner::random();
    let (_, other_public) = EDDSASigner::random();

    assert_eq!(
        Err(SignerError::CouldNotExtractKeyPair),
        EDDSASigner {}.sign(b"payload", &other_public, &private)
    );
}

#[test]
fn test_es256_sign_and_verify() {
    let (private, public) = ES256Signer::random();
    assert_eq!(33, public.len());

    let signer = ES256Signer {};
    let signature = signer.sign(b"payload", &public, &private).unwrap();
    signer.verify(b"payload", &signature, &public).unwrap();
    assert!(signer.verify(b"other", &signature, &public).is_err());
}

#[test]
fn test_secp256k1_sign_and_verify() {
    let (private, public) = Secp256k1Signer::random();
    assert_eq!(33, public.len());

    let signer = Secp256k1Signer {};
    let signature = signer.sign(b"payload", &public, &private).unwrap();
    assert_eq!(64, signature.len());
    signer.verify(b"payload", &signature, &public).unwrap();
    assert_eq!(
        Err(SignerError::InvalidSignature),
        signer.verify(b"other", &signature, &public)
    );
}

#[test]
fn test_crypto_provider_missing_signer() {
    let provider = CryptoProviderImpl::new(HashMap::from_iter(vec![(
        "Ed25519".to_string(),
        Arc::new(EDDSASigner {}) as Arc<dyn Signer>,
    )]));

    assert!(provider.get_signer("Ed25519").is_ok());
    assert_eq!(
        CryptoProviderError::MissingSigner("ES256".to_string()),
        provider.get_signer("ES256").err().unwrap()
    );
}
