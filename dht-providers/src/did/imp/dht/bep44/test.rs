use std::collections::BTreeMap;

use dht_crypto::{imp::signer::eddsa::EDDSASigner, Signer, SignerError};

use super::Envelope;
use crate::{
    bencode::{self, Value},
    did::imp::dht::error::Bep44Error,
    key_storage::model::{MockSignatureProvider, SignatureProvider},
};

fn signature_provider() -> MockSignatureProvider {
    let (private, public) = EDDSASigner::random();

    let mut provider = MockSignatureProvider::default();
    let public_key = public.clone();
    provider
        .expect_get_public_key()
        .returning(move || public_key.clone());
    provider
        .expect_sign()
        .returning(move |message| EDDSASigner {}.sign(message, &public, &private));
    provider
}

#[tokio::test]
async fn test_envelope_round_trip() {
    let provider = signature_provider();
    let envelope = Envelope::new(b"v=1,b=2,c=3".to_vec(), 1609459, &provider)
        .await
        .unwrap();

    let encoded = envelope.encode();
    assert!(encoded.starts_with(b"d1:k32:"));

    let decoded = Envelope::decode(&encoded, &EDDSASigner {}).unwrap();
    assert_eq!(envelope, decoded);
    assert_eq!(b"v=1,b=2,c=3", decoded.value());
    assert_eq!(1609459, decoded.seq());
    assert_eq!(provider.get_public_key(), decoded.public_key());
}

#[tokio::test]
async fn test_signature_covers_bencoded_seq_and_value() {
    let provider = signature_provider();
    let envelope = Envelope::new(b"abc".to_vec(), 5, &provider).await.unwrap();

    EDDSASigner {}
        .verify(
            b"d3:seqi5e1:v3:abce",
            envelope.signature(),
            envelope.public_key(),
        )
        .unwrap();
}

#[tokio::test]
async fn test_signer_failure_is_reported() {
    let mut provider = MockSignatureProvider::default();
    provider.expect_get_public_key().returning(|| vec![1; 32]);
    provider
        .expect_sign()
        .returning(|_| Err(SignerError::CouldNotSign("signer failed".to_string())));

    let result = Envelope::new(b"payload".to_vec(), 1, &provider).await;
    assert!(matches!(result, Err(Bep44Error::Signing(_))));
}

#[tokio::test]
async fn test_payload_limit() {
    let provider = MockSignatureProvider::default();

    let result = Envelope::new(vec![0; 1001], 1, &provider).await;
    assert_eq!(Err(Bep44Error::PayloadTooLarge(1001)), result);
}

#[tokio::test]
async fn test_rejects_non_ed25519_sized_key() {
    let mut provider = MockSignatureProvider::default();
    provider.expect_get_public_key().returning(|| vec![2; 33]);

    let result = Envelope::new(b"payload".to_vec(), 1, &provider).await;
    assert_eq!(Err(Bep44Error::InvalidPublicKeyLength(33)), result);
}

#[tokio::test]
async fn test_any_flipped_byte_fails_decoding() {
    let provider = signature_provider();
    let encoded = Envelope::new(b"_did. vm=k0".to_vec(), 42, &provider)
        .await
        .unwrap()
        .encode();

    for index in 0..encoded.len() {
        let mut tampered = encoded.clone();
        tampered[index] ^= 0x01;

        assert!(
            Envelope::decode(&tampered, &EDDSASigner {}).is_err(),
            "tampered byte {index} was accepted"
        );
    }
}

#[tokio::test]
async fn test_tampered_value_is_invalid_signature() {
    let provider = signature_provider();
    let mut encoded = Envelope::new(b"abc".to_vec(), 42, &provider)
        .await
        .unwrap()
        .encode();

    let last_value_byte = encoded.len() - 2;
    encoded[last_value_byte] = b'x';

    assert_eq!(
        Err(Bep44Error::InvalidSignature),
        Envelope::decode(&encoded, &EDDSASigner {})
    );
}

#[test]
fn test_decode_rejects_missing_and_malformed_fields() {
    let envelope = |fields: Vec<(&str, Value)>| {
        let map: BTreeMap<Vec<u8>, Value> = fields
            .into_iter()
            .map(|(key, value)| (key.as_bytes().to_vec(), value))
            .collect();
        bencode::encode(&Value::Dictionary(map))
    };

    let missing_sig = envelope(vec![
        ("k", Value::from(vec![1; 32])),
        ("seq", Value::Integer(1)),
        ("v", Value::from("abc")),
    ]);
    assert!(matches!(
        Envelope::decode(&missing_sig, &EDDSASigner {}),
        Err(Bep44Error::InvalidEnvelope(_))
    ));

    let short_key = envelope(vec![
        ("k", Value::from(vec![1; 31])),
        ("seq", Value::Integer(1)),
        ("sig", Value::from(vec![0; 64])),
        ("v", Value::from("abc")),
    ]);
    assert_eq!(
        Err(Bep44Error::InvalidPublicKeyLength(31)),
        Envelope::decode(&short_key, &EDDSASigner {})
    );

    let string_seq = envelope(vec![
        ("k", Value::from(vec![1; 32])),
        ("seq", Value::from("1")),
        ("sig", Value::from(vec![0; 64])),
        ("v", Value::from("abc")),
    ]);
    assert!(matches!(
        Envelope::decode(&string_seq, &EDDSASigner {}),
        Err(Bep44Error::InvalidEnvelope(_))
    ));

    assert!(matches!(
        Envelope::decode(b"li1ee", &EDDSASigner {}),
        Err(Bep44Error::InvalidEnvelope(_))
    ));
    assert!(matches!(
        Envelope::decode(b"d1:k", &EDDSASigner {}),
        Err(Bep44Error::Bencode(_))
    ));
}

#[tokio::test]
async fn test_check_sequence() {
    let provider = signature_provider();
    let envelope = Envelope::new(b"abc".to_vec(), 100, &provider).await.unwrap();

    assert!(envelope.check_sequence(99).is_ok());
    assert!(envelope.check_sequence(100).is_ok());
    assert_eq!(
        Err(Bep44Error::StaleSequence {
            seq: 100,
            last_seen: 101
        }),
        envelope.check_sequence(101)
    );
}
