use ct_codecs::{Base64UrlSafeNoPadding, Decoder, Encoder};
use ed25519_compact::{KeyPair, PublicKey};
use zeroize::Zeroizing;

use crate::{
    common_models::{PublicKeyJwk, PublicKeyJwkEllipticData},
    key_algorithm::{error::KeyAlgorithmError, model::GeneratedKey, KeyAlgorithm},
};


pub struct Eddsa;

const CURVE: &str = "Ed25519";

impl KeyAlgorithm for Eddsa {
    fn get_signer_algorithm_id(&self) -> String {
        "Ed25519".to_string()
    }

    fn generate_key_pair(&self) -> GeneratedKey {
        let key_pair = KeyPair::generate();

        GeneratedKey {
            public: key_pair.pk.to_vec(),
            private: Zeroizing::new(key_pair.sk.to_vec()),
        }
    }

    fn bytes_to_jwk(
        &self,
        bytes: &[u8],
        r#use: Option<String>,
    ) -> Result<PublicKeyJwk, KeyAlgorithmError> {
        let key = self.normalize_public_key(bytes)?;

        Ok(PublicKeyJwk::Okp(PublicKeyJwkEllipticData {
            r#use,
            crv: CURVE.to_string(),
            x: Base64UrlSafeNoPadding::encode_to_string(key)
                .map_err(|e| KeyAlgorithmError::Failed(e.to_string()))?,
            y: None,
        }))
    }

    fn jwk_to_bytes(&self, jwk: &PublicKeyJwk) -> Result<Vec<u8>, KeyAlgorithmError> {
        match jwk {
            PublicKeyJwk::Okp(data) if data.crv == CURVE => {
                let x = Base64UrlSafeNoPadding::decode_to_vec(&data.x, None)
                    .map_err(|e| KeyAlgorithmError::Failed(e.to_string()))?;

                self.normalize_public_key(&x)
            }
            _ => Err(KeyAlgorithmError::Failed("invalid kty".to_string())),
        }
    }

    fn normalize_public_key(&self, bytes: &[u8]) -> Result<Vec<u8>, KeyAlgorithmError> {
        let key =
            PublicKey::from_slice(bytes).map_err(|e| KeyAlgorithmError::Failed(e.to_string()))?;

        Ok(key.to_vec())
    }
}
