use ct_codecs::{Base64UrlSafeNoPadding, Decoder, Encoder};
use dht_crypto::imp::signer::secp256k1::Secp256k1Signer;
use k256::elliptic_curve::{
    generic_array::GenericArray,
    sec1::{EncodedPoint, ToEncodedPoint},
};
use zeroize::Zeroizing;

use crate::{
    common_models::{PublicKeyJwk, PublicKeyJwkEllipticData},
    key_algorithm::{error::KeyAlgorithmError, model::GeneratedKey, KeyAlgorithm},
};

#[cfg(test)]
mod test;

pub struct Secp256k1;

const CURVE: &str = "secp256k1";

impl KeyAlgorithm for Secp256k1 {
    fn get_signer_algorithm_id(&self) -> String {
        "SECP256K1".to_string()
    }

    fn generate_key_pair(&self) -> GeneratedKey {
        let (private, public) = Secp256k1Signer::random();

        GeneratedKey {
            public,
            private: Zeroizing::new(private),
        }
    }

    fn bytes_to_jwk(
        &self,
        bytes: &[u8],
        r#use: Option<String>,
    ) -> Result<PublicKeyJwk, KeyAlgorithmError> {
        let pk = k256::PublicKey::from_sec1_bytes(bytes)
            .map_err(|e| KeyAlgorithmError::Failed(e.to_string()))?;
        let encoded_point = pk.to_encoded_point(false);
        let x = encoded_point
            .x()
            .ok_or(KeyAlgorithmError::Failed("X is missing".to_string()))?;
        let y = encoded_point
            .y()
            .ok_or(KeyAlgorithmError::Failed("Y is missing".to_string()))?;

        Ok(PublicKeyJwk::Ec(PublicKeyJwkEllipticData {
            r#use,
            crv: CURVE.to_string(),
            x: Base64UrlSafeNoPadding::encode_to_string(x)
                .map_err(|e| KeyAlgorithmError::Failed(e.to_string()))?,
            y: Some(
                Base64UrlSafeNoPadding::encode_to_string(y)
                    .map_err(|e| KeyAlgorithmError::Failed(e.to_string()))?,
            ),
        }))
    }

    fn jwk_to_bytes(&self, jwk: &PublicKeyJwk) -> Result<Vec<u8>, KeyAlgorithmError> {
        let PublicKeyJwk::Ec(data) = jwk else {
            return Err(KeyAlgorithmError::Failed("invalid kty".to_string()));
        };
        if data.crv != CURVE {
            return Err(KeyAlgorithmError::Failed("invalid crv".to_string()));
        }

        let x = Base64UrlSafeNoPadding::decode_to_vec(&data.x, None)
            .map_err(|e| KeyAlgorithmError::Failed(e.to_string()))?;
        let y = Base64UrlSafeNoPadding::decode_to_vec(
            data.y
                .as_ref()
                .ok_or(KeyAlgorithmError::Failed("Y is missing".to_string()))?,
            None,
        )
        .map_err(|e| KeyAlgorithmError::Failed(e.to_string()))?;
        if x.len() != 32 || y.len() != 32 {
            return Err(KeyAlgorithmError::Failed(
                "invalid coordinate length".to_string(),
            ));
        }

        let encoded_point = EncodedPoint::<k256::Secp256k1>::from_affine_coordinates(
            GenericArray::from_slice(&x),
            GenericArray::from_slice(&y),
            true,
        );

        self.normalize_public_key(encoded_point.as_bytes())
    }

    fn normalize_public_key(&self, bytes: &[u8]) -> Result<Vec<u8>, KeyAlgorithmError> {
        Ok(Secp256k1Signer::to_bytes(bytes)?)
    }
}
