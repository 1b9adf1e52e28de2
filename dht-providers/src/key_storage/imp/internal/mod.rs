//! In-memory key storage, private keys kept in the key reference.

use std::sync::Arc;

use cocoon::MiniCocoon;
use dht_crypto::{imp::utilities, SignerError};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::{
    common_models::key::{Key, KeyId},
    key_algorithm::provider::KeyAlgorithmProvider,
    key_storage::{
        error::KeyStorageError,
        model::{KeySecurity, KeyStorageCapabilities, StorageGeneratedKey},
        KeyStorage,
    },
};


pub const INTERNAL: &str = "INTERNAL";

pub struct InternalKeyProvider {
    key_algorithm_provider: Arc<dyn KeyAlgorithmProvider>,
    encryption_key: Option<Zeroizing<[u8; 32]>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    pub encryption: Option<String>,
}

impl InternalKeyProvider {
    pub fn new(key_algorithm_provider: Arc<dyn KeyAlgorithmProvider>, params: Params) -> Self {
        Self {
            key_algorithm_provider,
            encryption_key: params
                .encryption
                .map(|passphrase| convert_passphrase_to_encryption_key(&passphrase)),
        }
    }
}

#[async_trait::async_trait]
impl KeyStorage for InternalKeyProvider {
    async fn generate(
        &self,
        _key_id: &KeyId,
        key_type: &str,
    ) -> Result<StorageGeneratedKey, KeyStorageError> {
        let key_pair = self
            .key_algorithm_provider
            .get_key_algorithm(key_type)
            .ok_or(KeyStorageError::InvalidKeyAlgorithm(key_type.to_owned()))?
            .generate_key_pair();

        Ok(StorageGeneratedKey {
            public_key: key_pair.public,
            key_reference: encrypt_if_password_is_provided(
                &key_pair.private,
                self.encryption_key.as_deref(),
            )?,
        })
    }

    async fn sign(&self, key: &Key, message: &[u8]) -> Result<Vec<u8>, SignerError> {
        let signer = self
            .key_algorithm_provider
            .get_signer(&key.key_type)
            .map_err(|e| SignerError::MissingAlgorithm(e.to_string()))?;

        let private_key =
            decrypt_if_password_is_provided(&key.key_reference, self.encryption_key.as_deref())
                .map_err(|_| SignerError::CouldNotExtractKeyPair)?;

        signer.sign(message, &key.public_key, &private_key)
    }

    fn public_key(&self, key: &Key) -> Result<Vec<u8>, KeyStorageError> {
        let algorithm = self
            .key_algorithm_provider
            .get_key_algorithm(&key.key_type)
            .ok_or_else(|| KeyStorageError::InvalidKeyAlgorithm(key.key_type.to_owned()))?;

        Ok(algorithm.normalize_public_key(&key.public_key)?)
    }

    fn get_capabilities(&self) -> KeyStorageCapabilities {
        KeyStorageCapabilities {
            algorithms: vec![
                "EDDSA".to_string(),
                "SECP256K1".to_string(),
                "ES256".to_string(),
            ],
            security: vec![KeySecurity::Software],
            features: vec![],
        }
    }
}

pub fn decrypt_if_password_is_provided(
    data: &[u8],
    encryption_key: Option<&[u8; 32]>,
) -> Result<Zeroizing<Vec<u8>>, KeyStorageError> {
    match encryption_key {
        None => Ok(Zeroizing::new(data.to_vec())),
        Some(encryption_key) => {
            // seed is not used for decryption, so passing dummy value
            let cocoon = MiniCocoon::from_key(encryption_key, &[0u8; 32]);
            cocoon
                .unwrap(data)
                .map(Zeroizing::new)
                .map_err(|_| KeyStorageError::PasswordDecryptionFailure)
        }
    }
}

fn encrypt_if_password_is_provided(
    buffer: &[u8],
    encryption_key: Option<&[u8; 32]>,
) -> Result<Vec<u8>, KeyStorageError> {
    match encryption_key {
        None => Ok(buffer.to_vec()),
        Some(encryption_key) => {
            let mut cocoon =
                MiniCocoon::from_key(encryption_key, &utilities::generate_random_seed_32());
            cocoon
                .wrap(buffer)
                .map_err(|_| KeyStorageError::Failed("Encryption failure".to_string()))
        }
    }
}

/// Simplified KDF
/// * TODO: use pbkdf2 or similar algorithm to prevent dictionary brute-force password attack
pub fn convert_passphrase_to_encryption_key(passphrase: &str) -> Zeroizing<[u8; 32]> {
    Zeroizing::new(Sha256::digest(passphrase).into())
}
