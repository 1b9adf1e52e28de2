//! Key storage: generating keys, signing with them and exporting public keys.
//!
//! Private key material never leaves the storage; callers hold a [`Key`]
//! handle whose `key_reference` only the storage that produced it can use.

use dht_crypto::SignerError;

use crate::common_models::key::{Key, KeyId};

pub mod error;
pub mod imp;
pub mod model;
pub mod provider;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait KeyStorage: Send + Sync {
    async fn generate(
        &self,
        key_id: &KeyId,
        key_type: &str,
    ) -> Result<model::StorageGeneratedKey, error::KeyStorageError>;

    async fn sign(&self, key: &Key, message: &[u8]) -> Result<Vec<u8>, SignerError>;

    /// Raw public key bytes of a stored key, in the algorithm's canonical form.
    fn public_key(&self, key: &Key) -> Result<Vec<u8>, error::KeyStorageError>;

    fn get_capabilities(&self) -> model::KeyStorageCapabilities;
}
