use std::{collections::HashMap, sync::Arc};

use dht_crypto::SignerError;

use crate::{
    common_models::key::Key,
    key_storage::{model::SignatureProvider, provider::KeyProvider, KeyStorage},
};

pub struct KeyProviderImpl {
    storages: HashMap<String, Arc<dyn KeyStorage>>,
}

impl KeyProviderImpl {
    pub fn new(storages: HashMap<String, Arc<dyn KeyStorage>>) -> Self {
        Self { storages }
    }
}

impl KeyProvider for KeyProviderImpl {
    fn get_key_storage(&self, storage_type: &str) -> Option<Arc<dyn KeyStorage>> {
        self.storages.get(storage_type).cloned()
    }
}

pub struct SignatureProviderImpl {
    storage: Arc<dyn KeyStorage>,
    key: Key,
    jwk_key_id: Option<String>,
}

impl SignatureProviderImpl {
    pub fn new(storage: Arc<dyn KeyStorage>, key: Key, jwk_key_id: Option<String>) -> Self {
        Self {
            storage,
            key,
            jwk_key_id,
        }
    }
}

#[async_trait::async_trait]
impl SignatureProvider for SignatureProviderImpl {
    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignerError> {
        self.storage.sign(&self.key, message).await
    }

    fn get_key_id(&self) -> Option<String> {
        self.jwk_key_id.to_owned()
    }

    fn get_public_key(&self) -> Vec<u8> {
        self.key.public_key.to_owned()
    }
}
