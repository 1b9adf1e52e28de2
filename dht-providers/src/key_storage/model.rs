//! `struct`s and `enum`s for key storage provider.

use dht_crypto::SignerError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeySecurity {
    Hardware,
    Software,
}

#[derive(Clone, Debug, Default)]
pub struct KeyStorageCapabilities {
    pub features: Vec<String>,
    pub algorithms: Vec<String>,
    pub security: Vec<KeySecurity>,
}

pub struct StorageGeneratedKey {
    pub public_key: Vec<u8>,
    pub key_reference: Vec<u8>,
}

/// Signs with a single bound key.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait SignatureProvider: Send + Sync {
    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignerError>;

    fn get_key_id(&self) -> Option<String>;

    fn get_public_key(&self) -> Vec<u8>;
}

pub type AuthenticationFn = Box<dyn SignatureProvider>;
