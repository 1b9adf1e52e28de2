//! Enumerates errors related to key storage provider.

use thiserror::Error;

use dht_crypto::SignerError;

use crate::key_algorithm::error::KeyAlgorithmError;

#[derive(Debug, Error)]
pub enum KeyStorageProviderError {
    #[error("Invalid key storage `{0}`")]
    InvalidKeyStorage(String),
}

#[derive(Debug, Error)]
pub enum KeyStorageError {
    #[error("Key storage error: `{0}`")]
    Failed(String),
    #[error("Signer error: `{0}`")]
    SignerError(#[from] SignerError),
    #[error("Key algorithm error: `{0}`")]
    KeyAlgorithmError(#[from] KeyAlgorithmError),
    #[error("Password decryption failure")]
    PasswordDecryptionFailure,
    #[error("Invalid key algorithm `{0}`")]
    InvalidKeyAlgorithm(String),
}
