//! Enumerates errors related to DID method provider.

use thiserror::Error;

use crate::{
    common_models::did::DidValue,
    key_algorithm::error::KeyAlgorithmError,
    key_storage::error::{KeyStorageError, KeyStorageProviderError},
};

#[derive(Debug, Error)]
pub enum DidMethodError {
    #[error("Key algorithm not found")]
    KeyAlgorithmNotFound,
    #[error("Could not create: `{0}`")]
    CouldNotCreate(String),
    #[error("DID not found: `{0}`")]
    NotFound(DidValue),
    #[error("Invalid format: `{0}`")]
    Format(String),
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Stale sequence number {seq}, last seen {last_seen}")]
    StaleSequence {
        seq: i64,
        last_seen: i64,
    },
    #[error("Transport error: `{0}`")]
    Transport(String),
    #[error("Invalid configuration: `{0}`")]
    Configuration(String),
    #[error("Key algorithm error: `{0}`")]
    KeyAlgorithm(#[from] KeyAlgorithmError),
    #[error("Key storage error: `{0}`")]
    KeyStorage(#[from] KeyStorageError),
    #[error("Key storage provider error: `{0}`")]
    KeyStorageProvider(#[from] KeyStorageProviderError),
}

#[derive(Debug, Error)]
pub enum DidMethodProviderError {
    #[error("Did method error: `{0}`")]
    DidMethod(#[from] DidMethodError),
    #[error("Missing did method name in did value")]
    MissingDidMethodNameInDidValue,
    #[error("Missing did provider: `{0}`")]
    MissingProvider(String),
}
