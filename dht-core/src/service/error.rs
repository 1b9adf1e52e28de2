use dht_providers::did::error::{DidMethodError, DidMethodProviderError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DidServiceError {
    #[error("Missing did method: `{0}`")]
    MissingDidMethod(String),
    #[error("Did method error: `{0}`")]
    DidMethod(#[from] DidMethodError),
    #[error("Did method provider error: `{0}`")]
    DidMethodProvider(#[from] DidMethodProviderError),
    #[error("JSON error: `{0}`")]
    Json(#[from] serde_json::Error),
}
