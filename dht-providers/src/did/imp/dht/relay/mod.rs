//! Pkarr style HTTP relay storing BEP44 envelopes under the z-base-32 key.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::error::RelayError;
use crate::{
    common_models::did::DidValue,
    http_client::{self, HttpClient},
    util::zbase32,
};

#[cfg(test)]
mod test;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Relay: Send + Sync {
    /// Stores an encoded envelope for `public_key`.
    async fn put(&self, public_key: &[u8], envelope: Vec<u8>) -> Result<(), RelayError>;

    /// Fetches the encoded envelope published for `did`.
    async fn get(&self, did: &DidValue) -> Result<Vec<u8>, RelayError>;
}

pub struct PkarrRelay {
    base_url: String,
    client: Arc<dyn HttpClient>,
}

impl PkarrRelay {
    pub fn new(base_url: &str, client: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    fn url(&self, identifier: &str) -> String {
        format!("{}/{identifier}", self.base_url)
    }
}

#[async_trait]
impl Relay for PkarrRelay {
    async fn put(&self, public_key: &[u8], envelope: Vec<u8>) -> Result<(), RelayError> {
        let identifier = zbase32::encode(public_key);
        debug!(%identifier, size = envelope.len(), "putting envelope to relay");

        let response = self
            .client
            .put(&self.url(&identifier))
            .header("Content-Type", "application/octet-stream")
            .body(envelope)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status.is_success() {
            return Err(RelayError::UnexpectedStatus(response.status.0));
        }
        Ok(())
    }

    async fn get(&self, did: &DidValue) -> Result<Vec<u8>, RelayError> {
        let identifier = did
            .method_id()
            .filter(|_| did.method() == Some("dht"))
            .ok_or_else(|| RelayError::InvalidDid(did.to_string()))?;
        debug!(%identifier, "fetching envelope from relay");

        let response = self
            .client
            .get(&self.url(identifier))
            .send()
            .await
            .map_err(transport_error)?;

        match response.status.0 {
            404 => Err(RelayError::NotFound),
            _ if response.status.is_success() => Ok(response.body),
            status => Err(RelayError::UnexpectedStatus(status)),
        }
    }
}

fn transport_error(error: http_client::Error) -> RelayError {
    RelayError::Transport(error.to_string())
}
