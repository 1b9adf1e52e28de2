//! A service for creating DIDs and resolving DIDs to their DID document.
//!
//! See `demos/did_dht_example` for a walkthrough.

use std::sync::Arc;

use dht_providers::{
    common_models::did::DidValue,
    did::{
        imp::dto::DidDocumentDTO,
        model::{CreateOptions, CreatedDid, DidDocument},
        provider::DidMethodProvider,
        DidMethod,
    },
};
use tracing::debug;

use super::error::DidServiceError;
use crate::model::DidMethodType;

pub struct DidService {
    pub did_provider: Arc<dyn DidMethodProvider>,
}

impl DidService {
    pub fn new(did_provider: Arc<dyn DidMethodProvider>) -> Self {
        Self { did_provider }
    }

    pub fn get_did_method(&self, did_method_id: &str) -> Option<Arc<dyn DidMethod>> {
        self.did_provider.get_did_method(did_method_id)
    }

    /// Creates and publishes a new did:dht.
    pub async fn create_did(&self, options: CreateOptions) -> Result<CreatedDid, DidServiceError> {
        let method_id = DidMethodType::Dht.to_string();
        let method = self
            .get_did_method(&method_id)
            .ok_or(DidServiceError::MissingDidMethod(method_id))?;

        let created = method.create(options).await?;
        debug!(did = %created.did, "created DID");
        Ok(created)
    }

    pub async fn resolve_did(&self, did: &DidValue) -> Result<DidDocument, DidServiceError> {
        Ok(self.did_provider.resolve(did).await?)
    }

    /// Resolves `did` into its DID Core JSON representation.
    pub async fn resolve_did_json(&self, did: &DidValue) -> Result<String, DidServiceError> {
        let document = self.resolve_did(did).await?;
        Ok(serde_json::to_string_pretty(&DidDocumentDTO::from(document))?)
    }
}
