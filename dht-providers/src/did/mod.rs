//! Tools for DID method operations and metadata.
//!
//! Decentralized identifiers (DIDs) are a type of globally unique identifier
//! for a resource. The DID is similar to a URL and can be resolved to a DID
//! document which offers metadata about the identified resource.
//!
//! Use this module to perform all operations associated with the relevant
//! DID method.

use async_trait::async_trait;

use crate::{
    common_models::did::DidValue,
    did::{
        error::DidMethodError,
        model::{CreateOptions, CreatedDid, DidCapabilities, DidDocument},
    },
};

pub mod error;
pub mod imp;
pub mod model;
pub mod provider;

/// Performs operations on DIDs and provides DID utilities.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait DidMethod: Send + Sync {
    /// Creates and publishes a DID.
    async fn create(&self, options: CreateOptions) -> Result<CreatedDid, DidMethodError>;

    /// Resolve a DID to its DID document.
    async fn resolve(&self, did: &DidValue) -> Result<DidDocument, DidMethodError>;

    /// Operations and key algorithms supported by the method.
    fn get_capabilities(&self) -> DidCapabilities;
}
