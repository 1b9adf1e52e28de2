//! `struct`s and `enum`s for DID method provider.

use std::sync::Arc;

use strum::Display;

use crate::{
    common_models::{did::DidValue, key::Key, PublicKeyJwk},
    key_storage::KeyStorage,
};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Operation {
    RESOLVE,
    CREATE,
}

#[derive(Clone, Default)]
pub struct DidCapabilities {
    pub operations: Vec<Operation>,
    pub key_algorithms: Vec<String>,
}

/// Verification relationship of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "camelCase")]
pub enum Purpose {
    Authentication,
    AssertionMethod,
    KeyAgreement,
    CapabilityInvocation,
    CapabilityDelegation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DidDocument {
    pub id: DidValue,
    pub verification_method: Vec<DidVerificationMethod>,
    pub authentication: Vec<String>,
    pub assertion_method: Vec<String>,
    pub key_agreement: Vec<String>,
    pub capability_invocation: Vec<String>,
    pub capability_delegation: Vec<String>,
    pub service: Vec<DidService>,
}

impl DidDocument {
    pub fn new(id: DidValue) -> Self {
        Self {
            id,
            verification_method: vec![],
            authentication: vec![],
            assertion_method: vec![],
            key_agreement: vec![],
            capability_invocation: vec![],
            capability_delegation: vec![],
            service: vec![],
        }
    }

    /// References (verification method ids) of a verification relationship.
    pub fn references(&self, purpose: Purpose) -> &[String] {
        match purpose {
            Purpose::Authentication => &self.authentication,
            Purpose::AssertionMethod => &self.assertion_method,
            Purpose::KeyAgreement => &self.key_agreement,
            Purpose::CapabilityInvocation => &self.capability_invocation,
            Purpose::CapabilityDelegation => &self.capability_delegation,
        }
    }

    pub fn references_mut(&mut self, purpose: Purpose) -> &mut Vec<String> {
        match purpose {
            Purpose::Authentication => &mut self.authentication,
            Purpose::AssertionMethod => &mut self.assertion_method,
            Purpose::KeyAgreement => &mut self.key_agreement,
            Purpose::CapabilityInvocation => &mut self.capability_invocation,
            Purpose::CapabilityDelegation => &mut self.capability_delegation,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DidVerificationMethod {
    pub id: String,
    pub r#type: String,
    pub controller: String,
    pub public_key_jwk: PublicKeyJwk,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DidService {
    pub id: String,
    pub r#type: String,
    pub service_endpoint: Vec<String>,
}

/// Input of [`crate::did::DidMethod::create`].
#[derive(Clone, Default)]
pub struct CreateOptions {
    /// Keys of the document, the first one is the identity key.
    /// Empty means a fresh identity key is generated.
    pub verification_methods: Vec<VerificationMethodOptions>,
    pub services: Vec<ServiceOptions>,
    /// Overrides the method's key storage for generating and signing.
    pub key_storage: Option<Arc<dyn KeyStorage>>,
    /// Overrides the method's relay base URL.
    pub relay_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct VerificationMethodOptions {
    pub key: Key,
    /// Defaults to the position of the key in the document.
    pub fragment: Option<String>,
    pub purposes: Vec<Purpose>,
    /// Defaults to the DID itself.
    pub controller: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceOptions {
    pub fragment: String,
    pub r#type: String,
    pub service_endpoint: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedDid {
    pub did: DidValue,
    pub document: DidDocument,
}
