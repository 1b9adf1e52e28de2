//! Implementation of did:dht.
//!
//! A DID document is written as DNS TXT records, packed into a DNS message,
//! signed as a BEP44 mutable item with the identity key and stored on a relay
//! fronting the Mainline DHT. The method specific identifier is the z-base-32
//! encoded Ed25519 identity key, so resolving needs nothing but the DID.
//!
//! See <https://did-dht.com>.

use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::{debug, warn};

use self::{
    bep44::Envelope,
    error::{Bep44Error, RelayError},
    records::{Decoder, VERIFICATION_METHOD_TYPE},
    relay::{PkarrRelay, Relay},
};
use crate::{
    common_models::{
        did::DidValue,
        key::{Key, KeyId},
    },
    did::{
        error::DidMethodError,
        model::{
            CreateOptions, CreatedDid, DidCapabilities, DidDocument, DidService,
            DidVerificationMethod, Operation, Purpose, VerificationMethodOptions,
        },
        DidMethod,
    },
    dns::Message,
    http_client::HttpClient,
    key_algorithm::{
        imp::{EDDSA, ES256, SECP256K1},
        provider::KeyAlgorithmProvider,
    },
    key_storage::{imp::provider::SignatureProviderImpl, provider::KeyProvider, KeyStorage},
    util::zbase32,
};

pub mod bep44;
pub mod error;
pub mod records;
pub mod relay;


pub const METHOD_NAME: &str = "dht";
pub const DEFAULT_RELAY_URL: &str = "https://diddht.tbddev.org";
pub const DEFAULT_TTL: u32 = 7200;

const IDENTITY_KEY_LEN: usize = 32;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Params {
    pub relay_url: String,
    pub ttl: u32,
    /// Key storage used when creating without explicit keys.
    pub key_storage: String,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            relay_url: DEFAULT_RELAY_URL.to_string(),
            ttl: DEFAULT_TTL,
            key_storage: "INTERNAL".to_string(),
        }
    }
}

pub struct DhtDidMethod {
    params: Params,
    relay: Arc<dyn Relay>,
    client: Arc<dyn HttpClient>,
    key_provider: Arc<dyn KeyProvider>,
    key_algorithm_provider: Arc<dyn KeyAlgorithmProvider>,
    last_seq: AtomicI64,
}

impl DhtDidMethod {
    pub fn new(
        params: Params,
        client: Arc<dyn HttpClient>,
        key_provider: Arc<dyn KeyProvider>,
        key_algorithm_provider: Arc<dyn KeyAlgorithmProvider>,
    ) -> Self {
        Self {
            relay: Arc::new(PkarrRelay::new(&params.relay_url, client.clone())),
            params,
            client,
            key_provider,
            key_algorithm_provider,
            last_seq: AtomicI64::new(0),
        }
    }

    /// Resolves `did`, rejecting an envelope older than `last_seen`.
    ///
    /// Returns the document together with the accepted sequence number.
    pub async fn resolve_with_sequence(
        &self,
        did: &DidValue,
        last_seen: Option<i64>,
    ) -> Result<(DidDocument, i64), DidMethodError> {
        let identity_key = parse_did(did)?;

        let bytes = self.relay.get(did).await.map_err(|error| match error {
            RelayError::NotFound => DidMethodError::NotFound(did.to_owned()),
            RelayError::InvalidDid(did) => DidMethodError::Format(format!("invalid DID {did}")),
            error => DidMethodError::Transport(error.to_string()),
        })?;

        let verifier = self
            .key_algorithm_provider
            .get_signer(EDDSA)
            .map_err(|_| DidMethodError::KeyAlgorithmNotFound)?;

        let envelope = Envelope::decode(&bytes, verifier.as_ref()).map_err(|error| {
            if error == Bep44Error::InvalidSignature {
                warn!(%did, "DID record signature verification failed");
                DidMethodError::InvalidSignature
            } else {
                DidMethodError::Format(error.to_string())
            }
        })?;

        if envelope.public_key() != identity_key.as_slice() {
            return Err(DidMethodError::Format(
                "record is signed by a different key".to_string(),
            ));
        }

        if let Some(last_seen) = last_seen {
            envelope.check_sequence(last_seen).map_err(|_| {
                warn!(%did, seq = envelope.seq(), last_seen, "stale DID record");
                DidMethodError::StaleSequence {
                    seq: envelope.seq(),
                    last_seen,
                }
            })?;
        }

        debug!(%did, seq = envelope.seq(), "resolved DID record");

        let message =
            Message::parse(envelope.value()).map_err(|e| DidMethodError::Format(e.to_string()))?;
        let document =
            Decoder::from_message(&message)?.decode(did, self.key_algorithm_provider.as_ref())?;

        Ok((document, envelope.seq()))
    }

    /// Unix time in seconds, bumped past the last issued value.
    fn next_sequence(&self) -> i64 {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let previous = self
            .last_seq
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);

        now.max(previous + 1)
    }

    fn key_storage(&self, storage_type: &str) -> Result<Arc<dyn KeyStorage>, DidMethodError> {
        self.key_provider
            .get_key_storage(storage_type)
            .ok_or_else(|| {
                DidMethodError::Configuration(format!("unknown key storage {storage_type}"))
            })
    }

    async fn generate_identity_key(
        &self,
        storage: Option<&Arc<dyn KeyStorage>>,
    ) -> Result<VerificationMethodOptions, DidMethodError> {
        let storage = match storage {
            Some(storage) => storage.clone(),
            None => self.key_storage(&self.params.key_storage)?,
        };

        let id = KeyId::new_random();
        let generated = storage.generate(&id, EDDSA).await?;

        Ok(VerificationMethodOptions {
            key: Key {
                id,
                public_key: generated.public_key,
                key_reference: generated.key_reference,
                storage_type: self.params.key_storage.clone(),
                key_type: EDDSA.to_string(),
            },
            fragment: None,
            purposes: vec![
                Purpose::Authentication,
                Purpose::AssertionMethod,
                Purpose::CapabilityInvocation,
                Purpose::CapabilityDelegation,
            ],
            controller: None,
        })
    }

    fn validate(&self, options: &CreateOptions) -> Result<(), DidMethodError> {
        let supported = self.get_capabilities().key_algorithms;
        let mut fragments = HashSet::new();

        for (index, method) in options.verification_methods.iter().enumerate() {
            if method.key.public_key.is_empty() {
                return Err(DidMethodError::Configuration(format!(
                    "verification method {index} has no key material"
                )));
            }
            if !supported.contains(&method.key.key_type)
                || self
                    .key_algorithm_provider
                    .get_key_algorithm(&method.key.key_type)
                    .is_none()
            {
                return Err(DidMethodError::Configuration(format!(
                    "unsupported key algorithm {}",
                    method.key.key_type
                )));
            }
            if index == 0 && method.key.key_type != EDDSA {
                return Err(DidMethodError::Configuration(
                    "identity key must be Ed25519".to_string(),
                ));
            }

            let fragment = fragment(index, method);
            check_field("fragment", &fragment)?;
            if let Some(controller) = &method.controller {
                check_field("controller", controller)?;
            }
            if !fragments.insert(fragment.clone()) {
                return Err(DidMethodError::Configuration(format!(
                    "duplicate fragment {fragment}"
                )));
            }
        }

        for service in &options.services {
            check_field("service fragment", &service.fragment)?;
            check_field("service type", &service.r#type)?;
            if service.service_endpoint.is_empty() {
                return Err(DidMethodError::Configuration(format!(
                    "service {} has no endpoint",
                    service.fragment
                )));
            }
            for endpoint in &service.service_endpoint {
                if endpoint.is_empty() || endpoint.contains([',', ';']) {
                    return Err(DidMethodError::Configuration(format!(
                        "invalid endpoint `{endpoint}` of service {}",
                        service.fragment
                    )));
                }
            }
            if !fragments.insert(service.fragment.clone()) {
                return Err(DidMethodError::Configuration(format!(
                    "duplicate fragment {}",
                    service.fragment
                )));
            }
        }

        Ok(())
    }

    fn build_document(
        &self,
        did: &DidValue,
        options: &CreateOptions,
        public_keys: Vec<Vec<u8>>,
    ) -> Result<DidDocument, DidMethodError> {
        let mut document = DidDocument::new(did.to_owned());

        for (index, (method, public_key)) in options
            .verification_methods
            .iter()
            .zip(public_keys)
            .enumerate()
        {
            let algorithm = self
                .key_algorithm_provider
                .get_key_algorithm(&method.key.key_type)
                .ok_or(DidMethodError::KeyAlgorithmNotFound)?;
            let id = format!("{did}#{}", fragment(index, method));

            document.verification_method.push(DidVerificationMethod {
                id: id.clone(),
                r#type: VERIFICATION_METHOD_TYPE.to_string(),
                controller: method.controller.clone().unwrap_or_else(|| did.to_string()),
                public_key_jwk: algorithm.bytes_to_jwk(&public_key, None)?,
            });

            for purpose in &method.purposes {
                let references = document.references_mut(*purpose);
                if !references.contains(&id) {
                    references.push(id.clone());
                }
            }
        }

        for service in &options.services {
            document.service.push(DidService {
                id: format!("{did}#{}", service.fragment),
                r#type: service.r#type.clone(),
                service_endpoint: service.service_endpoint.clone(),
            });
        }

        Ok(document)
    }
}

#[async_trait]
impl DidMethod for DhtDidMethod {
    async fn create(&self, mut options: CreateOptions) -> Result<CreatedDid, DidMethodError> {
        if options.verification_methods.is_empty() {
            let identity = self
                .generate_identity_key(options.key_storage.as_ref())
                .await?;
            options.verification_methods.push(identity);
        }

        self.validate(&options)?;

        let mut storages = Vec::with_capacity(options.verification_methods.len());
        let mut public_keys = Vec::with_capacity(options.verification_methods.len());
        for method in &options.verification_methods {
            let storage = match &options.key_storage {
                Some(storage) => storage.clone(),
                None => self.key_storage(&method.key.storage_type)?,
            };
            public_keys.push(storage.public_key(&method.key)?);
            storages.push(storage);
        }

        let identity_key = public_keys[0].clone();
        if identity_key.len() != IDENTITY_KEY_LEN {
            return Err(DidMethodError::Configuration(
                "identity key must be a 32 byte Ed25519 key".to_string(),
            ));
        }

        let did = DidValue::from(format!(
            "did:{METHOD_NAME}:{}",
            zbase32::encode(&identity_key)
        ));
        let document = self.build_document(&did, &options, public_keys)?;

        let payload = records::encode_document(
            &document,
            self.params.ttl,
            self.key_algorithm_provider.as_ref(),
        )?
        .pack()
        .map_err(|e| DidMethodError::Format(e.to_string()))?;

        let identity = &options.verification_methods[0];
        let signer = SignatureProviderImpl::new(
            storages[0].clone(),
            Key {
                public_key: identity_key.clone(),
                ..identity.key.clone()
            },
            Some(format!("{did}#{}", fragment(0, identity))),
        );

        let seq = self.next_sequence();
        let envelope = Envelope::new(payload, seq, &signer)
            .await
            .map_err(|e| DidMethodError::CouldNotCreate(e.to_string()))?;

        let relay = match &options.relay_url {
            Some(relay_url) => Arc::new(PkarrRelay::new(relay_url, self.client.clone())),
            None => self.relay.clone(),
        };
        relay
            .put(&identity_key, envelope.encode())
            .await
            .map_err(|e| DidMethodError::Transport(e.to_string()))?;

        debug!(%did, seq, "published DID record");

        Ok(CreatedDid { did, document })
    }

    async fn resolve(&self, did: &DidValue) -> Result<DidDocument, DidMethodError> {
        self.resolve_with_sequence(did, None)
            .await
            .map(|(document, _)| document)
    }

    fn get_capabilities(&self) -> DidCapabilities {
        DidCapabilities {
            operations: vec![Operation::RESOLVE, Operation::CREATE],
            key_algorithms: vec![EDDSA.to_string(), SECP256K1.to_string(), ES256.to_string()],
        }
    }
}

fn fragment(index: usize, method: &VerificationMethodOptions) -> String {
    method.fragment.clone().unwrap_or_else(|| index.to_string())
}

fn check_field(name: &str, value: &str) -> Result<(), DidMethodError> {
    if value.is_empty() || value.contains([';', '=', ',', '#']) {
        return Err(DidMethodError::Configuration(format!(
            "invalid {name} `{value}`"
        )));
    }
    Ok(())
}

/// Identity key bytes of a did:dht identifier.
fn parse_did(did: &DidValue) -> Result<Vec<u8>, DidMethodError> {
    if did.method() != Some(METHOD_NAME) {
        return Err(DidMethodError::Format(format!("not a did:dht: {did}")));
    }

    let identifier = did
        .method_id()
        .ok_or_else(|| DidMethodError::Format(format!("invalid DID {did}")))?;
    let key = zbase32::decode(identifier).map_err(|e| DidMethodError::Format(e.to_string()))?;

    if key.len() != IDENTITY_KEY_LEN {
        return Err(DidMethodError::Format(format!(
            "identifier encodes {} bytes, expected {IDENTITY_KEY_LEN}",
            key.len()
        )));
    }
    Ok(key)
}
