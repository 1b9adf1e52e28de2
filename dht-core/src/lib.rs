//! The **DHT Core** is a library for publishing and resolving `did:dht`
//! identifiers.
//!
//! A `did:dht` document is stored as a set of DNS TXT records, signed with the
//! identity key as a BEP44 mutable item and published on the Mainline DHT
//! through an HTTP relay. The identifier itself is the z-base-32 encoded
//! identity key, so anyone can resolve and verify it without a registry.
//!
//! ## Repository structure
//!
//! The library consists of three crates:
//!
//! * **Providers**
//!   * Bencode and DNS wire codecs
//!   * Key algorithm provider
//!   * Key storage provider
//!   * DID method provider, with the `did:dht` method (BEP44 envelope, relay client)
//! * **Crypto**: raw-byte signers, kept apart so the cryptographic surface stays
//!   small.
//! * **Core**
//!   * Services
//!
//! The **Core** wires the providers from a [configuration][config::DhtCoreConfig]
//! and exposes the [DID service][service::did_service::DidService].
//!
//! ## Getting started
//!
//! ```ignore rust
//! /// `None` initializes the Core with the default configuration
//! let core = DhtCore::new(None, Arc::new(ReqwestClient::default()));
//!
//! let created = core.did_service.create_did(CreateOptions::default()).await?;
//! let document = core.did_service.resolve_did(&created.did).await?;
//! ```
//!
//! See `demos/did_dht_example` for a complete walkthrough.

use std::{collections::HashMap, sync::Arc};

use config::DhtCoreConfig;
use dht_crypto::imp::{
    signer::{eddsa::EDDSASigner, es256::ES256Signer, secp256k1::Secp256k1Signer},
    CryptoProviderImpl,
};
use dht_providers::{
    did::imp::{
        dht::{DhtDidMethod, Params as DhtParams},
        provider::DidMethodProviderImpl,
    },
    http_client::{imp::reqwest_client::ReqwestClient, HttpClient},
    key_algorithm::{
        imp::{
            eddsa::Eddsa, es256::Es256, provider::KeyAlgorithmProviderImpl, secp256k1::Secp256k1,
        },
        KeyAlgorithm,
    },
    key_storage::{
        imp::{
            internal::{InternalKeyProvider, Params as InternalKeyProviderParams},
            provider::KeyProviderImpl,
        },
        KeyStorage,
    },
};
use model::{DidMethodType, KeyAlgorithmType, StorageType};
use service::did_service::DidService;

pub mod config;
pub mod model;
pub mod service;

pub struct DhtCore {
    pub did_service: DidService,
}

impl Default for DhtCore {
    fn default() -> Self {
        Self::new(None, Arc::new(ReqwestClient::default()))
    }
}

impl DhtCore {
    pub fn new(config: Option<DhtCoreConfig>, client: Arc<dyn HttpClient>) -> Self {
        let config = config.unwrap_or_default();

        // initialize crypto provider
        let crypto_provider = Arc::new(CryptoProviderImpl::new(HashMap::from_iter(vec![
            ("Ed25519".to_string(), Arc::new(EDDSASigner {}) as _),
            ("ES256".to_string(), Arc::new(ES256Signer {}) as _),
            ("SECP256K1".to_string(), Arc::new(Secp256k1Signer {}) as _),
        ])));

        // initialize key algorithm provider
        let key_algorithms: HashMap<String, Arc<dyn KeyAlgorithm>> = HashMap::from_iter(vec![
            (KeyAlgorithmType::Eddsa.to_string(), Arc::new(Eddsa) as _),
            (KeyAlgorithmType::Es256.to_string(), Arc::new(Es256) as _),
            (
                KeyAlgorithmType::Secp256k1.to_string(),
                Arc::new(Secp256k1) as _,
            ),
        ]);
        let key_algorithm_provider = Arc::new(KeyAlgorithmProviderImpl::new(
            key_algorithms,
            crypto_provider,
        ));

        // initialize key storage provider
        let key_storages: HashMap<String, Arc<dyn KeyStorage>> = HashMap::from_iter(vec![(
            StorageType::Internal.to_string(),
            Arc::new(InternalKeyProvider::new(
                key_algorithm_provider.clone(),
                InternalKeyProviderParams {
                    encryption: config.did_method_config.key_storage_encryption,
                },
            )) as _,
        )]);
        let key_storage_provider = Arc::new(KeyProviderImpl::new(key_storages));

        // initialize did method provider
        let did_methods = HashMap::from_iter(vec![(
            DidMethodType::Dht.to_string(),
            Arc::new(DhtDidMethod::new(
                DhtParams {
                    relay_url: config.did_method_config.relay_url,
                    key_storage: StorageType::Internal.to_string(),
                    ..Default::default()
                },
                client,
                key_storage_provider,
                key_algorithm_provider,
            )) as _,
        )]);
        let did_method_provider = Arc::new(DidMethodProviderImpl::new(did_methods));

        Self {
            did_service: DidService::new(did_method_provider),
        }
    }
}
