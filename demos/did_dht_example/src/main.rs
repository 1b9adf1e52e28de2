use std::sync::Arc;

use dht_core::{
    config::{DhtCoreConfig, DidMethodConfig},
    DhtCore,
};
use dht_providers::{
    did::{
        model::{CreateOptions, ServiceOptions},
        DidMethod,
    },
    http_client::imp::reqwest_client::ReqwestClient,
};

#[tokio::main]
async fn main() {
    let relay_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://diddht.tbddev.org".to_string());

    let core = DhtCore::new(
        Some(DhtCoreConfig {
            did_method_config: DidMethodConfig {
                relay_url,
                key_storage_encryption: None,
            },
        }),
        Arc::new(ReqwestClient::default()),
    );
    let did_service = core.did_service;

    //
    // Publishing a new DID with a generated identity key and a linked domain
    //

    let created = did_service
        .create_did(CreateOptions {
            services: vec![ServiceOptions {
                fragment: "domain".to_string(),
                r#type: "LinkedDomains".to_string(),
                service_endpoint: vec!["https://foo.com".to_string()],
            }],
            ..Default::default()
        })
        .await
        .expect("DID creation failed");
    println!("Published {}", created.did);

    //
    // Resolving it back from the relay
    //

    let document = did_service
        .resolve_did(&created.did)
        .await
        .expect("DID resolution failed");
    assert_eq!(document, created.document);

    let json = did_service
        .resolve_did_json(&created.did)
        .await
        .expect("DID resolution failed");
    println!("Resolved {} into:\n{json}", created.did);

    //
    // Using the method implementation directly
    //

    let dht = did_service
        .get_did_method("dht")
        .expect("did:dht is registered");
    let result = dht.resolve(&created.did).await;
    assert!(result.is_ok(), "expected to resolve DID");
}
