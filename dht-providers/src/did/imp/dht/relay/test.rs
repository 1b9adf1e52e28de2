use std::sync::Arc;

use wiremock::{
    matchers::{body_bytes, method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::{PkarrRelay, Relay};
use crate::{
    common_models::did::DidValue,
    did::imp::dht::error::RelayError,
    http_client::{imp::reqwest_client::ReqwestClient, MockHttpClient},
};

const KEY: [u8; 32] = [
    0x60, 0x27, 0x07, 0x60, 0xbd, 0xac, 0x60, 0xd3, 0xc3, 0x94, 0xa6, 0x80, 0x2d, 0xc1, 0x26, 0x96,
    0x5d, 0x87, 0x1f, 0x24, 0xfd, 0xeb, 0xc3, 0x38, 0x51, 0x66, 0xeb, 0xfb, 0xd0, 0x85, 0x19, 0x61,
];
const IDENTIFIER: &str = "cyuoqaf7itop8ohww4yn5ojg13qaq83r9zihgqntc5i9zwrfdfoo";

fn did() -> DidValue {
    format!("did:dht:{IDENTIFIER}").into()
}

fn relay(base_url: &str) -> PkarrRelay {
    PkarrRelay::new(base_url, Arc::new(ReqwestClient::default()))
}

#[tokio::test]
async fn test_put_uses_zbase32_path() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/{IDENTIFIER}")))
        .and(body_bytes(b"envelope".to_vec()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    relay(&format!("{}/", mock_server.uri()))
        .put(&KEY, b"envelope".to_vec())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_returns_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{IDENTIFIER}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"envelope".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = relay(&mock_server.uri()).get(&did()).await.unwrap();
    assert_eq!(b"envelope".to_vec(), body);
}

#[tokio::test]
async fn test_get_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    assert_eq!(
        Err(RelayError::NotFound),
        relay(&mock_server.uri()).get(&did()).await
    );
}

#[tokio::test]
async fn test_error_statuses() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let relay = relay(&mock_server.uri());
    assert_eq!(
        Err(RelayError::UnexpectedStatus(502)),
        relay.get(&did()).await
    );
    assert_eq!(
        Err(RelayError::UnexpectedStatus(400)),
        relay.put(&KEY, vec![]).await
    );
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let relay = relay("http://127.0.0.1:1");

    assert!(matches!(
        relay.get(&did()).await,
        Err(RelayError::Transport(_))
    ));
    assert!(matches!(
        relay.put(&KEY, vec![]).await,
        Err(RelayError::Transport(_))
    ));
}

#[tokio::test]
async fn test_get_rejects_other_methods() {
    let relay = PkarrRelay::new("https://relay.example", Arc::new(MockHttpClient::default()));

    assert!(matches!(
        relay.get(&"did:web:example.com".into()).await,
        Err(RelayError::InvalidDid(_))
    ));
}
