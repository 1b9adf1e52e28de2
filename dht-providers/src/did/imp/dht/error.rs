//! Enumerates errors of the DID DHT building blocks.

use dht_crypto::SignerError;
use thiserror::Error;

use crate::bencode::error::BencodeError;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum Bep44Error {
    #[error("Bencode error: `{0}`")]
    Bencode(#[from] BencodeError),
    #[error("Invalid envelope: `{0}`")]
    InvalidEnvelope(String),
    #[error("Payload of {0} bytes exceeds 1000 bytes")]
    PayloadTooLarge(usize),
    #[error("Public key must be 32 bytes, got {0}")]
    InvalidPublicKeyLength(usize),
    #[error("Signature must be 64 bytes, got {0}")]
    InvalidSignatureLength(usize),
    #[error("Could not sign: `{0}`")]
    Signing(SignerError),
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Stale sequence number {seq}, last seen {last_seen}")]
    StaleSequence {
        seq: i64,
        last_seen: i64,
    },
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("Record not found")]
    NotFound,
    #[error("Invalid DID: `{0}`")]
    InvalidDid(String),
    #[error("Unexpected relay response status {0}")]
    UnexpectedStatus(u16),
    #[error("Transport error: `{0}`")]
    Transport(String),
}
