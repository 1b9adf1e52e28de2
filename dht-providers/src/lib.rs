//! Building blocks of the did:dht method.
//!
//! Codecs for the wire formats involved ([`bencode`], [`dns`]), key handling
//! ([`key_algorithm`], [`key_storage`]), the HTTP transport ([`http_client`])
//! and the DID method itself ([`did`]).

pub mod bencode;
pub mod common_dto;
pub mod common_models;
pub mod did;
pub mod dns;
pub mod http_client;
pub mod key_algorithm;
pub mod key_storage;
pub mod util;
