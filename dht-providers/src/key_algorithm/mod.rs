//! Tools for key algorithm representations and finding signer IDs.
//!
//! This module provides utilities for finding signer IDs and converting public
//! keys between raw bytes and JWK.
//!
//! Key pairs can also be generated with this module, though generating key pairs with
//! the [key storage][ks] module is generally preferred for private key protection.
//!
//! [ks]: crate::key_storage

use error::KeyAlgorithmError;
use model::GeneratedKey;

use crate::common_models::PublicKeyJwk;

pub mod error;
pub mod imp;
pub mod model;
pub mod provider;

/// Find signer IDs and convert key representations.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait KeyAlgorithm: Send + Sync {
    /// Finds related crypto signer ID.
    fn get_signer_algorithm_id(&self) -> String;

    /// Generates a new in-memory key-pair.
    fn generate_key_pair(&self) -> GeneratedKey;

    /// Converts public key bytes to JWK.
    fn bytes_to_jwk(
        &self,
        bytes: &[u8],
        r#use: Option<String>,
    ) -> Result<PublicKeyJwk, KeyAlgorithmError>;

    /// Converts JWK to key bytes.
    fn jwk_to_bytes(&self, jwk: &PublicKeyJwk) -> Result<Vec<u8>, KeyAlgorithmError>;

    /// Checks raw public key bytes and returns them in the canonical form
    /// used when publishing (compressed points for curves that have one).
    fn normalize_public_key(&self, bytes: &[u8]) -> Result<Vec<u8>, KeyAlgorithmError>;
}
