//! Implementations of key algorithms.

pub mod provider;

pub mod eddsa;
pub mod es256;
pub mod secp256k1;


pub const EDDSA: &str = "EDDSA";
pub const ES256: &str = "ES256";
pub const SECP256K1: &str = "SECP256K1";
