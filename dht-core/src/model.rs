use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyAlgorithmType {
    #[strum(serialize = "EDDSA")]
    Eddsa,
    #[strum(serialize = "ES256")]
    Es256,
    #[strum(serialize = "SECP256K1")]
    Secp256k1,
}

#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, PartialOrd, Ord)]
pub enum StorageType {
    #[strum(serialize = "INTERNAL")]
    Internal,
}

/// Registered DID methods, named as they appear in `did:{method}:...`.
#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, PartialOrd, Ord)]
pub enum DidMethodType {
    #[strum(serialize = "dht")]
    Dht,
}
