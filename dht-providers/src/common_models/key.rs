use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::{impl_display, impl_from, impl_into};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct KeyId(Uuid);
impl_display!(KeyId);
impl_from!(KeyId; Uuid);
impl_into!(KeyId; Uuid);

impl KeyId {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Handle to a key held by a key storage.
///
/// `key_reference` is opaque to everything but the storage that produced it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Key {
    pub id: KeyId,
    pub public_key: Vec<u8>,
    pub key_reference: Vec<u8>,
    pub storage_type: String,
    pub key_type: String,
}
