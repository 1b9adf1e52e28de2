use serde::{Deserialize, Serialize};

use crate::common_models::macros::{impl_display, impl_from, impl_into};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct DidValue(String);
impl_display!(DidValue);
impl_from!(DidValue; String);
impl_into!(DidValue; String);

impl DidValue {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Method name, e.g. `dht` for `did:dht:...`
    pub fn method(&self) -> Option<&str> {
        let mut parts = self.0.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some("did"), Some(method), Some(_)) if !method.is_empty() => Some(method),
            _ => None,
        }
    }

    /// Method specific identifier, e.g. the z-base-32 key of `did:dht:...`
    pub fn method_id(&self) -> Option<&str> {
        self.method()?;
        self.0.splitn(3, ':').nth(2)
    }
}

impl From<&str> for DidValue {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
