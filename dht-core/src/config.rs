use dht_providers::did::imp::dht::DEFAULT_RELAY_URL;

pub struct DhtCoreConfig {
    pub did_method_config: DidMethodConfig,
}

pub struct DidMethodConfig {
    pub relay_url: String,
    /// Passphrase protecting private keys held by the internal key storage.
    pub key_storage_encryption: Option<String>,
}

impl Default for DhtCoreConfig {
    fn default() -> Self {
        Self {
            did_method_config: DidMethodConfig {
                relay_url: DEFAULT_RELAY_URL.to_string(),
                key_storage_encryption: None,
            },
        }
    }
}
