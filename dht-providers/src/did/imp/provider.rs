use std::{collections::HashMap, sync::Arc};

use crate::{
    common_models::did::DidValue,
    did::{
        error::DidMethodProviderError, model::DidDocument, provider::DidMethodProvider, DidMethod,
    },
};

pub struct DidMethodProviderImpl {
    did_methods: HashMap<String, Arc<dyn DidMethod>>,
}

impl DidMethodProviderImpl {
    pub fn new(did_methods: HashMap<String, Arc<dyn DidMethod>>) -> Self {
        Self { did_methods }
    }
}

#[async_trait::async_trait]
impl DidMethodProvider for DidMethodProviderImpl {
    fn get_did_method(&self, did_method_id: &str) -> Option<Arc<dyn DidMethod>> {
        self.did_methods.get(did_method_id).cloned()
    }

    async fn resolve(&self, did: &DidValue) -> Result<DidDocument, DidMethodProviderError> {
        let method_name = did
            .method()
            .ok_or(DidMethodProviderError::MissingDidMethodNameInDidValue)?;

        let method = self
            .get_did_method(method_name)
            .ok_or_else(|| DidMethodProviderError::MissingProvider(method_name.to_owned()))?;

        Ok(method.resolve(did).await?)
    }
}
