use std::{collections::HashMap, sync::Arc};

use super::{CryptoProvider, CryptoProviderError, Signer};

pub mod signer;
pub mod utilities;

#[cfg(test)]
mod test;

#[derive(Clone)]
pub struct CryptoProviderImpl {
    signers: HashMap<String, Arc<dyn Signer>>,
}

impl CryptoProviderImpl {
    pub fn new(signers: HashMap<String, Arc<dyn Signer>>) -> Self {
        Self { signers }
    }
}

impl CryptoProvider for CryptoProviderImpl {
    fn get_signer(&self, signer: &str) -> Result<Arc<dyn Signer>, CryptoProviderError> {
        Ok(self
            .signers
            .get(signer)
            .ok_or(CryptoProviderError::MissingSigner(signer.to_owned()))?
            .clone())
    }
}
