//! BEP44 mutable item envelope.
//!
//! The signature covers the bencoding of `{seq, v}`; the transported form is
//! the bencoding of `{k, seq, sig, v}`.

use std::collections::BTreeMap;

use dht_crypto::Signer;

use super::error::Bep44Error;
use crate::{
    bencode::{self, Value},
    key_storage::model::SignatureProvider,
};

#[cfg(test)]
mod test;

pub const MAX_PAYLOAD_LEN: usize = 1000;
const PUBLIC_KEY_LEN: usize = 32;
const SIGNATURE_LEN: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    public_key: Vec<u8>,
    seq: i64,
    signature: Vec<u8>,
    value: Vec<u8>,
}

impl Envelope {
    /// Signs `value` at `seq` with the identity key bound to `signer`.
    pub async fn new(
        value: Vec<u8>,
        seq: i64,
        signer: &dyn SignatureProvider,
    ) -> Result<Self, Bep44Error> {
        if value.len() > MAX_PAYLOAD_LEN {
            return Err(Bep44Error::PayloadTooLarge(value.len()));
        }

        let public_key = signer.get_public_key();
        if public_key.len() != PUBLIC_KEY_LEN {
            return Err(Bep44Error::InvalidPublicKeyLength(public_key.len()));
        }

        let signature = signer
            .sign(&signable(seq, &value))
            .await
            .map_err(Bep44Error::Signing)?;
        if signature.len() != SIGNATURE_LEN {
            return Err(Bep44Error::InvalidSignatureLength(signature.len()));
        }

        Ok(Self {
            public_key,
            seq,
            signature,
            value,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let fields = BTreeMap::from([
            (b"k".to_vec(), Value::from(self.public_key.as_slice())),
            (b"seq".to_vec(), Value::Integer(self.seq)),
            (b"sig".to_vec(), Value::from(self.signature.as_slice())),
            (b"v".to_vec(), Value::from(self.value.as_slice())),
        ]);

        bencode::encode(&Value::Dictionary(fields))
    }

    /// Parses a transported envelope and verifies its signature with `verifier`.
    pub fn decode(bytes: &[u8], verifier: &dyn Signer) -> Result<Self, Bep44Error> {
        let decoded = bencode::decode(bytes)?;
        let fields = decoded
            .as_dictionary()
            .ok_or_else(|| Bep44Error::InvalidEnvelope("not a dictionary".to_string()))?;

        let public_key = bytes_field(fields, "k")?;
        let signature = bytes_field(fields, "sig")?;
        let value = bytes_field(fields, "v")?;
        let seq = fields
            .get(b"seq".as_slice())
            .and_then(Value::as_integer)
            .ok_or_else(|| Bep44Error::InvalidEnvelope("missing `seq`".to_string()))?;

        if public_key.len() != PUBLIC_KEY_LEN {
            return Err(Bep44Error::InvalidPublicKeyLength(public_key.len()));
        }
        if signature.len() != SIGNATURE_LEN {
            return Err(Bep44Error::InvalidSignatureLength(signature.len()));
        }
        if value.len() > MAX_PAYLOAD_LEN {
            return Err(Bep44Error::PayloadTooLarge(value.len()));
        }

        verifier
            .verify(&signable(seq, &value), &signature, &public_key)
            .map_err(|_| Bep44Error::InvalidSignature)?;

        Ok(Self {
            public_key,
            seq,
            signature,
            value,
        })
    }

    /// Rejects an envelope older than the last accepted one for the same key.
    pub fn check_sequence(&self, last_seen: i64) -> Result<(), Bep44Error> {
        if self.seq < last_seen {
            return Err(Bep44Error::StaleSequence {
                seq: self.seq,
                last_seen,
            });
        }
        Ok(())
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn seq(&self) -> i64 {
        self.seq
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

fn signable(seq: i64, value: &[u8]) -> Vec<u8> {
    let fields = BTreeMap::from([
        (b"seq".to_vec(), Value::Integer(seq)),
        (b"v".to_vec(), Value::from(value)),
    ]);

    bencode::encode(&Value::Dictionary(fields))
}

fn bytes_field(fields: &BTreeMap<Vec<u8>, Value>, name: &str) -> Result<Vec<u8>, Bep44Error> {
    fields
        .get(name.as_bytes())
        .and_then(Value::as_bytes)
        .map(<[u8]>::to_vec)
        .ok_or_else(|| Bep44Error::InvalidEnvelope(format!("missing `{name}`")))
}
