//! Mapping between a DID document and its DNS TXT records.
//!
//! The root record `_did.` lists which key (`k{n}`) and service (`s{n}`)
//! indices take part in each verification relationship, every index has its
//! own `_k{n}._did.` or `_s{n}._did.` record.

use std::collections::{HashMap, HashSet};

use ct_codecs::{Base64UrlSafeNoPadding, Decoder as _, Encoder as _};

use crate::{
    common_models::did::DidValue,
    did::{
        error::DidMethodError,
        model::{DidDocument, DidService, DidVerificationMethod, Purpose},
    },
    dns::{Header, Message, ResourceRecord},
    key_algorithm::{
        imp::{EDDSA, ES256, SECP256K1},
        provider::KeyAlgorithmProvider,
    },
};


pub const ROOT_RECORD: &str = "_did.";
pub const VERIFICATION_METHOD_TYPE: &str = "JsonWebKey2020";

const PURPOSE_FIELDS: [(Purpose, &str); 5] = [
    (Purpose::Authentication, "auth"),
    (Purpose::AssertionMethod, "asm"),
    (Purpose::KeyAgreement, "agm"),
    (Purpose::CapabilityInvocation, "inv"),
    (Purpose::CapabilityDelegation, "del"),
];

/// `t=` code of a key algorithm.
pub fn key_type_code(algorithm: &str) -> Option<u8> {
    match algorithm {
        EDDSA => Some(0),
        SECP256K1 => Some(1),
        ES256 => Some(2),
        _ => None,
    }
}

fn key_type_algorithm(code: &str) -> Option<&'static str> {
    match code {
        "0" => Some(EDDSA),
        "1" => Some(SECP256K1),
        "2" => Some(ES256),
        _ => None,
    }
}

fn key_record_name(index: usize) -> String {
    format!("_k{index}._did.")
}

fn service_record_name(index: usize) -> String {
    format!("_s{index}._did.")
}

fn format_error(message: impl Into<String>) -> DidMethodError {
    DidMethodError::Format(message.into())
}

/// Builds the DNS message carrying `document`.
pub fn encode_document(
    document: &DidDocument,
    ttl: u32,
    key_algorithm_provider: &dyn KeyAlgorithmProvider,
) -> Result<Message, DidMethodError> {
    let did = document.id.as_str();
    let mut root = Vec::new();
    let mut key_records = Vec::new();
    let mut service_records = Vec::new();

    let mut key_indices = Vec::new();
    for (index, method) in document.verification_method.iter().enumerate() {
        let fragment = fragment(did, &method.id)?;
        let parsed = key_algorithm_provider
            .parse_jwk(&method.public_key_jwk)
            .map_err(|e| format_error(e.to_string()))?;
        let code = key_type_code(&parsed.algorithm).ok_or_else(|| {
            DidMethodError::Configuration(format!("unsupported key algorithm {}", parsed.algorithm))
        })?;
        let key = Base64UrlSafeNoPadding::encode_to_string(&parsed.public_key_bytes)
            .map_err(|e| format_error(e.to_string()))?;

        let mut body = format!("id={fragment};t={code};k={key}");
        if method.controller != did {
            body.push_str(&format!(";c={}", method.controller));
        }

        key_records.push(ResourceRecord::txt(key_record_name(index), ttl, &body));
        key_indices.push(format!("k{index}"));
    }
    root.push(format!("vm={}", key_indices.join(",")));

    for (purpose, field) in PURPOSE_FIELDS {
        let references = document.references(purpose);
        if references.is_empty() {
            continue;
        }

        let indices = references
            .iter()
            .map(|reference| {
                document
                    .verification_method
                    .iter()
                    .position(|method| &method.id == reference)
                    .map(|index| format!("k{index}"))
                    .ok_or_else(|| {
                        format_error(format!("{purpose} references unknown key {reference}"))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        root.push(format!("{field}={}", indices.join(",")));
    }

    let mut service_indices = Vec::new();
    for (index, service) in document.service.iter().enumerate() {
        let fragment = fragment(did, &service.id)?;
        let body = format!(
            "id={fragment};t={};se={}",
            service.r#type,
            service.service_endpoint.join(",")
        );

        service_records.push(ResourceRecord::txt(service_record_name(index), ttl, &body));
        service_indices.push(format!("s{index}"));
    }
    if !service_indices.is_empty() {
        root.push(format!("srv={}", service_indices.join(",")));
    }

    let mut answers = vec![ResourceRecord::txt(ROOT_RECORD, ttl, &root.join(";"))];
    answers.extend(key_records);
    answers.extend(service_records);

    Ok(Message {
        header: Header {
            id: 0,
            response: true,
            authoritative: true,
        },
        answers,
    })
}

fn fragment<'a>(did: &str, id: &'a str) -> Result<&'a str, DidMethodError> {
    id.strip_prefix(did)
        .and_then(|rest| rest.strip_prefix('#'))
        .filter(|fragment| !fragment.is_empty())
        .ok_or_else(|| format_error(format!("`{id}` is not a fragment of {did}")))
}

/// TXT records of a DID message, indexed by record name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoder {
    pub root_record: String,
    pub records: HashMap<String, String>,
}

#[derive(Debug, Default)]
struct RootRecord {
    verification_methods: Vec<usize>,
    purposes: Vec<(Purpose, Vec<usize>)>,
    services: Vec<usize>,
}

impl Decoder {
    pub fn from_message(message: &Message) -> Result<Self, DidMethodError> {
        let mut root_record = None;
        let mut records = HashMap::new();

        for record in &message.answers {
            let Some(bytes) = record.txt_bytes() else {
                continue;
            };
            let body = String::from_utf8(bytes)
                .map_err(|_| format_error(format!("record {} is not UTF-8", record.name)))?;

            if record.name == ROOT_RECORD {
                if root_record.replace(body).is_some() {
                    return Err(format_error("duplicate root record"));
                }
            } else if records.insert(record.name.clone(), body).is_some() {
                return Err(format_error(format!("duplicate record {}", record.name)));
            }
        }

        Ok(Self {
            root_record: root_record.ok_or_else(|| format_error("missing root record"))?,
            records,
        })
    }

    pub fn decode(
        &self,
        did: &DidValue,
        key_algorithm_provider: &dyn KeyAlgorithmProvider,
    ) -> Result<DidDocument, DidMethodError> {
        let root = parse_root(&self.root_record)?;
        let mut document = DidDocument::new(did.to_owned());

        let mut ids = HashSet::new();
        let mut method_ids = HashMap::new();
        for index in root.verification_methods {
            let method = self.verification_method(did, index, key_algorithm_provider)?;
            if !ids.insert(method.id.clone()) {
                return Err(format_error(format!("duplicate id {}", method.id)));
            }
            method_ids.insert(index, method.id.clone());
            document.verification_method.push(method);
        }

        for (purpose, indices) in root.purposes {
            let references = indices
                .into_iter()
                .map(|index| {
                    method_ids.get(&index).cloned().ok_or_else(|| {
                        format_error(format!("{purpose} references undeclared key k{index}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            document.references_mut(purpose).extend(references);
        }

        for index in root.services {
            let service = self.service(did, index)?;
            if !ids.insert(service.id.clone()) {
                return Err(format_error(format!("duplicate id {}", service.id)));
            }
            document.service.push(service);
        }

        Ok(document)
    }

    fn record(&self, name: &str) -> Result<HashMap<&str, &str>, DidMethodError> {
        let body = self
            .records
            .get(name)
            .ok_or_else(|| format_error(format!("missing record {name}")))?;

        let mut fields = HashMap::new();
        for group in body.split(';') {
            let (key, value) = group
                .split_once('=')
                .ok_or_else(|| format_error(format!("malformed field `{group}` in {name}")))?;
            fields.insert(key, value);
        }
        Ok(fields)
    }

    fn verification_method(
        &self,
        did: &DidValue,
        index: usize,
        key_algorithm_provider: &dyn KeyAlgorithmProvider,
    ) -> Result<DidVerificationMethod, DidMethodError> {
        let name = key_record_name(index);
        let fields = self.record(&name)?;
        let field = |key: &str| {
            fields
                .get(key)
                .copied()
                .ok_or_else(|| format_error(format!("missing `{key}` in {name}")))
        };

        let fragment = field("id")?;
        let code = field("t")?;
        let algorithm = key_type_algorithm(code)
            .ok_or_else(|| format_error(format!("unknown key type {code} in {name}")))?;
        let key = Base64UrlSafeNoPadding::decode_to_vec(field("k")?, None)
            .map_err(|e| format_error(format!("invalid key in {name}: {e}")))?;

        let public_key_jwk = key_algorithm_provider
            .get_key_algorithm(algorithm)
            .ok_or(DidMethodError::KeyAlgorithmNotFound)?
            .bytes_to_jwk(&key, None)
            .map_err(|e| format_error(format!("invalid key in {name}: {e}")))?;

        Ok(DidVerificationMethod {
            id: format!("{did}#{fragment}"),
            r#type: VERIFICATION_METHOD_TYPE.to_string(),
            controller: fields
                .get("c")
                .map(|controller| controller.to_string())
                .unwrap_or_else(|| did.to_string()),
            public_key_jwk,
        })
    }

    fn service(&self, did: &DidValue, index: usize) -> Result<DidService, DidMethodError> {
        let name = service_record_name(index);
        let fields = self.record(&name)?;
        let field = |key: &str| {
            fields
                .get(key)
                .copied()
                .ok_or_else(|| format_error(format!("missing `{key}` in {name}")))
        };

        let service_endpoint = field("se")?
            .split(',')
            .map(|endpoint| match endpoint.trim() {
                "" => Err(format_error(format!("empty endpoint in {name}"))),
                _ => Ok(endpoint.to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DidService {
            id: format!("{did}#{}", field("id")?),
            r#type: field("t")?.to_string(),
            service_endpoint,
        })
    }
}

fn parse_root(body: &str) -> Result<RootRecord, DidMethodError> {
    let mut root = RootRecord::default();
    let mut has_verification_methods = false;

    for group in body.split(';') {
        let (field, value) = group
            .split_once('=')
            .ok_or_else(|| format_error(format!("malformed root field `{group}`")))?;

        match field {
            "vm" => {
                root.verification_methods = parse_indices(value, 'k')?;
                has_verification_methods = true;
            }
            "srv" => root.services = parse_indices(value, 's')?,
            _ => {
                if let Some((purpose, _)) = PURPOSE_FIELDS.iter().find(|(_, name)| *name == field)
                {
                    root.purposes.push((*purpose, parse_indices(value, 'k')?));
                }
            }
        }
    }

    if !has_verification_methods {
        return Err(format_error("root record has no `vm` field"));
    }

    Ok(root)
}

fn parse_indices(value: &str, prefix: char) -> Result<Vec<usize>, DidMethodError> {
    if value.is_empty() {
        return Ok(vec![]);
    }

    let mut seen = HashSet::new();
    value
        .split(',')
        .map(|item| {
            let index = item
                .strip_prefix(prefix)
                .filter(|digits| {
                    !digits.is_empty()
                        && digits.bytes().all(|b| b.is_ascii_digit())
                        && (digits.len() == 1 || !digits.starts_with('0'))
                })
                .and_then(|digits| digits.parse::<usize>().ok())
                .ok_or_else(|| format_error(format!("malformed index `{item}`")))?;

            if !seen.insert(index) {
                return Err(format_error(format!("index `{item}` listed twice")));
            }
            Ok(index)
        })
        .collect()
}
