use crate::{
    common_dto::{PublicKeyJwkDTO, PublicKeyJwkEllipticDataDTO},
    common_models::{PublicKeyJwk, PublicKeyJwkEllipticData},
    did::{
        imp::dto::{DidDocumentDTO, DidServiceDTO, DidVerificationMethodDTO, DID_CONTEXT},
        model::{DidDocument, DidService, DidVerificationMethod},
    },
};

impl From<PublicKeyJwkDTO> for PublicKeyJwk {
    fn from(value: PublicKeyJwkDTO) -> Self {
        match value {
            PublicKeyJwkDTO::Ec(value) => PublicKeyJwk::Ec(value.into()),
            PublicKeyJwkDTO::Okp(value) => PublicKeyJwk::Okp(value.into()),
        }
    }
}

impl From<PublicKeyJwkEllipticDataDTO> for PublicKeyJwkEllipticData {
    fn from(value: PublicKeyJwkEllipticDataDTO) -> Self {
        Self {
            r#use: value.r#use,
            crv: value.crv,
            x: value.x,
            y: value.y,
        }
    }
}

impl From<PublicKeyJwk> for PublicKeyJwkDTO {
    fn from(value: PublicKeyJwk) -> Self {
        match value {
            PublicKeyJwk::Ec(value) => PublicKeyJwkDTO::Ec(value.into()),
            PublicKeyJwk::Okp(value) => PublicKeyJwkDTO::Okp(value.into()),
        }
    }
}

impl From<PublicKeyJwkEllipticData> for PublicKeyJwkEllipticDataDTO {
    fn from(value: PublicKeyJwkEllipticData) -> Self {
        Self {
            r#use: value.r#use,
            crv: value.crv,
            x: value.x,
            y: value.y,
        }
    }
}

impl From<DidDocumentDTO> for DidDocument {
    fn from(value: DidDocumentDTO) -> Self {
        Self {
            id: value.id,
            verification_method: value
                .verification_method
                .into_iter()
                .map(|v| v.into())
                .collect(),
            authentication: value.authentication,
            assertion_method: value.assertion_method,
            key_agreement: value.key_agreement,
            capability_invocation: value.capability_invocation,
            capability_delegation: value.capability_delegation,
            service: value.service.into_iter().map(|s| s.into()).collect(),
        }
    }
}

impl From<DidVerificationMethodDTO> for DidVerificationMethod {
    fn from(value: DidVerificationMethodDTO) -> Self {
        Self {
            id: value.id,
            r#type: value.r#type,
            controller: value.controller,
            public_key_jwk: value.public_key_jwk.into(),
        }
    }
}

impl From<DidServiceDTO> for DidService {
    fn from(value: DidServiceDTO) -> Self {
        Self {
            id: value.id,
            r#type: value.r#type,
            service_endpoint: value.service_endpoint,
        }
    }
}

impl From<DidDocument> for DidDocumentDTO {
    fn from(value: DidDocument) -> Self {
        Self {
            context: serde_json::json!([DID_CONTEXT]),
            id: value.id,
            verification_method: value
                .verification_method
                .into_iter()
                .map(|v| v.into())
                .collect(),
            authentication: value.authentication,
            assertion_method: value.assertion_method,
            key_agreement: value.key_agreement,
            capability_invocation: value.capability_invocation,
            capability_delegation: value.capability_delegation,
            service: value.service.into_iter().map(|s| s.into()).collect(),
        }
    }
}

impl From<DidVerificationMethod> for DidVerificationMethodDTO {
    fn from(value: DidVerificationMethod) -> Self {
        Self {
            id: value.id,
            r#type: value.r#type,
            controller: value.controller,
            public_key_jwk: value.public_key_jwk.into(),
        }
    }
}

impl From<DidService> for DidServiceDTO {
    fn from(value: DidService) -> Self {
        Self {
            id: value.id,
            r#type: value.r#type,
            service_endpoint: value.service_endpoint,
        }
    }
}
