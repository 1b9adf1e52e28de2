//! Enumerates errors related to bencode decoding.

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum BencodeError {
    #[error("Unexpected end of input at offset {0}")]
    UnexpectedEof(usize),
    #[error("Unexpected byte `{byte:#04x}` at offset {offset}")]
    UnexpectedByte {
        byte: u8,
        offset: usize,
    },
    #[error("Invalid integer at offset {0}")]
    InvalidInteger(usize),
    #[error("Invalid byte string length at offset {0}")]
    InvalidLength(usize),
    #[error("Dictionary keys not sorted at offset {0}")]
    UnsortedKeys(usize),
    #[error("Duplicate dictionary key at offset {0}")]
    DuplicateKey(usize),
    #[error("Trailing data at offset {0}")]
    TrailingData(usize),
    #[error("Nesting deeper than {0} levels")]
    TooDeep(usize),
}
