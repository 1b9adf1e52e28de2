//! Enumerates errors related to DNS message packing and parsing.

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum DnsError {
    #[error("Message truncated at offset {0}")]
    Truncated(usize),
    #[error("Invalid label at offset {0}")]
    InvalidLabel(usize),
    #[error("Label too long in name `{0}`")]
    LabelTooLong(String),
    #[error("Empty label in name `{0}`")]
    EmptyLabel(String),
    #[error("Name too long: `{0}`")]
    NameTooLong(String),
    #[error("Compression pointer loop at offset {0}")]
    PointerLoop(usize),
    #[error("Name is not valid UTF-8 at offset {0}")]
    InvalidUtf8(usize),
    #[error("Malformed TXT data at offset {0}")]
    InvalidTxt(usize),
    #[error("Record data too long for `{0}`")]
    RecordTooLong(String),
    #[error("Too many records: {0}")]
    TooManyRecords(usize),
}
