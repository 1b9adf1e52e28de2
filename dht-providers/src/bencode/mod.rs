//! Canonical bencoding.
//!
//! Only the four bencode types are supported: integers, byte strings, lists
//! and dictionaries. Dictionaries are kept in a [`BTreeMap`] so encoding
//! always emits keys in sorted byte order, and decoding refuses any input that
//! is not in canonical form. The encoded bytes are what BEP44 signs, so two
//! equal values must never produce different encodings.

use std::collections::BTreeMap;

use error::BencodeError;

pub mod error;

#[cfg(test)]
mod test;

const MAX_DEPTH: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Dictionary(BTreeMap<Vec<u8>, Value>),
}

impl Value {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&BTreeMap<Vec<u8>, Value>> {
        match self {
            Self::Dictionary(value) => Some(value),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Bytes(value.as_bytes().to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<Vec<u8>, Value>> for Value {
    fn from(value: BTreeMap<Vec<u8>, Value>) -> Self {
        Self::Dictionary(value)
    }
}

pub fn encode(value: &Value) -> Vec<u8> {
    let mut output = Vec::new();
    encode_into(value, &mut output);
    output
}

fn encode_into(value: &Value, output: &mut Vec<u8>) {
    match value {
        Value::Integer(number) => {
            output.push(b'i');
            output.extend_from_slice(number.to_string().as_bytes());
            output.push(b'e');
        }
        Value::Bytes(bytes) => encode_bytes(bytes, output),
        Value::List(items) => {
            output.push(b'l');
            for item in items {
                encode_into(item, output);
            }
            output.push(b'e');
        }
        Value::Dictionary(entries) => {
            output.push(b'd');
            for (key, item) in entries {
                encode_bytes(key, output);
                encode_into(item, output);
            }
            output.push(b'e');
        }
    }
}

fn encode_bytes(bytes: &[u8], output: &mut Vec<u8>) {
    output.extend_from_slice(bytes.len().to_string().as_bytes());
    output.push(b':');
    output.extend_from_slice(bytes);
}

/// Decodes exactly one value, the whole input must be consumed.
pub fn decode(input: &[u8]) -> Result<Value, BencodeError> {
    let mut decoder = Decoder { input, position: 0 };
    let value = decoder.value(0)?;

    if decoder.position != input.len() {
        return Err(BencodeError::TrailingData(decoder.position));
    }

    Ok(value)
}

struct Decoder<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Decoder<'a> {
    fn peek(&self) -> Result<u8, BencodeError> {
        self.input
            .get(self.position)
            .copied()
            .ok_or(BencodeError::UnexpectedEof(self.position))
    }

    fn value(&mut self, depth: usize) -> Result<Value, BencodeError> {
        if depth >= MAX_DEPTH {
            return Err(BencodeError::TooDeep(MAX_DEPTH));
        }

        match self.peek()? {
            b'i' => self.integer().map(Value::Integer),
            b'0'..=b'9' => self.bytes().map(|bytes| Value::Bytes(bytes.to_vec())),
            b'l' => {
                self.position += 1;
                let mut items = Vec::new();
                while self.peek()? != b'e' {
                    items.push(self.value(depth + 1)?);
                }
                self.position += 1;
                Ok(Value::List(items))
            }
            b'd' => {
                self.position += 1;
                let mut entries = BTreeMap::new();
                let mut previous: Option<&'a [u8]> = None;
                while self.peek()? != b'e' {
                    let key_offset = self.position;
                    let key = match self.peek()? {
                        b'0'..=b'9' => self.bytes()?,
                        byte => {
                            return Err(BencodeError::UnexpectedByte {
                                byte,
                                offset: key_offset,
                            })
                        }
                    };

                    if let Some(previous) = previous {
                        if key == previous {
                            return Err(BencodeError::DuplicateKey(key_offset));
                        }
                        if key < previous {
                            return Err(BencodeError::UnsortedKeys(key_offset));
                        }
                    }
                    previous = Some(key);

                    let item = self.value(depth + 1)?;
                    entries.insert(key.to_vec(), item);
                }
                self.position += 1;
                Ok(Value::Dictionary(entries))
            }
            byte => Err(BencodeError::UnexpectedByte {
                byte,
                offset: self.position,
            }),
        }
    }

    fn integer(&mut self) -> Result<i64, BencodeError> {
        let start = self.position;
        self.position += 1;

        let end = self.input[self.position..]
            .iter()
            .position(|byte| *byte == b'e')
            .map(|offset| self.position + offset)
            .ok_or(BencodeError::UnexpectedEof(self.input.len()))?;

        let digits = &self.input[self.position..end];
        let unsigned = digits.strip_prefix(b"-").unwrap_or(digits);

        let canonical = !unsigned.is_empty()
            && unsigned.iter().all(u8::is_ascii_digit)
            && (unsigned == b"0" || unsigned[0] != b'0')
            && digits != b"-0";
        if !canonical {
            return Err(BencodeError::InvalidInteger(start));
        }

        let value = std::str::from_utf8(digits)
            .ok()
            .and_then(|digits| digits.parse::<i64>().ok())
            .ok_or(BencodeError::InvalidInteger(start))?;

        self.position = end + 1;
        Ok(value)
    }

    fn bytes(&mut self) -> Result<&'a [u8], BencodeError> {
        let start = self.position;

        let colon = self.input[start..]
            .iter()
            .position(|byte| *byte == b':')
            .map(|offset| start + offset)
            .ok_or(BencodeError::UnexpectedEof(self.input.len()))?;

        let digits = &self.input[start..colon];
        let canonical = !digits.is_empty()
            && digits.iter().all(u8::is_ascii_digit)
            && (digits == b"0" || digits[0] != b'0');
        if !canonical {
            return Err(BencodeError::InvalidLength(start));
        }

        let length = std::str::from_utf8(digits)
            .ok()
            .and_then(|digits| digits.parse::<usize>().ok())
            .ok_or(BencodeError::InvalidLength(start))?;

        let data_start = colon + 1;
        let data_end = data_start
            .checked_add(length)
            .filter(|end| *end <= self.input.len())
            .ok_or(BencodeError::UnexpectedEof(self.input.len()))?;

        self.position = data_end;
        Ok(&self.input[data_start..data_end])
    }
}
