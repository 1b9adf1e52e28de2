//! Minimal DNS wire format.
//!
//! Only what is needed to carry a DID document is supported: a header and a
//! list of resource records, with TXT record data decoded and everything else
//! kept as opaque bytes. Names are always written uncompressed; compression
//! pointers are followed when parsing.

use error::DnsError;

pub mod error;

#[cfg(test)]
mod test;

pub const TYPE_TXT: u16 = 16;
pub const CLASS_IN: u16 = 1;

const HEADER_LEN: usize = 12;
const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;
const MAX_CHARACTER_STRING_LEN: usize = 255;
const MAX_POINTER_JUMPS: usize = 64;

const FLAG_RESPONSE: u16 = 0x8000;
const FLAG_AUTHORITATIVE: u16 = 0x0400;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub response: bool,
    pub authoritative: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordData {
    /// Character strings of a TXT record, each at most 255 bytes.
    Txt(Vec<Vec<u8>>),
    Other {
        r#type: u16,
        data: Vec<u8>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Fully qualified, dot terminated name, e.g. `_k0._did.`
    pub name: String,
    pub class: u16,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    /// Builds an IN class TXT record, splitting `text` into 255 byte strings.
    pub fn txt(name: impl Into<String>, ttl: u32, text: &str) -> Self {
        let bytes = text.as_bytes();
        let strings = if bytes.is_empty() {
            vec![vec![]]
        } else {
            bytes
                .chunks(MAX_CHARACTER_STRING_LEN)
                .map(<[u8]>::to_vec)
                .collect()
        };

        Self {
            name: name.into(),
            class: CLASS_IN,
            ttl,
            data: RecordData::Txt(strings),
        }
    }

    pub fn r#type(&self) -> u16 {
        match &self.data {
            RecordData::Txt(_) => TYPE_TXT,
            RecordData::Other { r#type, .. } => *r#type,
        }
    }

    /// Concatenated TXT payload, `None` for other record types.
    pub fn txt_bytes(&self) -> Option<Vec<u8>> {
        match &self.data {
            RecordData::Txt(strings) => Some(strings.concat()),
            RecordData::Other { .. } => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub answers: Vec<ResourceRecord>,
}

impl Message {
    pub fn pack(&self) -> Result<Vec<u8>, DnsError> {
        let answer_count = u16::try_from(self.answers.len())
            .map_err(|_| DnsError::TooManyRecords(self.answers.len()))?;

        let mut flags = 0;
        if self.header.response {
            flags |= FLAG_RESPONSE;
        }
        if self.header.authoritative {
            flags |= FLAG_AUTHORITATIVE;
        }

        let mut output = Vec::with_capacity(512);
        output.extend_from_slice(&self.header.id.to_be_bytes());
        output.extend_from_slice(&flags.to_be_bytes());
        output.extend_from_slice(&0u16.to_be_bytes());
        output.extend_from_slice(&answer_count.to_be_bytes());
        output.extend_from_slice(&0u16.to_be_bytes());
        output.extend_from_slice(&0u16.to_be_bytes());

        for record in &self.answers {
            pack_record(record, &mut output)?;
        }

        Ok(output)
    }

    /// Parses a message, keeping only the answer section.
    pub fn parse(input: &[u8]) -> Result<Self, DnsError> {
        let mut parser = Parser { input, position: 0 };

        let id = parser.u16()?;
        let flags = parser.u16()?;
        let question_count = parser.u16()?;
        let answer_count = parser.u16()?;
        let authority_count = parser.u16()?;
        let additional_count = parser.u16()?;

        for _ in 0..question_count {
            parser.name()?;
            parser.take(4)?;
        }

        let mut answers = Vec::with_capacity(usize::from(answer_count));
        for _ in 0..answer_count {
            answers.push(parser.record()?);
        }
        for _ in 0..(u32::from(authority_count) + u32::from(additional_count)) {
            parser.record()?;
        }

        Ok(Self {
            header: Header {
                id,
                response: flags & FLAG_RESPONSE != 0,
                authoritative: flags & FLAG_AUTHORITATIVE != 0,
            },
            answers,
        })
    }
}

fn pack_name(name: &str, output: &mut Vec<u8>) -> Result<(), DnsError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    let mut length = 1;

    if !trimmed.is_empty() {
        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(DnsError::EmptyLabel(name.to_owned()));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DnsError::LabelTooLong(name.to_owned()));
            }
            length += label.len() + 1;
            if length > MAX_NAME_LEN {
                return Err(DnsError::NameTooLong(name.to_owned()));
            }

            output.push(label.len() as u8);
            output.extend_from_slice(label.as_bytes());
        }
    }

    output.push(0);
    Ok(())
}

fn pack_record(record: &ResourceRecord, output: &mut Vec<u8>) -> Result<(), DnsError> {
    pack_name(&record.name, output)?;
    output.extend_from_slice(&record.r#type().to_be_bytes());
    output.extend_from_slice(&record.class.to_be_bytes());
    output.extend_from_slice(&record.ttl.to_be_bytes());

    let data = match &record.data {
        RecordData::Txt(strings) => {
            let mut data = Vec::new();
            for string in strings {
                if string.len() > MAX_CHARACTER_STRING_LEN {
                    return Err(DnsError::RecordTooLong(record.name.clone()));
                }
                data.push(string.len() as u8);
                data.extend_from_slice(string);
            }
            data
        }
        RecordData::Other { data, .. } => data.clone(),
    };

    let data_length =
        u16::try_from(data.len()).map_err(|_| DnsError::RecordTooLong(record.name.clone()))?;
    output.extend_from_slice(&data_length.to_be_bytes());
    output.extend_from_slice(&data);
    Ok(())
}

struct Parser<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Parser<'a> {
    fn take(&mut self, count: usize) -> Result<&'a [u8], DnsError> {
        let end = self
            .position
            .checked_add(count)
            .filter(|end| *end <= self.input.len())
            .ok_or(DnsError::Truncated(self.position))?;

        let slice = &self.input[self.position..end];
        self.position = end;
        Ok(slice)
    }

    fn u16(&mut self) -> Result<u16, DnsError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn u32(&mut self) -> Result<u32, DnsError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn name(&mut self) -> Result<String, DnsError> {
        let mut labels: Vec<&str> = Vec::new();
        let mut cursor = self.position;
        let mut resume_at = None;
        let mut jumps = 0;
        let mut length = 1;

        loop {
            let length_byte = *self.input.get(cursor).ok_or(DnsError::Truncated(cursor))?;

            match length_byte & 0xc0 {
                0x00 => {
                    let label_length = usize::from(length_byte);
                    if label_length == 0 {
                        cursor += 1;
                        break;
                    }

                    let start = cursor + 1;
                    let end = start + label_length;
                    let label = self
                        .input
                        .get(start..end)
                        .ok_or(DnsError::Truncated(start))?;
                    let label =
                        std::str::from_utf8(label).map_err(|_| DnsError::InvalidUtf8(start))?;

                    length += label_length + 1;
                    if length > MAX_NAME_LEN {
                        return Err(DnsError::NameTooLong(labels.join(".")));
                    }

                    labels.push(label);
                    cursor = end;
                }
                0xc0 => {
                    let low = *self
                        .input
                        .get(cursor + 1)
                        .ok_or(DnsError::Truncated(cursor + 1))?;

                    jumps += 1;
                    if jumps > MAX_POINTER_JUMPS {
                        return Err(DnsError::PointerLoop(cursor));
                    }
                    if resume_at.is_none() {
                        resume_at = Some(cursor + 2);
                    }

                    cursor = usize::from(u16::from_be_bytes([length_byte & 0x3f, low]));
                }
                _ => return Err(DnsError::InvalidLabel(cursor)),
            }
        }

        self.position = resume_at.unwrap_or(cursor);

        let mut name = labels.join(".");
        name.push('.');
        Ok(name)
    }

    fn record(&mut self) -> Result<ResourceRecord, DnsError> {
        let name = self.name()?;
        let r#type = self.u16()?;
        let class = self.u16()?;
        let ttl = self.u32()?;
        let data_length = usize::from(self.u16()?);
        let data_offset = self.position;
        let data = self.take(data_length)?;

        let data = if r#type == TYPE_TXT {
            RecordData::Txt(parse_character_strings(data, data_offset)?)
        } else {
            RecordData::Other {
                r#type,
                data: data.to_vec(),
            }
        };

        Ok(ResourceRecord {
            name,
            class,
            ttl,
            data,
        })
    }
}

fn parse_character_strings(data: &[u8], offset: usize) -> Result<Vec<Vec<u8>>, DnsError> {
    let mut strings = Vec::new();
    let mut position = 0;

    while position < data.len() {
        let length = usize::from(data[position]);
        let string = data
            .get(position + 1..position + 1 + length)
            .ok_or(DnsError::InvalidTxt(offset + position))?;
        strings.push(string.to_vec());
        position += 1 + length;
    }

    Ok(strings)
}
