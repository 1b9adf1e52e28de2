//! z-base-32 encoding, used to render raw public keys as DID suffixes and
//! relay paths.

use thiserror::Error;

#[cfg(test)]
mod test;

const ALPHABET: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ZBase32Error {
    #[error("Invalid z-base-32 character `{character}` at offset {offset}")]
    InvalidCharacter {
        character: char,
        offset: usize,
    },
    #[error("Invalid z-base-32 length `{0}`")]
    InvalidLength(usize),
    #[error("Non-zero trailing bits")]
    NonZeroPadding,
}

pub fn encode(data: &[u8]) -> String {
    let mut output = String::with_capacity((data.len() * 8).div_ceil(5));
    let mut buffer: u16 = 0;
    let mut bits: u32 = 0;

    for byte in data {
        buffer = (buffer << 8) | u16::from(*byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            output.push(ALPHABET[usize::from((buffer >> bits) & 0x1f)] as char);
        }
        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        output.push(ALPHABET[usize::from((buffer << (5 - bits)) & 0x1f)] as char);
    }

    output
}

pub fn decode(input: &str) -> Result<Vec<u8>, ZBase32Error> {
    let mut output = Vec::with_capacity(input.len() * 5 / 8);
    let mut buffer: u16 = 0;
    let mut bits: u32 = 0;

    for (offset, character) in input.chars().enumerate() {
        let value = ALPHABET
            .iter()
            .position(|candidate| char::from(*candidate) == character)
            .ok_or(ZBase32Error::InvalidCharacter { character, offset })?;

        buffer = (buffer << 5) | value as u16;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            output.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    if bits >= 5 {
        return Err(ZBase32Error::InvalidLength(input.chars().count()));
    }
    if buffer != 0 {
        return Err(ZBase32Error::NonZeroPadding);
    }

    Ok(output)
}
