//! Base-58 encoding
//!
//! Byte strings are read as big-endian integers and rewritten in radix 58
//! over the Bitcoin alphabet. Leading zero bytes carry no numeric weight,
//! so each one is mapped to a leading `'1'` and back.

use thiserror::Error;
use tracing::debug;

/// Bitcoin base-58 alphabet (no `0`, `O`, `I`, `l`)
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const BASE: u32 = 58;
const INVALID: u8 = 0xff;

/// ASCII -> digit value, `INVALID` outside the alphabet
const DIGITS: [u8; 128] = build_digit_table();

const fn build_digit_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Base58 / Base58Check errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    #[error("Invalid base58 character {character:?} at position {index}")]
    InvalidCharacter { character: char, index: usize },
    #[error("Decoded data too short for a checksum: {length} bytes")]
    TooShort { length: usize },
    #[error("Checksum mismatch: expected {}, found {}", hex::encode(.expected), hex::encode(.found))]
    Checksum { expected: [u8; 4], found: [u8; 4] },
}

fn digit_value(character: char) -> Option<u8> {
    if !character.is_ascii() {
        return None;
    }
    match DIGITS[character as usize] {
        INVALID => None,
        digit => Some(digit),
    }
}

/// Rewrite a big-endian digit string from radix `from` to radix `to` by
/// repeated long division, collecting remainders.
///
/// Leading zero digits are dropped; zero converts to an empty string.
fn convert_radix(input: &[u8], from: u32, to: u32) -> Vec<u8> {
    let mut number = input.to_vec();
    let mut start = number.iter().take_while(|&&d| d == 0).count();
    let mut output = Vec::with_capacity(input.len() * 2);

    while start < number.len() {
        let mut remainder = 0u32;
        for digit in &mut number[start..] {
            let acc = remainder * from + u32::from(*digit);
            *digit = (acc / to) as u8;
            remainder = acc % to;
        }
        output.push(remainder as u8);

        while start < number.len() && number[start] == 0 {
            start += 1;
        }
    }

    // remainders come out least significant first
    output.reverse();
    output
}

/// Encode bytes as a base-58 string
pub fn encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();
    let digits = convert_radix(&bytes[zeros..], 256, BASE);

    let mut encoded = String::with_capacity(zeros + digits.len());
    encoded.extend(std::iter::repeat(ALPHABET[0] as char).take(zeros));
    encoded.extend(digits.iter().map(|&d| ALPHABET[d as usize] as char));
    encoded
}

/// Decode a base-58 string back to bytes
pub fn decode(input: &str) -> Result<Vec<u8>, Base58Error> {
    let mut digits = Vec::with_capacity(input.len());
    for (index, character) in input.chars().enumerate() {
        match digit_value(character) {
            Some(digit) => digits.push(digit),
            None => {
                debug!(?character, index, "rejecting non-base58 character");
                return Err(Base58Error::InvalidCharacter { character, index });
            }
        }
    }

    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    let mut bytes = vec![0u8; zeros];
    bytes.extend(convert_radix(&digits[zeros..], BASE, 256));
    Ok(bytes)
}
