use std::io::{self, ErrorKind};

use crate::constants::{BITS_PER_CHAR, END_SENTINEL, START_SENTINEL};

pub fn frame(message: &str) -> String {
    format!("{START_SENTINEL}{message}{END_SENTINEL}")
}

pub fn to_bits(text: &str) -> Result<Vec<u8>, io::Error> {
    let mut bits = Vec::with_capacity(text.chars().count() * BITS_PER_CHAR);

    for letter in text.chars() {
        let code = u32::from(letter);
        if code > u32::from(u8::MAX) {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("The character '{letter}' does not fit in a single byte."),
            ));
        }

        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push(((code >> shift) & 1) as u8);
        }
    }

    Ok(bits)
}

pub fn from_bits(bits: &[u8]) -> String {
    // chunks_exact 会丢弃末尾不足 8 比特的余数
    bits.chunks_exact(BITS_PER_CHAR)
        .map(|chunk| {
            let value = chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
            char::from(value)
        })
        .collect()
}

pub fn unframe(text: &str) -> Option<&str> {
    let start = text.find(START_SENTINEL)? + START_SENTINEL.len();
    let end = text[start..].find(END_SENTINEL)?;

    Some(&text[start..start + end])
}
