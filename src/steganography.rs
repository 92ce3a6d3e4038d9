use std::io::{self, ErrorKind};

use crate::framing::{frame, from_bits, to_bits, unframe};

pub fn encode(carrier: &[u8], message: &str) -> Result<Vec<u8>, io::Error> {
    let bits = to_bits(&frame(message))?;

    if bits.len() > carrier.len() {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            "The message is too long for this carrier.",
        ));
    }

    let mut encoded = carrier.to_vec();

    for (byte, &bit) in encoded.iter_mut().zip(bits.iter()) {
        *byte = (*byte & 0xFE) | bit;
    }

    Ok(encoded)
}

pub fn decode(carrier: &[u8]) -> Option<String> {
    let lsbs: Vec<u8> = carrier.iter().map(|byte| byte & 1).collect();
    let extracted = from_bits(&lsbs);

    unframe(&extracted).map(str::to_owned)
}
