//! Eight-digit uppercase hex serials.

use norvm_core::{
    add, compare, mov_u8, select_if, shift_left, subtract, BitWidth, Cond, Word,
};
use thiserror::Error;

pub const SERIAL_LEN: usize = 8;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerialError {
    #[error("serial must be 8 hex digits, got {0} bytes")]
    InvalidLength(usize),

    #[error("invalid serial digit {ch:?} at index {index} (expected 0-9 or A-F)")]
    InvalidDigit { index: usize, ch: char },
}

/// Formats `value` as eight uppercase hex digits, most significant byte first.
pub fn encode(value: Word) -> String {
    let mut out = String::with_capacity(SERIAL_LEN);
    for byte in (value as u32).to_be_bytes() {
        out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
        out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
    }
    out
}

fn validate(serial: &str) -> Result<&[u8; SERIAL_LEN], SerialError> {
    let bytes: &[u8; SERIAL_LEN] = serial
        .as_bytes()
        .try_into()
        .map_err(|_| SerialError::InvalidLength(serial.len()))?;
    if let Some(index) = bytes.iter().position(|b| !HEX_DIGITS.contains(b)) {
        let ch = serial[index..].chars().next().unwrap_or('\u{fffd}');
        return Err(SerialError::InvalidDigit { index, ch });
    }
    Ok(bytes)
}

/// Native decoder.
pub fn decode_native(serial: &str) -> Result<Word, SerialError> {
    let digits = validate(serial)?;
    let value = digits.iter().fold(0u32, |acc, &d| {
        let nibble = if d > b'9' { d - b'A' + 10 } else { d - b'0' };
        (acc << 4) | u32::from(nibble)
    });
    Ok(value as Word)
}

/// One digit through the ALU: `c - (c > '9' ? 0x37 : 0x30)`.
fn gated_nibble(digit: u8) -> Word {
    let c = Word::from(mov_u8(Word::from(digit)));
    let flags = compare(c, 0x39, BitWidth::W8);
    let bias = select_if(0x37, 0x30, Cond::G.eval(flags));
    subtract(c, bias, BitWidth::W8)
}

fn gated_byte(pair: &[u8]) -> Word {
    let high = shift_left(gated_nibble(pair[0]), 4, BitWidth::W8);
    add(high, gated_nibble(pair[1]), BitWidth::W8)
}

/// Decoder that runs every digit and byte placement through the ALU.
pub fn decode_gated(serial: &str) -> Result<Word, SerialError> {
    let digits = validate(serial)?;
    let mut value = 0;
    for (pair, amount) in digits.chunks_exact(2).zip([24u8, 16, 8, 0]) {
        let placed = shift_left(gated_byte(pair), amount, BitWidth::W32);
        value = add(value, placed, BitWidth::W32);
    }
    Ok(value)
}
