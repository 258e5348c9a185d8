//! Address argument parsing.
//!
//! Accepts decimal (`32768`), C hex (`0x8000`) and Spectrum hex (`$8000`).
//! Zero is rejected: a snapshot never loads at or runs from address 0.

use std::num::IntErrorKind;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("`{0}` is not a number")]
    Malformed(String),

    #[error("`{0}` does not fit in 16 bits")]
    OutOfRange(String),

    #[error("address must be non-zero")]
    Zero,
}

/// Parse a 16-bit, non-zero address.
pub fn parse_address(arg: &str) -> Result<u16, AddressError> {
    let text = arg.trim();
    if text.is_empty() {
        return Err(AddressError::Empty);
    }

    let (digits, radix) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix('$'))
    {
        (hex, 16)
    } else {
        (text, 10)
    };

    let value = u16::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => AddressError::OutOfRange(text.to_string()),
        _ => AddressError::Malformed(text.to_string()),
    })?;

    if value == 0 {
        return Err(AddressError::Zero);
    }
    Ok(value)
}
