use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormatError>;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("dump address ${address:04X} is below the RAM window at $4000")]
    AddressBelowWindow { address: u16 },

    #[error(
        "image of {len} bytes at ${address:04X} overflows the RAM window by {overflow} bytes"
    )]
    ImageOverflow {
        address: u16,
        len: usize,
        overflow: usize,
    },

    #[error("page data must be {expected} bytes, got {found}")]
    PageSize { expected: usize, found: usize },
}
