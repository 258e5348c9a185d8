//! Page framing for version 2/3 memory blocks.
//!
//! Each block is a 3-byte marker followed by page data:
//!
//! | Offset | Size | Meaning |
//! |--------|------|---------|
//! | 0 | 2 | Data length, `$FFFF` = 16K uncompressed |
//! | 2 | 1 | Page number |
//! | 3 | n | Page data |

use std::io::Write;

use log::debug;

use crate::error::{FormatError, Result};
use crate::window::PAGE_SIZE;

/// Block length value marking 16,384 raw bytes.
pub const UNCOMPRESSED: u16 = 0xFFFF;

/// Marker size.
pub const FRAME_HEADER_SIZE: usize = 3;

/// Page numbers for the three thirds of the window on a 128K machine:
/// bank 5 ($4000), bank 2 ($8000), bank 0 ($C000).
pub const PAGE_ORDER: [u8; 3] = [8, 5, 3];

/// Build the 3-byte marker for an uncompressed page.
#[must_use]
pub fn frame_header(page: u8) -> [u8; FRAME_HEADER_SIZE] {
    [UNCOMPRESSED as u8, (UNCOMPRESSED >> 8) as u8, page]
}

/// Write one uncompressed page block.
pub fn write_page<W: Write>(out: &mut W, page: u8, data: &[u8]) -> Result<()> {
    if data.len() != PAGE_SIZE {
        return Err(FormatError::PageSize {
            expected: PAGE_SIZE,
            found: data.len(),
        });
    }

    debug!("writing page {page}");
    out.write_all(&frame_header(page))?;
    out.write_all(data)?;
    Ok(())
}
