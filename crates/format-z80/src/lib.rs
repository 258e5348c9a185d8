//! ZX Spectrum .Z80 snapshot writer.
//!
//! Turns a raw memory image into a version 2 snapshot for the 128K
//! Spectrum with uncompressed pages:
//!
//! - 55-byte header (30-byte base header, extended length 23, extended
//!   header carrying PC, hardware mode and port $7FFD)
//! - three page blocks, `FF FF page` + 16,384 bytes, for pages 8, 5 and 3
//!   (RAM banks 5, 2 and 0, i.e. $4000, $8000 and $C000)
//!
//! The image is copied into a zeroed 48K window at its dump address after
//! the attribute area has been set to white paper, black ink.

mod error;
pub mod header;
pub mod page;
mod snapshot;
pub mod window;

pub use error::{FormatError, Result};
pub use header::Z80Header;
pub use page::write_page;
pub use snapshot::{SNAPSHOT_SIZE, Snapshot, encode};
pub use window::MemoryWindow;
