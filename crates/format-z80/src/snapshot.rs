//! Whole-snapshot assembly: header followed by the three page blocks.

use std::io::Write;

use log::debug;

use crate::error::Result;
use crate::header::{HEADER_SIZE, Z80Header};
use crate::page::{FRAME_HEADER_SIZE, PAGE_ORDER, write_page};
use crate::window::{MemoryWindow, PAGE_SIZE};

/// Size of every snapshot this crate writes: 55 + 3 × (3 + 16,384).
pub const SNAPSHOT_SIZE: usize = HEADER_SIZE + PAGE_ORDER.len() * (FRAME_HEADER_SIZE + PAGE_SIZE);

/// A 128K .Z80 snapshot ready to be written.
#[derive(Clone)]
pub struct Snapshot {
    pub header: Z80Header,
    pub window: MemoryWindow,
}

impl Snapshot {
    /// Place `image` at `dump_address` and resume at `run_address`.
    pub fn new(dump_address: u16, run_address: u16, image: &[u8]) -> Result<Self> {
        let mut window = MemoryWindow::new();
        window.place(dump_address, image)?;
        Ok(Self {
            header: Z80Header::new(run_address),
            window,
        })
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(&self.header.to_bytes())?;
        for (index, &page) in PAGE_ORDER.iter().enumerate() {
            write_page(out, page, self.window.page(index))?;
        }
        debug!("snapshot written, PC=${:04X}", self.header.pc);
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(SNAPSHOT_SIZE);
        self.write_to(&mut data)?;
        Ok(data)
    }
}

/// Encode a memory image into .Z80 snapshot bytes.
pub fn encode(image: &[u8], dump_address: u16, run_address: u16) -> Result<Vec<u8>> {
    Snapshot::new(dump_address, run_address, image)?.to_bytes()
}
