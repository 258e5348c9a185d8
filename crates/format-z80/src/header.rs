//! Version 2 .Z80 header: 30-byte base header, 2-byte extended length and
//! the 23-byte extended header.
//!
//! Only the fields the converter sets are modelled. Everything else
//! (general registers, IFFs, AY register file) is written as zero.

/// Size of the base header shared by all .Z80 versions.
pub const BASE_HEADER_SIZE: usize = 30;

/// Extended header length for version 2 files.
pub const V2_EXT_HEADER_LEN: u16 = 23;

/// Total header size: base + length word + extended header.
pub const HEADER_SIZE: usize = BASE_HEADER_SIZE + 2 + V2_EXT_HEADER_LEN as usize;

/// Hardware mode 3 is the 128K Spectrum in version 2 numbering.
pub const HW_MODE_128K: u8 = 3;

/// Offset of the I register.
const OFF_I: usize = 10;
/// Offset of flags byte 1 (bit 0 R7, bits 1-3 border, bit 5 compressed).
const OFF_FLAGS1: usize = 12;
/// Offset of flags byte 2 (bits 0-1 interrupt mode).
const OFF_FLAGS2: usize = 29;
/// Offset of the extended header length word.
const OFF_EXT_LEN: usize = 30;
/// Offset of PC in the extended header.
const OFF_PC: usize = 32;
/// Offset of the hardware mode byte.
const OFF_HW_MODE: usize = 34;
/// Offset of the last write to port $7FFD.
const OFF_PORT_7FFD: usize = 35;
/// Offset of the emulation flags byte (bit 2 = AY in use).
const OFF_EMU_FLAGS: usize = 37;

/// Emulation flags bit: AY sound chip in use.
const EMU_FLAG_AY: u8 = 0x04;

/// Header values written into the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Z80Header {
    /// Interrupt vector register.
    pub i: u8,
    /// Border colour (0-7).
    pub border: u8,
    /// Interrupt mode (0-2).
    pub im: u8,
    /// Program counter to resume at.
    pub pc: u16,
    /// Hardware mode (3 = 128K).
    pub hw_mode: u8,
    /// Last value written to port $7FFD: bits 0-2 RAM bank at $C000,
    /// bit 4 ROM select.
    pub port_7ffd: u8,
    /// Emulation flags bit 2: AY in use.
    pub ay_in_use: bool,
}

impl Default for Z80Header {
    /// Freshly booted 128K machine: I=$3F, white border, IM 1, RAM bank 0
    /// paged in and the 48 BASIC ROM bit set, AY enabled.
    fn default() -> Self {
        Self {
            i: 0x3F,
            border: 7,
            im: 1,
            pc: 0,
            hw_mode: HW_MODE_128K,
            port_7ffd: 0x10,
            ay_in_use: true,
        }
    }
}

impl Z80Header {
    /// Default header that resumes execution at `run_address`.
    #[must_use]
    pub fn new(run_address: u16) -> Self {
        Self {
            pc: run_address,
            ..Self::default()
        }
    }

    /// Serialise to the fixed 55-byte layout.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut data = [0u8; HEADER_SIZE];

        data[OFF_I] = self.i;
        // Pages are written raw, so the compressed bit stays clear.
        data[OFF_FLAGS1] = (self.border & 0x07) << 1;
        data[OFF_FLAGS2] = self.im & 0x03;

        data[OFF_EXT_LEN] = V2_EXT_HEADER_LEN as u8;
        data[OFF_EXT_LEN + 1] = (V2_EXT_HEADER_LEN >> 8) as u8;

        data[OFF_PC] = self.pc as u8;
        data[OFF_PC + 1] = (self.pc >> 8) as u8;

        data[OFF_HW_MODE] = self.hw_mode;
        data[OFF_PORT_7FFD] = self.port_7ffd;
        if self.ay_in_use {
            data[OFF_EMU_FLAGS] = EMU_FLAG_AY;
        }

        data
    }
}
