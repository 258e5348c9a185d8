//! The 48K RAM window ($4000-$FFFF) that gets split into snapshot pages.

use log::debug;

use crate::error::{FormatError, Result};

/// First address of the window.
pub const WINDOW_BASE: u16 = 0x4000;

/// Window size: 48K.
pub const WINDOW_SIZE: usize = 0xC000;

/// Size of one snapshot page.
pub const PAGE_SIZE: usize = 0x4000;

/// Window offset of the attribute area ($5800).
pub const ATTR_OFFSET: usize = 0x1800;

/// Attribute area length: 32 × 24 cells.
pub const ATTR_LEN: usize = 768;

/// White paper, black ink.
pub const DEFAULT_ATTR: u8 = 0x38;

/// Zero-filled 48K RAM image with the attribute area initialised.
#[derive(Clone)]
pub struct MemoryWindow {
    ram: Box<[u8; WINDOW_SIZE]>,
}

impl Default for MemoryWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryWindow {
    #[must_use]
    pub fn new() -> Self {
        let mut ram = Box::new([0u8; WINDOW_SIZE]);
        ram[ATTR_OFFSET..ATTR_OFFSET + ATTR_LEN].fill(DEFAULT_ATTR);
        Self { ram }
    }

    /// Copy `image` into the window so its first byte lands at `address`.
    ///
    /// The image may be shorter than the space left in the window. It may
    /// not start below $4000 or run past $FFFF.
    pub fn place(&mut self, address: u16, image: &[u8]) -> Result<()> {
        let offset = window_offset(address)?;
        let room = WINDOW_SIZE - offset;
        if image.len() > room {
            return Err(FormatError::ImageOverflow {
                address,
                len: image.len(),
                overflow: image.len() - room,
            });
        }

        debug!(
            "placing {} bytes at ${address:04X} (window offset {offset})",
            image.len()
        );
        self.ram[offset..offset + image.len()].copy_from_slice(image);
        Ok(())
    }

    /// One 16K third of the window: 0 = $4000, 1 = $8000, 2 = $C000.
    #[must_use]
    pub fn page(&self, index: usize) -> &[u8] {
        &self.ram[index * PAGE_SIZE..(index + 1) * PAGE_SIZE]
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.ram[..]
    }
}

/// Translate a Spectrum address into an offset from $4000.
pub fn window_offset(address: u16) -> Result<usize> {
    address
        .checked_sub(WINDOW_BASE)
        .map(usize::from)
        .ok_or(FormatError::AddressBelowWindow { address })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_window_is_zero_except_attributes() {
        let window = MemoryWindow::new();
        let bytes = window.as_bytes();
        assert_eq!(bytes.len(), 49_152);

        for (i, &byte) in bytes.iter().enumerate() {
            let expected = if (6144..6912).contains(&i) { 0x38 } else { 0 };
            assert_eq!(byte, expected, "window byte {i}");
        }
    }

    #[test]
    fn offset_is_relative_to_4000() {
        assert_eq!(window_offset(0x4000).unwrap(), 0);
        assert_eq!(window_offset(0x8000).unwrap(), 0x4000);
        assert_eq!(window_offset(0xFFFF).unwrap(), 0xBFFF);
    }

    #[test]
    fn offset_below_window_is_error() {
        let err = window_offset(0x3FFF).unwrap_err();
        assert!(matches!(
            err,
            FormatError::AddressBelowWindow { address: 0x3FFF }
        ));
    }

    #[test]
    fn place_copies_at_offset() {
        let mut window = MemoryWindow::new();
        window.place(0x8000, &[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();

        assert_eq!(&window.as_bytes()[0x4000..0x4004], &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(window.as_bytes()[0x3FFF], 0);
        assert_eq!(window.as_bytes()[0x4004], 0);
    }

    #[test]
    fn place_overwrites_attributes() {
        let mut window = MemoryWindow::new();
        window.place(0x5800, &[0x47; 4]).unwrap();

        assert_eq!(&window.as_bytes()[ATTR_OFFSET..ATTR_OFFSET + 4], &[0x47; 4]);
        assert_eq!(window.as_bytes()[ATTR_OFFSET + 4], DEFAULT_ATTR);
    }

    #[test]
    fn place_fills_window_exactly() {
        let mut window = MemoryWindow::new();
        let image = vec![0xAA; WINDOW_SIZE];
        window.place(0x4000, &image).unwrap();
        assert!(window.as_bytes().iter().all(|&b| b == 0xAA));

        let mut window = MemoryWindow::new();
        window.place(0xFFFF, &[0x55]).unwrap();
        assert_eq!(window.as_bytes()[WINDOW_SIZE - 1], 0x55);
    }

    #[test]
    fn place_rejects_overflow() {
        let mut window = MemoryWindow::new();
        let err = window.place(0xFFF0, &[0u8; 0x20]).unwrap_err();
        assert!(matches!(
            err,
            FormatError::ImageOverflow {
                address: 0xFFF0,
                len: 0x20,
                overflow: 0x10,
            }
        ));
        // Nothing written on failure.
        assert!(window.as_bytes()[0xBFF0..].iter().all(|&b| b == 0));
    }

    #[test]
    fn place_rejects_more_than_48k_at_window_base() {
        let mut window = MemoryWindow::new();
        let image = vec![0xAA; WINDOW_SIZE + 1];
        let err = window.place(0x4000, &image).unwrap_err();
        assert!(matches!(
            err,
            FormatError::ImageOverflow {
                address: 0x4000,
                overflow: 1,
                ..
            }
        ));
    }

    #[test]
    fn place_empty_image_is_noop() {
        let mut window = MemoryWindow::new();
        window.place(0xC000, &[]).unwrap();
        assert_eq!(window.as_bytes(), MemoryWindow::new().as_bytes());
    }

    #[test]
    fn pages_are_thirds() {
        let mut window = MemoryWindow::new();
        window.place(0x4000, &[1]).unwrap();
        window.place(0x8000, &[2]).unwrap();
        window.place(0xC000, &[3]).unwrap();

        for index in 0..3 {
            let page = window.page(index);
            assert_eq!(page.len(), PAGE_SIZE);
            assert_eq!(page[0], index as u8 + 1);
        }
    }
}
