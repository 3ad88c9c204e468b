//! Flat 64K byte-addressable memory.

/// Size of the 8080 address space in bytes.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// 64 KiB of RAM covering the whole 16-bit address space.
///
/// Addresses are `u16`, so every access is in range by construction. Words
/// are little-endian: the low byte lives at `addr`, the high byte at
/// `addr + 1` (wrapping from 0xFFFF to 0x0000).
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Zero-filled memory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Memory holding `image` at `origin`, zero everywhere else.
    #[must_use]
    pub fn with_image(origin: u16, image: &[u8]) -> Self {
        let mut memory = Self::new();
        memory.load(origin, image);
        memory
    }

    /// Copy a program image into memory starting at `origin`.
    ///
    /// # Panics
    ///
    /// Panics if the image runs past the end of the address space.
    pub fn load(&mut self, origin: u16, image: &[u8]) {
        let start = usize::from(origin);
        self.data[start..start + image.len()].copy_from_slice(image);
    }

    #[must_use]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.data[usize::from(addr)]
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.data[usize::from(addr)] = value;
    }

    #[must_use]
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(addr.wrapping_add(1), hi);
    }

    /// The whole address space, for inspection.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("non_zero", &used)
            .finish()
    }
}
