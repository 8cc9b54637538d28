use alloc::boxed::Box;
use alloc::vec::Vec;

use byteorder::{BigEndian, ByteOrder};

use crate::error::Error;
use crate::region::RDRAM_REGION_SIZE;

/// Backing store for the emulated RDRAM address space.
///
/// Multi-byte values are kept in target byte order (big endian); the sized
/// accessors convert to and from host order at the boundary. All offsets are
/// pre-translated by the caller and must leave the full access width inside
/// the buffer, this is not re-checked outside of debug builds.
pub struct Rdram {
    bytes: Box<[u8]>,
}

impl Rdram {
    /// Allocate the full address space, zero-filled
    ///
    /// Deterministic initial contents matter for reproducible runs, so the
    /// zero fill is part of the contract, not an allocator detail.
    pub fn new() -> Result<Self, Error> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(RDRAM_REGION_SIZE)
            .map_err(|_| Error::OutOfMemory(RDRAM_REGION_SIZE))?;
        bytes.resize(RDRAM_REGION_SIZE, 0u8);

        Ok(Self { bytes: bytes.into_boxed_slice() })
    }

    /// Zero the whole buffer, used on reset
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    pub fn read_byte(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    pub fn read_hword(&self, offset: usize) -> u16 {
        debug_assert!(offset + 2 <= self.bytes.len());
        BigEndian::read_u16(&self.bytes[offset..])
    }

    pub fn read_word(&self, offset: usize) -> u32 {
        debug_assert!(offset + 4 <= self.bytes.len());
        BigEndian::read_u32(&self.bytes[offset..])
    }

    pub fn read_dword(&self, offset: usize) -> u64 {
        debug_assert!(offset + 8 <= self.bytes.len());
        BigEndian::read_u64(&self.bytes[offset..])
    }

    pub fn write_byte(&mut self, offset: usize, value: u8) {
        self.bytes[offset] = value;
    }

    pub fn write_hword(&mut self, offset: usize, value: u16) {
        debug_assert!(offset + 2 <= self.bytes.len());
        BigEndian::write_u16(&mut self.bytes[offset..], value);
    }

    pub fn write_word(&mut self, offset: usize, value: u32) {
        debug_assert!(offset + 4 <= self.bytes.len());
        BigEndian::write_u32(&mut self.bytes[offset..], value);
    }

    pub fn write_dword(&mut self, offset: usize, value: u64) {
        debug_assert!(offset + 8 <= self.bytes.len());
        BigEndian::write_u64(&mut self.bytes[offset..], value);
    }

    /// Sub-word write at any alignment
    ///
    /// Copies the first `size` bytes (1..=4) of `value`'s in-memory
    /// representation verbatim. No byte-order conversion happens here, the
    /// caller hands over a pre-swapped value.
    pub fn write_word_unaligned(&mut self, offset: usize, value: u32, size: usize) {
        debug_assert!(size >= 1 && size <= 4);
        let raw = value.to_ne_bytes();
        self.bytes[offset..offset + size].copy_from_slice(&raw[..size]);
    }

    /// Bulk copy out of RDRAM, no conversion
    pub fn copy_from(&self, dest: &mut [u8], offset: usize) {
        dest.copy_from_slice(&self.bytes[offset..offset + dest.len()]);
    }

    /// Bulk copy into RDRAM, no conversion
    pub fn copy_to(&mut self, offset: usize, source: &[u8]) {
        self.bytes[offset..offset + source.len()].copy_from_slice(source);
    }

    /// Read-only raw view, valid as long as the storage lives
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
