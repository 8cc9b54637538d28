use log::trace;

use crate::bus::BusHandle;
use crate::error::Error;
use crate::ram::Rdram;
use crate::region::RDRAM_REGION_START;
use crate::registers::{RdramRegister, RdramRegisters, RiRegister, RiRegisters};

/// The RDRAM controller: storage plus the two memory-mapped register banks.
///
/// This is a leaf component of a bus simulator. The bus pre-classifies every
/// address against the fixed range table in [`crate::region`] and then calls
/// the entry point for that range, so each entry point subtracts its own
/// region base unconditionally. Passing an address outside an entry point's
/// declared range is a caller contract violation; nothing here clamps or
/// reinterprets it.
///
/// All operations are direct computations with no suspension point and no
/// internal locking. Access serialization is the bus's responsibility.
pub struct RdramController {
    ram: Rdram,
    rdram_regs: RdramRegisters,
    ri_regs: RiRegisters,
    bus: Option<BusHandle>,
}

impl RdramController {
    /// Create a controller with zeroed RAM and power-on register state
    ///
    /// Allocation failure is the only way this can fail. The bus
    /// association is not made here, see [`RdramController::attach_bus`].
    pub fn new() -> Result<Self, Error> {
        trace!("initializing rdram");

        Ok(Self {
            ram: Rdram::new()?,
            rdram_regs: RdramRegisters::new(),
            ri_regs: RiRegisters::new(),
            bus: None,
        })
    }

    /// Zero RAM and restore both banks' power-on state
    ///
    /// The bus association survives a reset.
    pub fn reset(&mut self) {
        self.ram.clear();
        self.rdram_regs.reset();
        self.ri_regs.reset();
    }

    /// Record which bus this controller is plugged into
    pub fn attach_bus(&mut self, bus: BusHandle) {
        trace!("attaching rdram to bus {}", bus.id());
        self.bus = Some(bus);
    }

    pub fn bus(&self) -> Option<BusHandle> {
        self.bus
    }

    fn ram_offset(address: u32) -> usize {
        (address - RDRAM_REGION_START) as usize
    }

    //
    // RAM entry points: addresses fall in the RDRAM range. Widths of two
    // bytes and up are converted between target (big-endian) and host order.
    //

    pub fn read_byte(&self, address: u32) -> u8 {
        self.ram.read_byte(Self::ram_offset(address))
    }

    pub fn read_hword(&self, address: u32) -> u16 {
        self.ram.read_hword(Self::ram_offset(address))
    }

    pub fn read_word(&self, address: u32) -> u32 {
        self.ram.read_word(Self::ram_offset(address))
    }

    pub fn read_dword(&self, address: u32) -> u64 {
        self.ram.read_dword(Self::ram_offset(address))
    }

    pub fn write_byte(&mut self, address: u32, value: u8) {
        self.ram.write_byte(Self::ram_offset(address), value);
    }

    pub fn write_hword(&mut self, address: u32, value: u16) {
        self.ram.write_hword(Self::ram_offset(address), value);
    }

    pub fn write_word(&mut self, address: u32, value: u32) {
        self.ram.write_word(Self::ram_offset(address), value);
    }

    pub fn write_dword(&mut self, address: u32, value: u64) {
        self.ram.write_dword(Self::ram_offset(address), value);
    }

    /// Write `size` (1..=4) pre-swapped bytes at any alignment, no conversion
    pub fn write_word_unaligned(&mut self, address: u32, value: u32, size: usize) {
        self.ram.write_word_unaligned(Self::ram_offset(address), value, size);
    }

    //
    // Register entry points: addresses fall in the matching register range.
    // Registers are host-native words, no conversion on either path.
    //

    pub fn rdram_reg_read(&self, address: u32) -> u32 {
        self.rdram_regs.read(address)
    }

    pub fn rdram_reg_write(&mut self, address: u32, value: u32) {
        self.rdram_regs.write(address, value);
    }

    pub fn ri_reg_read(&self, address: u32) -> u32 {
        self.ri_regs.read(address)
    }

    pub fn ri_reg_write(&mut self, address: u32, value: u32) {
        self.ri_regs.write(address, value);
    }

    //
    // Bulk transfers: raw bytes, no conversion, used for DMA-style block
    // moves and savestates. The span must lie within the RAM buffer.
    //

    pub fn copy_from_ram(&self, dest: &mut [u8], source: u32) {
        self.ram.copy_from(dest, Self::ram_offset(source));
    }

    pub fn copy_to_ram(&mut self, dest: u32, source: &[u8]) {
        self.ram.copy_to(Self::ram_offset(dest), source);
    }

    /// Read-only raw view of RAM for zero-copy collaborators
    ///
    /// A display/rasterizer can scan out framebuffer regions through this
    /// without going through the sized entry points. The borrow ties its
    /// validity to the controller's lifetime.
    pub fn ram(&self) -> &[u8] {
        self.ram.as_bytes()
    }

    //
    // Named-slot observability, for debuggers and savestates
    //

    pub fn ri_reg(&self, reg: RiRegister) -> u32 {
        self.ri_regs.get(reg)
    }

    pub fn set_ri_reg(&mut self, reg: RiRegister, value: u32) {
        self.ri_regs.set(reg, value);
    }

    pub fn rdram_reg(&self, reg: RdramRegister) -> u32 {
        self.rdram_regs.get(reg)
    }

    pub fn set_rdram_reg(&mut self, reg: RdramRegister, value: u32) {
        self.rdram_regs.set(reg, value);
    }
}
