use log::trace;

use crate::region::{
    NUM_RDRAM_REGISTERS, NUM_RI_REGISTERS, RDRAM_REGS_REGION_START, RI_REGS_REGION_START,
};

//
// Hardware reset values of the interface bank
//
const DEFAULT_REG_RI_MODE: u32      = 0x0000_000E;
const DEFAULT_REG_RI_CONFIG: u32    = 0x0000_0040;
const DEFAULT_REG_RI_SELECT: u32    = 0x0000_0014;
const DEFAULT_REG_RI_REFRESH: u32   = 0x0006_3634;

/// Interface register slots, in address order (slot i at base + 4 * i)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RiRegister {
    Mode,
    Config,
    CurrentLoad,
    Select,
    Refresh,
    Latency,
    ReadError,
    WriteError,
}

/// Device register slots, in address order
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RdramRegister {
    Config,
    DeviceId,
    Delay,
    Mode,
    RefInterval,
    RefRow,
    RasInterval,
    MinInterval,
    AddrSelect,
    DeviceManuf,
}

// Diagnostic names, parallel to the slot enums
const RI_REGISTER_MNEMONICS: [&str; NUM_RI_REGISTERS] = [
    "RI_MODE_REG",
    "RI_CONFIG_REG",
    "RI_CURRENT_LOAD_REG",
    "RI_SELECT_REG",
    "RI_REFRESH_REG",
    "RI_LATENCY_REG",
    "RI_RERROR_REG",
    "RI_WERROR_REG",
];

const RDRAM_REGISTER_MNEMONICS: [&str; NUM_RDRAM_REGISTERS] = [
    "RDRAM_CONFIG_REG",
    "RDRAM_DEVICE_ID_REG",
    "RDRAM_DELAY_REG",
    "RDRAM_MODE_REG",
    "RDRAM_REF_INTERVAL_REG",
    "RDRAM_REF_ROW_REG",
    "RDRAM_RAS_INTERVAL_REG",
    "RDRAM_MIN_INTERVAL_REG",
    "RDRAM_ADDR_SELECT_REG",
    "RDRAM_DEVICE_MANUF_REG",
];

impl RiRegister {
    pub fn mnemonic(self) -> &'static str {
        RI_REGISTER_MNEMONICS[self as usize]
    }

    pub fn address(self) -> u32 {
        RI_REGS_REGION_START + 4 * self as u32
    }
}

impl RdramRegister {
    pub fn mnemonic(self) -> &'static str {
        RDRAM_REGISTER_MNEMONICS[self as usize]
    }

    pub fn address(self) -> u32 {
        RDRAM_REGS_REGION_START + 4 * self as u32
    }
}

/// RAM interface register bank
///
/// Registers are host-native 32-bit words, no byte-order conversion: the
/// controlling logic always accesses them at full-word granularity.
pub struct RiRegisters {
    slots: [u32; NUM_RI_REGISTERS],
}

impl RiRegisters {
    pub fn new() -> Self {
        let mut regs = Self { slots: [0u32; NUM_RI_REGISTERS] };
        regs.reset();
        regs
    }

    /// Restore the documented power-on state
    pub fn reset(&mut self) {
        self.slots = [0u32; NUM_RI_REGISTERS];
        self.slots[RiRegister::Mode as usize] = DEFAULT_REG_RI_MODE;
        self.slots[RiRegister::Config as usize] = DEFAULT_REG_RI_CONFIG;
        self.slots[RiRegister::Select as usize] = DEFAULT_REG_RI_SELECT;
        self.slots[RiRegister::Refresh as usize] = DEFAULT_REG_RI_REFRESH;
    }

    /// Read by absolute bus address, already classified by the bus
    pub fn read(&self, address: u32) -> u32 {
        let slot = ((address - RI_REGS_REGION_START) / 4) as usize;

        trace!("reading from register [{}]", RI_REGISTER_MNEMONICS[slot]);
        self.slots[slot]
    }

    /// Write by absolute bus address, already classified by the bus
    pub fn write(&mut self, address: u32, value: u32) {
        let slot = ((address - RI_REGS_REGION_START) / 4) as usize;

        trace!("writing to register [{}]", RI_REGISTER_MNEMONICS[slot]);
        self.slots[slot] = value;
    }

    pub fn get(&self, reg: RiRegister) -> u32 {
        self.slots[reg as usize]
    }

    pub fn set(&mut self, reg: RiRegister, value: u32) {
        self.slots[reg as usize] = value;
    }
}

/// RDRAM device register bank
///
/// Same discipline as the interface bank over a disjoint range. Every slot
/// is zero at power-on.
pub struct RdramRegisters {
    slots: [u32; NUM_RDRAM_REGISTERS],
}

impl RdramRegisters {
    pub fn new() -> Self {
        Self { slots: [0u32; NUM_RDRAM_REGISTERS] }
    }

    pub fn reset(&mut self) {
        self.slots = [0u32; NUM_RDRAM_REGISTERS];
    }

    /// Read by absolute bus address, already classified by the bus
    pub fn read(&self, address: u32) -> u32 {
        let slot = ((address - RDRAM_REGS_REGION_START) / 4) as usize;

        trace!("reading from register [{}]", RDRAM_REGISTER_MNEMONICS[slot]);
        self.slots[slot]
    }

    /// Write by absolute bus address, already classified by the bus
    pub fn write(&mut self, address: u32, value: u32) {
        let slot = ((address - RDRAM_REGS_REGION_START) / 4) as usize;

        trace!("writing to register [{}]", RDRAM_REGISTER_MNEMONICS[slot]);
        self.slots[slot] = value;
    }

    pub fn get(&self, reg: RdramRegister) -> u32 {
        self.slots[reg as usize]
    }

    pub fn set(&mut self, reg: RdramRegister, value: u32) {
        self.slots[reg as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_applies_interface_defaults_at_power_on() {
        let regs = RiRegisters::new();

        assert_eq!(regs.get(RiRegister::Mode), 0x0000_000E);
        assert_eq!(regs.get(RiRegister::Config), 0x0000_0040);
        assert_eq!(regs.get(RiRegister::Select), 0x0000_0014);
        assert_eq!(regs.get(RiRegister::Refresh), 0x0006_3634);
        assert_eq!(regs.get(RiRegister::CurrentLoad), 0);
        assert_eq!(regs.get(RiRegister::Latency), 0);
        assert_eq!(regs.get(RiRegister::ReadError), 0);
        assert_eq!(regs.get(RiRegister::WriteError), 0);
    }

    #[test]
    fn it_zeroes_every_device_register_at_power_on() {
        let regs = RdramRegisters::new();

        for slot in 0..NUM_RDRAM_REGISTERS {
            assert_eq!(regs.read(RDRAM_REGS_REGION_START + 4 * slot as u32), 0);
        }
    }

    #[test]
    fn it_resolves_absolute_addresses_to_slots() {
        let mut regs = RiRegisters::new();

        regs.write(RiRegister::Refresh.address(), 0x1234_5678);

        assert_eq!(regs.get(RiRegister::Refresh), 0x1234_5678);
        assert_eq!(regs.read(RI_REGS_REGION_START + 0x10), 0x1234_5678);
    }

    #[test]
    fn it_keeps_writes_isolated_to_one_slot() {
        let mut regs = RiRegisters::new();
        let before: [u32; NUM_RI_REGISTERS - 1] = [
            regs.get(RiRegister::Mode),
            regs.get(RiRegister::Config),
            regs.get(RiRegister::CurrentLoad),
            regs.get(RiRegister::Select),
            regs.get(RiRegister::Refresh),
            regs.get(RiRegister::ReadError),
            regs.get(RiRegister::WriteError),
        ];

        regs.set(RiRegister::Latency, 0xFFFF_FFFF);

        assert_eq!(regs.get(RiRegister::Latency), 0xFFFF_FFFF);
        assert_eq!(before[0], regs.get(RiRegister::Mode));
        assert_eq!(before[1], regs.get(RiRegister::Config));
        assert_eq!(before[2], regs.get(RiRegister::CurrentLoad));
        assert_eq!(before[3], regs.get(RiRegister::Select));
        assert_eq!(before[4], regs.get(RiRegister::Refresh));
        assert_eq!(before[5], regs.get(RiRegister::ReadError));
        assert_eq!(before[6], regs.get(RiRegister::WriteError));
    }

    #[test]
    fn it_maps_slots_to_mnemonics_and_addresses() {
        assert_eq!(RiRegister::Mode.mnemonic(), "RI_MODE_REG");
        assert_eq!(RiRegister::WriteError.mnemonic(), "RI_WERROR_REG");
        assert_eq!(RiRegister::Mode.address(), 0x0470_0000);
        assert_eq!(RiRegister::WriteError.address(), 0x0470_001C);

        assert_eq!(RdramRegister::Config.mnemonic(), "RDRAM_CONFIG_REG");
        assert_eq!(RdramRegister::DeviceManuf.mnemonic(), "RDRAM_DEVICE_MANUF_REG");
        assert_eq!(RdramRegister::Config.address(), 0x03F0_0000);
        assert_eq!(RdramRegister::DeviceManuf.address(), 0x03F0_0024);
    }

    #[test]
    fn it_restores_defaults_on_reset() {
        let mut regs = RiRegisters::new();

        regs.set(RiRegister::Mode, 0);
        regs.set(RiRegister::Latency, 0xDEAD_BEEF);
        regs.reset();

        assert_eq!(regs.get(RiRegister::Mode), 0x0000_000E);
        assert_eq!(regs.get(RiRegister::Latency), 0);
    }
}
