//
// Memory map of the RDRAM component
//
// Three disjoint ranges belong to this device. The enclosing bus classifies
// every access before calling in; the access layer only ever subtracts its
// own region base.
//

// 0x00000000 - RDRAM: 8MB
pub const RDRAM_REGION_START: u32       = 0x0000_0000;
pub const RDRAM_REGION_END: u32         = 0x007F_FFFF;
pub const RDRAM_REGION_SIZE: usize      = (RDRAM_REGION_END - RDRAM_REGION_START + 1) as usize;
// 0x007FFFFF ---
// 0x03F00000 - RDRAM configuration registers: 40B
pub const RDRAM_REGS_REGION_START: u32  = 0x03F0_0000;
pub const RDRAM_REGS_REGION_END: u32    = 0x03F0_0027;
pub const RDRAM_REGS_REGION_SIZE: usize = (RDRAM_REGS_REGION_END - RDRAM_REGS_REGION_START + 1) as usize;
// 0x03F00027 ---
// 0x04700000 - RAM interface registers: 32B
pub const RI_REGS_REGION_START: u32     = 0x0470_0000;
pub const RI_REGS_REGION_END: u32       = 0x0470_001F;
pub const RI_REGS_REGION_SIZE: usize    = (RI_REGS_REGION_END - RI_REGS_REGION_START + 1) as usize;
// 0x0470001F ---

// One 32-bit slot every 4 bytes
pub const NUM_RDRAM_REGISTERS: usize    = RDRAM_REGS_REGION_SIZE / 4;
pub const NUM_RI_REGISTERS: usize       = RI_REGS_REGION_SIZE / 4;

/// Address ranges recognized by this component
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Region {
    Rdram,
    RdramRegisters,
    InterfaceRegisters,
}

impl Region {
    /// Classify a bus address against the fixed range table
    ///
    /// Helper for the enclosing bus dispatcher, the access layer never
    /// calls it.
    pub fn classify(address: u32) -> Option<Region> {
        match address {
            RDRAM_REGION_START..=RDRAM_REGION_END => Some(Region::Rdram),
            RDRAM_REGS_REGION_START..=RDRAM_REGS_REGION_END => Some(Region::RdramRegisters),
            RI_REGS_REGION_START..=RI_REGS_REGION_END => Some(Region::InterfaceRegisters),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_classifies_each_region() {
        assert_eq!(Region::classify(0x0000_0000), Some(Region::Rdram));
        assert_eq!(Region::classify(0x007F_FFFF), Some(Region::Rdram));
        assert_eq!(Region::classify(0x03F0_0000), Some(Region::RdramRegisters));
        assert_eq!(Region::classify(0x03F0_0027), Some(Region::RdramRegisters));
        assert_eq!(Region::classify(0x0470_0000), Some(Region::InterfaceRegisters));
        assert_eq!(Region::classify(0x0470_001F), Some(Region::InterfaceRegisters));
    }

    #[test]
    fn it_rejects_unmapped_addresses() {
        assert_eq!(Region::classify(0x0080_0000), None);
        assert_eq!(Region::classify(0x03F0_0028), None);
        assert_eq!(Region::classify(0x0470_0020), None);
        assert_eq!(Region::classify(0xFFFF_FFFF), None);
    }

    #[test]
    fn it_derives_slot_counts_from_range_lengths() {
        assert_eq!(NUM_RDRAM_REGISTERS, 10);
        assert_eq!(NUM_RI_REGISTERS, 8);
    }
}
