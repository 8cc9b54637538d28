#![no_std]

extern crate alloc;

// Private mods
mod bus;
mod controller;
mod error;
mod ram;
mod registers;
mod region;

// Public exports
pub use bus::BusHandle;
pub use controller::RdramController;
pub use error::Error;
pub use registers::{RdramRegister, RiRegister};
pub use region::{
    Region, NUM_RDRAM_REGISTERS, NUM_RI_REGISTERS, RDRAM_REGION_END, RDRAM_REGION_SIZE,
    RDRAM_REGION_START, RDRAM_REGS_REGION_END, RDRAM_REGS_REGION_SIZE, RDRAM_REGS_REGION_START,
    RI_REGS_REGION_END, RI_REGS_REGION_SIZE, RI_REGS_REGION_START,
};
