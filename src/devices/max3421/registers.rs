//! MAX3421E register addressing
//!
//! The chip frames every SPI transaction with a command byte: the register
//! address sits in bits 7:3, bit 1 selects the direction (1 = write) and
//! bit 0 requests ACKSTAT reporting (unused here). Addresses and framing
//! are from the MAX3421E datasheet, "SPI interface" section.

use bitflags::bitflags;

/// Direction bit of the command byte: set for register writes.
pub const DIR_WRITE: u8 = 0x02;

/// Shifted command-byte address for register `n`.
pub const fn reg(n: u8) -> u8 {
    n << 3
}

/// REVISION (register 18): silicon revision, reads as a fixed value.
pub const REVISION: u8 = reg(18);

/// IOPINS1 (register 20): GPOUT0-3 outputs and GPIN0-3 inputs.
pub const IOPINS1: u8 = reg(20);

bitflags! {
    /// IOPINS1 bit assignments.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IoPins1: u8 {
        /// General-purpose output 0. On the MAX3421E FeatherWing this
        /// switches the external VBUS power rail.
        const GPOUT0 = 0x01;
        /// General-purpose output 1
        const GPOUT1 = 0x02;
        /// General-purpose output 2
        const GPOUT2 = 0x04;
        /// General-purpose output 3
        const GPOUT3 = 0x08;
        /// General-purpose input 0
        const GPIN0 = 0x10;
        /// General-purpose input 1
        const GPIN1 = 0x20;
        /// General-purpose input 2
        const GPIN2 = 0x40;
        /// General-purpose input 3
        const GPIN3 = 0x80;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iopins1_command_byte() {
        assert_eq!(IOPINS1, 0xA0);
        assert_eq!(IOPINS1 | DIR_WRITE, 0xA2);
    }

    #[test]
    fn test_gpout0_is_bit_zero() {
        assert_eq!(IoPins1::GPOUT0.bits(), 0x01);
    }
}
