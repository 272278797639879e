//! SPI interface trait
//!
//! This module defines the SPI bus communication interface that platform
//! implementations must provide.

use crate::platform::Result;

/// SPI signal pin assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiPins {
    /// Clock (SCK) pin number
    pub sck: u8,
    /// Controller-out (MOSI) pin number
    pub mosi: u8,
    /// Controller-in (MISO) pin number
    pub miso: u8,
}

/// SPI configuration
///
/// Fixed at initialization; the bus is never reconfigured at runtime.
#[derive(Debug, Clone, Copy)]
pub struct SpiConfig {
    /// Bus frequency in Hz
    pub frequency: u32,
    /// SPI mode (CPOL and CPHA)
    pub mode: SpiMode,
    /// Bit order
    pub bit_order: SpiBitOrder,
    /// Signal pin assignment
    pub pins: SpiPins,
}

impl Default for SpiConfig {
    fn default() -> Self {
        // Reference configuration: 4 MHz, mode 0, MSB first.
        Self {
            frequency: 4_000_000,
            mode: SpiMode::Mode0,
            bit_order: SpiBitOrder::MsbFirst,
            pins: SpiPins {
                sck: 12,
                mosi: 13,
                miso: 14,
            },
        }
    }
}

/// SPI mode (Clock Polarity and Phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiMode {
    /// CPOL=0, CPHA=0
    Mode0,
    /// CPOL=0, CPHA=1
    Mode1,
    /// CPOL=1, CPHA=0
    Mode2,
    /// CPOL=1, CPHA=1
    Mode3,
}

/// SPI bit order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiBitOrder {
    /// Most significant bit first
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

/// SPI interface trait
///
/// Platform implementations must provide this interface for SPI bus
/// communication. All operations block the calling context until the bus
/// activity has completed; there are no completion callbacks.
///
/// # Safety Invariants
///
/// - SPI peripheral must be initialized before use
/// - Only one owner per SPI bus instance
/// - Chip select (CS) is managed separately by the caller via GPIO
pub trait SpiInterface {
    /// Transfer data (full-duplex)
    ///
    /// Simultaneously transmits data from `write_buffer` and receives data
    /// into `read_buffer`. Both buffers must have the same length.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Spi` if the transfer fails, the buffers have
    /// different lengths, or a timeout occurs.
    fn transfer(&mut self, write_buffer: &[u8], read_buffer: &mut [u8]) -> Result<()>;

    /// Write data (transmit only)
    ///
    /// Transmits data and discards received bytes.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Spi` if the write operation fails.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Read data (receive only)
    ///
    /// Receives data while transmitting the overrun character `0xFF`.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Spi` if the read operation fails.
    fn read(&mut self, buffer: &mut [u8]) -> Result<()>;
}
