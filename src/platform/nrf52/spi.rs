//! nRF52 SPI implementation
//!
//! Wraps a blocking `nrf52840-hal` SPIM peripheral in the `SpiInterface`
//! trait. No interrupt handler is registered for the peripheral: every
//! operation stalls the calling context until the bus is done, which is
//! exactly the contract the transport wants.

use crate::platform::{
    error::{PlatformError, SpiError},
    traits::SpiInterface,
    Result,
};
use embedded_hal::blocking::spi::{Transfer, Write};
use nrf52840_hal::spim::{Instance, Spim};

/// Blocking SPIM wrapper.
pub struct Nrf52Spi<T: Instance> {
    spim: Spim<T>,
}

impl<T: Instance> Nrf52Spi<T> {
    /// Wrap a configured SPIM peripheral.
    pub fn new(spim: Spim<T>) -> Self {
        Self { spim }
    }
}

impl<T: Instance> SpiInterface for Nrf52Spi<T> {
    fn transfer(&mut self, write_buffer: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        if write_buffer.len() != read_buffer.len() {
            return Err(PlatformError::Spi(SpiError::TransferFailed));
        }

        // The HAL transfer is in-place; seed the read buffer with the
        // outgoing bytes first.
        read_buffer.copy_from_slice(write_buffer);
        self.spim
            .transfer(read_buffer)
            .map_err(|_| PlatformError::Spi(SpiError::TransferFailed))?;
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.spim
            .write(data)
            .map_err(|_| PlatformError::Spi(SpiError::TransferFailed))
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<()> {
        // Clock out the overrun character while reading.
        for byte in buffer.iter_mut() {
            *byte = 0xFF;
        }
        self.spim
            .transfer(buffer)
            .map_err(|_| PlatformError::Spi(SpiError::TransferFailed))?;
        Ok(())
    }
}
