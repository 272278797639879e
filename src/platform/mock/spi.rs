//! Mock SPI implementation for testing

use crate::platform::{
    error::{PlatformError, SpiError},
    traits::{SpiConfig, SpiInterface},
    Result,
};
use core::cell::{Cell, RefCell};
use heapless::Vec;

/// Capacity of one logged transaction's data
pub const XFER_CAPACITY: usize = 64;
/// Capacity of the transaction log
pub const LOG_CAPACITY: usize = 32;

/// SPI transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpiTransaction {
    /// Transfer (full-duplex)
    Transfer {
        write: Vec<u8, XFER_CAPACITY>,
        read: Vec<u8, XFER_CAPACITY>,
    },
    /// Write only
    Write { data: Vec<u8, XFER_CAPACITY> },
    /// Read only
    Read { len: usize },
}

/// Mock SPI implementation
///
/// Records all transactions for test verification, allows pre-programming
/// expected read data, and can inject a failure into the next operation.
#[derive(Debug)]
pub struct MockSpi {
    config: SpiConfig,
    transactions: RefCell<Vec<SpiTransaction, LOG_CAPACITY>>,
    read_data: RefCell<Vec<u8, XFER_CAPACITY>>,
    fail_next: Cell<Option<SpiError>>,
}

impl MockSpi {
    /// Create a new mock SPI
    pub fn new(config: SpiConfig) -> Self {
        Self {
            config,
            transactions: RefCell::new(Vec::new()),
            read_data: RefCell::new(Vec::new()),
            fail_next: Cell::new(None),
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<SpiTransaction, LOG_CAPACITY> {
        self.transactions.borrow().clone()
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.borrow_mut().clear();
    }

    /// Set data to return for read operations
    pub fn set_read_data(&mut self, data: &[u8]) {
        let mut read_data = self.read_data.borrow_mut();
        read_data.clear();
        read_data.extend_from_slice(data).ok();
    }

    /// Fail the next bus operation with `err`, recording no transaction
    pub fn fail_next(&mut self, err: SpiError) {
        self.fail_next.set(Some(err));
    }

    /// Configuration the mock was created with
    pub fn config(&self) -> &SpiConfig {
        &self.config
    }

    fn take_failure(&self) -> Result<()> {
        match self.fail_next.take() {
            Some(err) => Err(PlatformError::Spi(err)),
            None => Ok(()),
        }
    }

    fn fill_read(&self, buffer: &mut [u8]) {
        let mut source = self.read_data.borrow_mut();
        let n = core::cmp::min(buffer.len(), source.len());
        buffer[..n].copy_from_slice(&source[..n]);
        let rest: Vec<u8, XFER_CAPACITY> = Vec::from_slice(&source[n..]).unwrap_or_default();
        *source = rest;
    }

    fn log(&self, transaction: SpiTransaction) {
        // The log saturates; tests never come close to the capacity.
        self.transactions.borrow_mut().push(transaction).ok();
    }

    fn capture(data: &[u8]) -> Result<Vec<u8, XFER_CAPACITY>> {
        Vec::from_slice(data).map_err(|_| PlatformError::Spi(SpiError::Overrun))
    }
}

impl SpiInterface for MockSpi {
    fn transfer(&mut self, write_buffer: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.take_failure()?;
        if write_buffer.len() != read_buffer.len() {
            return Err(PlatformError::Spi(SpiError::TransferFailed));
        }
        self.fill_read(read_buffer);
        self.log(SpiTransaction::Transfer {
            write: Self::capture(write_buffer)?,
            read: Self::capture(read_buffer)?,
        });
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.take_failure()?;
        self.log(SpiTransaction::Write {
            data: Self::capture(data)?,
        });
        Ok(())
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<()> {
        self.take_failure()?;
        self.fill_read(buffer);
        self.log(SpiTransaction::Read { len: buffer.len() });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_spi_write() {
        let mut spi = MockSpi::new(SpiConfig::default());
        spi.write(&[0x01, 0x02, 0x03]).unwrap();

        let transactions = spi.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(
            transactions[0],
            SpiTransaction::Write {
                data: Vec::from_slice(&[0x01, 0x02, 0x03]).unwrap()
            }
        );
    }

    #[test]
    fn test_mock_spi_read() {
        let mut spi = MockSpi::new(SpiConfig::default());
        spi.set_read_data(&[0xAA, 0xBB, 0xCC]);

        let mut buffer = [0u8; 3];
        spi.read(&mut buffer).unwrap();

        assert_eq!(buffer, [0xAA, 0xBB, 0xCC]);

        let transactions = spi.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0], SpiTransaction::Read { len: 3 });
    }

    #[test]
    fn test_mock_spi_transfer() {
        let mut spi = MockSpi::new(SpiConfig::default());
        spi.set_read_data(&[0x12, 0x34]);

        let mut read_buf = [0u8; 2];
        spi.transfer(&[0xA0, 0xB0], &mut read_buf).unwrap();

        assert_eq!(read_buf, [0x12, 0x34]);

        let transactions = spi.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(
            transactions[0],
            SpiTransaction::Transfer {
                write: Vec::from_slice(&[0xA0, 0xB0]).unwrap(),
                read: Vec::from_slice(&[0x12, 0x34]).unwrap(),
            }
        );
    }

    #[test]
    fn test_mock_spi_read_data_consumed_in_order() {
        let mut spi = MockSpi::new(SpiConfig::default());
        spi.set_read_data(&[0x01, 0x02, 0x03, 0x04]);

        let mut first = [0u8; 2];
        spi.read(&mut first).unwrap();
        assert_eq!(first, [0x01, 0x02]);

        let mut second = [0u8; 2];
        spi.read(&mut second).unwrap();
        assert_eq!(second, [0x03, 0x04]);
    }

    #[test]
    fn test_mock_spi_injected_failure() {
        let mut spi = MockSpi::new(SpiConfig::default());
        spi.fail_next(SpiError::Timeout);

        assert_eq!(
            spi.write(&[0x00]),
            Err(PlatformError::Spi(SpiError::Timeout))
        );
        // The failed operation records nothing, the next one succeeds.
        assert!(spi.transactions().is_empty());
        spi.write(&[0x00]).unwrap();
        assert_eq!(spi.transactions().len(), 1);
    }
}
