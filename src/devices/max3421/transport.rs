//! Blocking SPI register transport
//!
//! One `transfer` call is the unit of bus ownership: chip select is
//! asserted, the exchange runs to completion, chip select is deasserted.
//! The whole sequence executes inside a critical section, so it is atomic
//! with respect to same-core interrupt preemption. That also makes the call
//! safe to issue from the interrupt bridge's handler context: a nested call
//! simply runs within the critical section the handler already holds.

use crate::devices::max3421::chip_select::ChipSelect;
use crate::devices::max3421::registers;
use crate::platform::{GpioInterface, PlatformError, Result, SpiConfig, SpiInterface};

/// The three exchange shapes a request can take.
enum Exchange<'a> {
    /// Full-duplex: write and read the same number of bytes.
    Both {
        write: &'a [u8],
        read: &'a mut [u8],
    },
    /// Transmit only; received bytes are discarded.
    WriteOnly(&'a [u8]),
    /// Receive only; the overrun character is transmitted.
    ReadOnly(&'a mut [u8]),
}

/// One validated SPI exchange.
///
/// Construction enforces the preconditions, so a request that reaches the
/// bus is always well-formed: at least one buffer, a non-zero length, and
/// matching lengths when both buffers are present.
pub struct TransferRequest<'a> {
    op: Exchange<'a>,
}

impl<'a> TransferRequest<'a> {
    /// Build a request from optional write and read buffers.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if both buffers are absent,
    /// the length is zero, or the buffers differ in length. Nothing touches
    /// the bus on rejection.
    pub fn new(write: Option<&'a [u8]>, read: Option<&'a mut [u8]>) -> Result<Self> {
        let op = match (write, read) {
            (None, None) => return Err(PlatformError::InvalidConfig),
            (Some(write), Some(read)) => {
                if write.len() != read.len() {
                    return Err(PlatformError::InvalidConfig);
                }
                Exchange::Both { write, read }
            }
            (Some(write), None) => Exchange::WriteOnly(write),
            (None, Some(read)) => Exchange::ReadOnly(read),
        };
        let request = Self { op };
        if request.len() == 0 {
            return Err(PlatformError::InvalidConfig);
        }
        Ok(request)
    }

    /// Write-only request.
    pub fn write_only(data: &'a [u8]) -> Result<Self> {
        Self::new(Some(data), None)
    }

    /// Read-only request.
    pub fn read_only(buffer: &'a mut [u8]) -> Result<Self> {
        Self::new(None, Some(buffer))
    }

    /// Exchange length in bytes.
    pub fn len(&self) -> usize {
        match &self.op {
            Exchange::Both { write, .. } => write.len(),
            Exchange::WriteOnly(write) => write.len(),
            Exchange::ReadOnly(read) => read.len(),
        }
    }

    /// Always false for a constructed request; zero-length is rejected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Blocking SPI transport with manual chip select.
pub struct SpiTransport<S: SpiInterface, G: GpioInterface> {
    bus: S,
    chip_select: ChipSelect<G>,
    config: SpiConfig,
}

impl<S: SpiInterface, G: GpioInterface> SpiTransport<S, G> {
    /// Take ownership of the configured bus and chip-select line.
    ///
    /// The bus peripheral was claimed when `bus` was constructed; `config`
    /// records the electrical parameters it was claimed with and stays
    /// fixed for the transport's lifetime.
    pub fn init(bus: S, chip_select: ChipSelect<G>, config: SpiConfig) -> Self {
        Self {
            bus,
            chip_select,
            config,
        }
    }

    /// The immutable bus configuration.
    pub fn config(&self) -> &SpiConfig {
        &self.config
    }

    /// The underlying bus.
    pub fn bus(&self) -> &S {
        &self.bus
    }

    /// Mutable access to the underlying bus.
    pub fn bus_mut(&mut self) -> &mut S {
        &mut self.bus
    }

    /// The chip-select line.
    pub fn chip_select(&self) -> &ChipSelect<G> {
        &self.chip_select
    }

    /// Mutable access to the chip-select line, for callers that frame
    /// multi-exchange transactions themselves.
    pub fn chip_select_mut(&mut self) -> &mut ChipSelect<G> {
        &mut self.chip_select
    }

    /// Perform one exchange: assert chip select, run the blocking bus
    /// operation, deassert chip select. Deassertion happens on the failure
    /// path too; a partial exchange is not a state the caller can observe.
    pub fn transfer(&mut self, request: TransferRequest<'_>) -> Result<()> {
        critical_section::with(|_| {
            self.chip_select.set(true)?;
            let result = match request.op {
                Exchange::Both { write, read } => self.bus.transfer(write, read),
                Exchange::WriteOnly(data) => self.bus.write(data),
                Exchange::ReadOnly(buffer) => self.bus.read(buffer),
            };
            let released = self.chip_select.set(false);
            result.and(released)
        })
    }

    /// Write one chip register: command byte with the direction bit set,
    /// then the value.
    pub fn reg_write(&mut self, reg: u8, value: u8) -> Result<()> {
        let frame = [reg | registers::DIR_WRITE, value];
        self.transfer(TransferRequest::write_only(&frame)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::error::SpiError;
    use crate::platform::mock::{MockGpio, MockSpi, SpiTransaction};
    use crate::platform::{GpioMode, SpiConfig};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    fn transport() -> SpiTransport<MockSpi, MockGpio> {
        let chip_select = ChipSelect::configure(MockGpio::new_output()).unwrap();
        SpiTransport::init(MockSpi::new(SpiConfig::default()), chip_select, SpiConfig::default())
    }

    #[test]
    fn test_request_rejects_missing_buffers() {
        assert!(TransferRequest::new(None, None).is_err());
    }

    #[test]
    fn test_request_rejects_zero_length() {
        assert!(TransferRequest::write_only(&[]).is_err());
        let mut empty: [u8; 0] = [];
        assert!(TransferRequest::read_only(&mut empty).is_err());
    }

    #[test]
    fn test_request_rejects_mismatched_lengths() {
        let mut read = [0u8; 2];
        assert!(TransferRequest::new(Some(&[0u8; 3]), Some(&mut read)).is_err());
    }

    #[test]
    fn test_write_only_does_no_read_activity() {
        let mut transport = transport();
        transport
            .transfer(TransferRequest::write_only(&[0x10, 0x20]).unwrap())
            .unwrap();

        let transactions = transport.bus().transactions();
        assert_eq!(transactions.len(), 1);
        assert!(matches!(transactions[0], SpiTransaction::Write { .. }));
    }

    #[test]
    fn test_read_only_does_no_write_activity() {
        let mut transport = transport();
        let mut buffer = [0u8; 3];
        transport
            .transfer(TransferRequest::read_only(&mut buffer).unwrap())
            .unwrap();

        let transactions = transport.bus().transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0], SpiTransaction::Read { len: 3 });
    }

    #[test]
    fn test_full_duplex_exchange() {
        let mut transport = transport();
        let mut read = [0u8; 2];
        transport.bus_mut().set_read_data(&[0x0A, 0x0B]);

        transport
            .transfer(TransferRequest::new(Some(&[0x01, 0x02]), Some(&mut read)).unwrap())
            .unwrap();
        assert_eq!(read, [0x0A, 0x0B]);
    }

    #[test]
    fn test_failed_transfer_still_releases_chip_select() {
        let mut transport = transport();
        transport.bus_mut().fail_next(SpiError::Timeout);

        let result = transport.transfer(TransferRequest::write_only(&[0x00]).unwrap());
        assert!(result.is_err());
        assert!(!transport.chip_select().is_asserted());
    }

    #[test]
    fn test_reg_write_frames_command_byte() {
        let mut transport = transport();
        transport.reg_write(registers::IOPINS1, 0x01).unwrap();

        let transactions = transport.bus().transactions();
        assert_eq!(
            transactions[0],
            SpiTransaction::Write {
                data: heapless::Vec::from_slice(&[0xA2, 0x01]).unwrap()
            }
        );
    }

    // Ordered trace doubles: chip-select transitions and bus activity are
    // recorded into one shared log, proving strict assert/exchange/deassert
    // ordering.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        CsAssert,
        CsDeassert,
        Bus(usize),
    }

    struct TraceGpio {
        trace: Rc<RefCell<Vec<Step>>>,
        state: bool,
        mode: GpioMode,
    }

    impl crate::platform::GpioInterface for TraceGpio {
        fn set_high(&mut self) -> crate::platform::Result<()> {
            self.state = true;
            self.trace.borrow_mut().push(Step::CsDeassert);
            Ok(())
        }

        fn set_low(&mut self) -> crate::platform::Result<()> {
            self.state = false;
            self.trace.borrow_mut().push(Step::CsAssert);
            Ok(())
        }

        fn read(&self) -> bool {
            self.state
        }

        fn set_mode(&mut self, mode: GpioMode) -> crate::platform::Result<()> {
            self.mode = mode;
            Ok(())
        }

        fn mode(&self) -> GpioMode {
            self.mode
        }
    }

    struct TraceSpi {
        trace: Rc<RefCell<Vec<Step>>>,
        fail: bool,
    }

    impl TraceSpi {
        fn record(&self, len: usize) -> crate::platform::Result<()> {
            self.trace.borrow_mut().push(Step::Bus(len));
            if self.fail {
                Err(PlatformError::Spi(SpiError::TransferFailed))
            } else {
                Ok(())
            }
        }
    }

    impl SpiInterface for TraceSpi {
        fn transfer(&mut self, write_buffer: &[u8], _read_buffer: &mut [u8]) -> crate::platform::Result<()> {
            self.record(write_buffer.len())
        }

        fn write(&mut self, data: &[u8]) -> crate::platform::Result<()> {
            self.record(data.len())
        }

        fn read(&mut self, buffer: &mut [u8]) -> crate::platform::Result<()> {
            self.record(buffer.len())
        }
    }

    fn traced(fail: bool) -> (SpiTransport<TraceSpi, TraceGpio>, Rc<RefCell<Vec<Step>>>) {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let gpio = TraceGpio {
            trace: Rc::clone(&trace),
            state: false,
            mode: GpioMode::Input,
        };
        let chip_select = ChipSelect::configure(gpio).unwrap();
        let spi = TraceSpi {
            trace: Rc::clone(&trace),
            fail,
        };
        (
            SpiTransport::init(spi, chip_select, SpiConfig::default()),
            trace,
        )
    }

    #[test]
    fn test_chip_select_brackets_exchange() {
        let (mut transport, trace) = traced(false);
        transport
            .transfer(TransferRequest::write_only(&[0x55, 0xAA]).unwrap())
            .unwrap();

        assert_eq!(
            *trace.borrow(),
            // First entry is the deassert-at-rest from configure().
            vec![Step::CsDeassert, Step::CsAssert, Step::Bus(2), Step::CsDeassert]
        );
    }

    #[test]
    fn test_chip_select_brackets_exchange_on_failure() {
        let (mut transport, trace) = traced(true);
        let result = transport.transfer(TransferRequest::write_only(&[0x55]).unwrap());

        assert!(result.is_err());
        assert_eq!(
            *trace.borrow(),
            vec![Step::CsDeassert, Step::CsAssert, Step::Bus(1), Step::CsDeassert]
        );
    }
}
