//! Ordered hardware bring-up and the bridge context object
//!
//! Initialization runs exactly once and in a fixed order: low-frequency
//! clock, chip-select line, SPI transport, interrupt bridge. Only then is
//! control handed to the host stack (its own init, one register write to
//! switch on bus power, and the indefinite task-processing loop).

use crate::devices::max3421::chip_select::ChipSelect;
use crate::devices::max3421::interrupt::InterruptBridge;
use crate::devices::max3421::registers::{self, IoPins1};
use crate::devices::max3421::transport::{SpiTransport, TransferRequest};
use crate::devices::traits::{EventSink, HostBus, HostController};
use crate::platform::{
    ClockInterface, EdgeHandler, GpioInterface, IrqInterface, Result, SpiConfig, SpiInterface,
};
use crate::{log_info, log_warn};

/// Fixed hardware parameters of one bridge instance.
///
/// These vary per deployment but are internally consistent and never change
/// after bring-up.
#[derive(Debug, Clone, Copy)]
pub struct BridgeConfig {
    /// Root hub port the bridge serves
    pub port: u8,
    /// Chip-select pin number
    pub cs_pin: u8,
    /// Interrupt input pin number (falling edge only)
    pub int_pin: u8,
    /// SPI electrical parameters
    pub spi: SpiConfig,
}

impl BridgeConfig {
    /// Reference configuration: Feather nRF52840 with the MAX3421E
    /// FeatherWing on SPI1.
    pub const fn featherwing() -> Self {
        Self {
            port: 0,
            cs_pin: 11,
            int_pin: 31,
            spi: SpiConfig {
                frequency: 4_000_000,
                mode: crate::platform::SpiMode::Mode0,
                bit_order: crate::platform::SpiBitOrder::MsbFirst,
                pins: crate::platform::SpiPins {
                    sck: 12,
                    mosi: 13,
                    miso: 14,
                },
            },
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::featherwing()
    }
}

/// The bridge context: owns the transport and the interrupt bridge for one
/// chip and implements the [`HostBus`] callbacks the stack drives them
/// through.
pub struct Max3421Bridge<G: GpioInterface, S: SpiInterface, I: IrqInterface> {
    transport: SpiTransport<S, G>,
    interrupt: InterruptBridge<I>,
    port: u8,
}

/// Initialize the hardware in strict order and return the bridge context.
///
/// 1. start the low-frequency clock;
/// 2. configure the chip-select line (output, deasserted);
/// 3. take over the SPI bus with the fixed configuration;
/// 4. configure falling-edge sensing with `handler` attached, enabled.
///
/// Each step runs only if the previous one succeeded; an error aborts the
/// bring-up and the system must not continue on partially initialized
/// hardware.
pub fn bring_up<C, G, S, I>(
    clock: &mut C,
    cs_pin: G,
    bus: S,
    irq: I,
    handler: &'static dyn EdgeHandler,
    config: BridgeConfig,
) -> Result<Max3421Bridge<G, S, I>>
where
    C: ClockInterface,
    G: GpioInterface,
    S: SpiInterface,
    I: IrqInterface,
{
    clock.start_lfclk();

    let chip_select = ChipSelect::configure(cs_pin)?;
    let transport = SpiTransport::init(bus, chip_select, config.spi);

    let mut interrupt = InterruptBridge::new(irq);
    interrupt.configure(handler)?;
    interrupt.set_enabled(true);

    log_info!("max3421e transport ready on port {}", config.port);

    Ok(Max3421Bridge {
        transport,
        interrupt,
        port: config.port,
    })
}

impl<G: GpioInterface, S: SpiInterface, I: IrqInterface> Max3421Bridge<G, S, I> {
    /// Hand control to the host stack: run its one-time initialization,
    /// then switch on external bus power through the chip's GPOUT0 pin
    /// (one IOPINS1 write; the FeatherWing routes GPOUT0 to the VBUS
    /// switch).
    pub fn start<H: HostController>(&mut self, stack: &mut H) -> Result<()> {
        stack.init(self)?;
        self.transport
            .reg_write(registers::IOPINS1, IoPins1::GPOUT0.bits())?;
        log_info!("bus power enabled on port {}", self.port);
        Ok(())
    }

    /// One polling-loop iteration: the stack's task-processing entry point.
    pub fn poll<H: HostController>(&mut self, stack: &mut H, events: &mut dyn EventSink) {
        stack.task(self, events);
    }

    /// Drive the stack forever.
    pub fn run<H: HostController>(&mut self, stack: &mut H, events: &mut dyn EventSink) -> ! {
        loop {
            self.poll(stack, events);
        }
    }

    /// Root hub port this bridge serves.
    pub fn port(&self) -> u8 {
        self.port
    }

    /// The SPI transport.
    pub fn transport(&self) -> &SpiTransport<S, G> {
        &self.transport
    }

    /// Mutable access to the SPI transport.
    pub fn transport_mut(&mut self) -> &mut SpiTransport<S, G> {
        &mut self.transport
    }

    /// The interrupt bridge.
    pub fn interrupt(&self) -> &InterruptBridge<I> {
        &self.interrupt
    }

    /// Mutable access to the interrupt bridge.
    pub fn interrupt_mut(&mut self) -> &mut InterruptBridge<I> {
        &mut self.interrupt
    }
}

impl<G: GpioInterface, S: SpiInterface, I: IrqInterface> HostBus for Max3421Bridge<G, S, I> {
    fn interrupt_control(&mut self, port: u8, enabled: bool) {
        if port != self.port {
            return;
        }
        self.interrupt.set_enabled(enabled);
    }

    fn chip_select_control(&mut self, port: u8, active: bool) {
        if port != self.port {
            return;
        }
        if self.transport.chip_select_mut().set(active).is_err() {
            log_warn!("chip select drive failed on port {}", port);
        }
    }

    fn spi_transfer(&mut self, port: u8, write: Option<&[u8]>, read: Option<&mut [u8]>) -> bool {
        if port != self.port {
            return false;
        }
        let request = match TransferRequest::new(write, read) {
            Ok(request) => request,
            Err(_) => return false,
        };
        self.transport.transfer(request).is_ok()
    }
}
