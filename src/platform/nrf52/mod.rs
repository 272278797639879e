//! nRF52840 platform implementation
//!
//! Implements the platform traits over `nrf52840-hal` for the Adafruit
//! Feather nRF52840. The MAX3421E FeatherWing sits on SPIM1 with manual
//! chip select on P0.11 and its interrupt output on P0.31.

pub mod clock;
pub mod gpio;
pub mod irq;
pub mod spi;

pub use clock::Nrf52Clock;
pub use gpio::{Nrf52InputPin, Nrf52OutputPin};
pub use irq::Nrf52Irq;
pub use spi::Nrf52Spi;

use nrf52840_hal::gpio::{p0, Level};
use nrf52840_hal::pac;
use nrf52840_hal::spim::{self, Frequency, Spim, MODE_0};

/// Claim the FeatherWing's peripherals and wire up the platform pieces.
///
/// Takes ownership of the device and core peripherals, so calling this
/// twice is impossible by construction - peripheral claiming is the type
/// system's job here, not a runtime check.
pub fn featherwing(
    p: pac::Peripherals,
    core: cortex_m::Peripherals,
) -> (Nrf52Clock, Nrf52OutputPin, Nrf52Spi<pac::SPIM1>, Nrf52Irq) {
    let port0 = p0::Parts::new(p.P0);

    // Manual chip select, deasserted from the first cycle.
    let cs = Nrf52OutputPin::new(port0.p0_11.into_push_pull_output(Level::High).degrade());

    let pins = spim::Pins {
        sck: Some(port0.p0_12.into_push_pull_output(Level::Low).degrade()),
        mosi: Some(port0.p0_13.into_push_pull_output(Level::Low).degrade()),
        miso: Some(port0.p0_14.into_floating_input().degrade()),
    };
    // Blocking SPIM: 4 MHz, mode 0, MSB first, 0xFF overrun character.
    let spim = Spim::new(p.SPIM1, pins, Frequency::M4, MODE_0, 0xFF);

    let int_pin = port0.p0_31.into_pullup_input().degrade();
    let irq = Nrf52Irq::new(
        nrf52840_hal::gpiote::Gpiote::new(p.GPIOTE),
        int_pin,
        core.NVIC,
    );

    (
        Nrf52Clock::new(p.CLOCK),
        cs,
        Nrf52Spi::new(spim),
        irq,
    )
}
