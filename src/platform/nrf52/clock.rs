//! nRF52 low-frequency clock control

use crate::platform::traits::ClockInterface;
use nrf52840_hal::pac::CLOCK;

/// LFCLK control over the CLOCK peripheral.
pub struct Nrf52Clock {
    clock: CLOCK,
}

impl Nrf52Clock {
    /// Take ownership of the CLOCK peripheral.
    pub fn new(clock: CLOCK) -> Self {
        Self { clock }
    }
}

impl ClockInterface for Nrf52Clock {
    fn start_lfclk(&mut self) {
        // Stop first in case we were entered from a running application
        // without a reset in between.
        self.clock.tasks_lfclkstop.write(|w| unsafe { w.bits(1) });

        // The internal RC oscillator runs on every board variant; boards
        // without an LF crystal would never come up on the XTAL source.
        self.clock.lfclksrc.write(|w| w.src().rc());
        self.clock.tasks_lfclkstart.write(|w| unsafe { w.bits(1) });
    }

    fn is_lfclk_running(&self) -> bool {
        self.clock.lfclkstat.read().state().is_running()
    }
}
