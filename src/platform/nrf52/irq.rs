//! nRF52 edge-sensing interrupt line over GPIOTE
//!
//! Edge sensing is configured once on GPIOTE channel 0. Runtime masking
//! goes through the NVIC enable bit: GPIOTE's own trigger enable/disable
//! clears the latched pending state and would drop an edge raised while
//! disabled, leaving the host stack waiting for a notification that never
//! comes. The NVIC keeps the pend bit across a masked window and services
//! it on unmask.

use core::cell::Cell;
use critical_section::Mutex;

use crate::platform::{
    error::{IrqError, PlatformError},
    traits::{Edge, EdgeHandler, IrqInterface},
    Result,
};
use cortex_m::peripheral::NVIC;
use nrf52840_hal::gpio::{Input, Pin, PullUp};
use nrf52840_hal::gpiote::Gpiote;
use nrf52840_hal::pac::{self, interrupt, Interrupt};

/// GPIOTE priority; raised above the application baseline so edge routing
/// is not starved by other handlers.
const GPIOTE_PRIORITY: u8 = 2 << 5; // nRF52 implements the top 3 priority bits

/// Pin number and handler consulted by the GPIOTE vector.
static ROUTE: Mutex<Cell<Option<(u8, &'static dyn EdgeHandler)>>> = Mutex::new(Cell::new(None));

/// Edge-sensing line on GPIOTE channel 0.
pub struct Nrf52Irq {
    gpiote: Gpiote,
    pin: Pin<Input<PullUp>>,
    pin_number: u8,
    nvic: NVIC,
    configured: bool,
}

impl Nrf52Irq {
    /// Take ownership of the GPIOTE block, the interrupt input pin, and
    /// the NVIC handle used for priority setup.
    pub fn new(gpiote: Gpiote, pin: Pin<Input<PullUp>>, nvic: NVIC) -> Self {
        let pin_number = pin.pin();
        Self {
            gpiote,
            pin,
            pin_number,
            nvic,
            configured: false,
        }
    }
}

impl IrqInterface for Nrf52Irq {
    fn configure(&mut self, trigger: Edge, handler: &'static dyn EdgeHandler) -> Result<()> {
        if self.configured {
            return Err(PlatformError::Irq(IrqError::AlreadyConfigured));
        }

        let channel = self.gpiote.channel0();
        let event = channel.input_pin(&self.pin);
        match trigger {
            Edge::Falling => event.hi_to_lo(),
            Edge::Rising => event.lo_to_hi(),
        };
        event.enable_interrupt();

        critical_section::with(|cs| {
            ROUTE.borrow(cs).set(Some((self.pin_number, handler)));
        });

        unsafe {
            self.nvic.set_priority(Interrupt::GPIOTE, GPIOTE_PRIORITY);
        }

        self.configured = true;
        Ok(())
    }

    fn set_masked(&mut self, masked: bool) {
        // NVIC-level gating only: the GPIOTE sense configuration and its
        // latched pending state stay intact across a masked window.
        if masked {
            NVIC::mask(Interrupt::GPIOTE);
        } else {
            unsafe { NVIC::unmask(Interrupt::GPIOTE) };
        }
    }

    fn is_masked(&self) -> bool {
        !NVIC::is_enabled(Interrupt::GPIOTE)
    }
}

#[interrupt]
fn GPIOTE() {
    // Only channel 0 is in use; acknowledge it and route the edge. The
    // sense direction is fixed at configuration time, so an event here is
    // by construction the configured edge.
    let gpiote = unsafe { &*pac::GPIOTE::ptr() };
    if gpiote.events_in[0].read().bits() != 0 {
        gpiote.events_in[0].write(|w| unsafe { w.bits(0) });
        if let Some((pin, handler)) = critical_section::with(|cs| ROUTE.borrow(cs).get()) {
            handler.on_edge(pin, Edge::Falling);
        }
    }
}
