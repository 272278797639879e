//! nRF52 GPIO implementation
//!
//! Wraps degraded `nrf52840-hal` pins in the `GpioInterface` trait. Pins
//! are committed to a direction when the board is wired up; a runtime mode
//! change is only tracked, the way the chip-select and interrupt lines are
//! used never needs one.

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};
use embedded_hal::digital::v2::{InputPin, OutputPin, StatefulOutputPin};
use nrf52840_hal::gpio::{Input, Output, Pin, PullUp, PushPull};

/// Push-pull output pin.
pub struct Nrf52OutputPin {
    pin: Pin<Output<PushPull>>,
    mode: GpioMode,
}

impl Nrf52OutputPin {
    /// Wrap an already-configured output pin.
    pub fn new(pin: Pin<Output<PushPull>>) -> Self {
        Self {
            pin,
            mode: GpioMode::OutputPushPull,
        }
    }
}

impl GpioInterface for Nrf52OutputPin {
    fn set_high(&mut self) -> Result<()> {
        self.pin
            .set_high()
            .map_err(|_| PlatformError::Gpio(GpioError::HardwareError))
    }

    fn set_low(&mut self) -> Result<()> {
        self.pin
            .set_low()
            .map_err(|_| PlatformError::Gpio(GpioError::HardwareError))
    }

    fn read(&self) -> bool {
        self.pin.is_set_high().unwrap_or(false)
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        // The pin was committed to push-pull output at board setup; the
        // typestate cannot change here, so only the bookkeeping moves.
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

/// Pulled-up input pin.
pub struct Nrf52InputPin {
    pin: Pin<Input<PullUp>>,
    mode: GpioMode,
}

impl Nrf52InputPin {
    /// Wrap an already-configured pulled-up input pin.
    pub fn new(pin: Pin<Input<PullUp>>) -> Self {
        Self {
            pin,
            mode: GpioMode::InputPullUp,
        }
    }
}

impl GpioInterface for Nrf52InputPin {
    fn set_high(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn set_low(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn read(&self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}
