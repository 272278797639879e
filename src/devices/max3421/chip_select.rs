//! Manually driven chip-select line
//!
//! The MAX3421E needs software-controlled chip select rather than the SPI
//! peripheral's automatic one, because the host stack frames multi-byte
//! register transactions itself. The line is active-low and rests
//! deasserted (high).

use crate::platform::{GpioInterface, GpioMode, Result};

/// Active-low chip-select line over a GPIO output.
pub struct ChipSelect<G: GpioInterface> {
    pin: G,
}

impl<G: GpioInterface> ChipSelect<G> {
    /// Configure `pin` as a push-pull output and drive it to the
    /// deasserted level.
    pub fn configure(mut pin: G) -> Result<Self> {
        pin.set_mode(GpioMode::OutputPushPull)?;
        pin.set_high()?;
        Ok(Self { pin })
    }

    /// Drive the line. `active` asserts it, which is the physical low
    /// level.
    pub fn set(&mut self, active: bool) -> Result<()> {
        if active {
            self.pin.set_low()
        } else {
            self.pin.set_high()
        }
    }

    /// Whether the line is currently asserted (physical low).
    pub fn is_asserted(&self) -> bool {
        !self.pin.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockGpio;

    #[test]
    fn test_configure_leaves_line_deasserted() {
        let cs = ChipSelect::configure(MockGpio::new_input()).unwrap();
        assert!(!cs.is_asserted());
    }

    #[test]
    fn test_set_drives_active_low() {
        let mut cs = ChipSelect::configure(MockGpio::new_output()).unwrap();

        cs.set(true).unwrap();
        assert!(cs.is_asserted());

        cs.set(false).unwrap();
        assert!(!cs.is_asserted());
    }
}
