//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod clock;
pub mod gpio;
pub mod irq;
pub mod spi;

// Re-export trait interfaces
pub use clock::ClockInterface;
pub use gpio::{GpioInterface, GpioMode};
pub use irq::{Edge, EdgeHandler, IrqInterface};
pub use spi::{SpiBitOrder, SpiConfig, SpiInterface, SpiMode, SpiPins};
