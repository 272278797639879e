//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the peripherals the bridge
//! drives: the low-frequency clock, GPIO pins, the SPI bus, and the
//! edge-sensing interrupt line. All platform-specific code is isolated to
//! this module.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "feather52")]
pub mod nrf52;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{
    ClockInterface, Edge, EdgeHandler, GpioInterface, GpioMode, IrqInterface, SpiBitOrder,
    SpiConfig, SpiInterface, SpiMode, SpiPins,
};
