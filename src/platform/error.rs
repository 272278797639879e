//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// SPI operation failed
    Spi(SpiError),
    /// GPIO operation failed
    Gpio(GpioError),
    /// Interrupt line operation failed
    Irq(IrqError),
    /// Platform initialization failed
    InitializationFailed,
    /// Invalid configuration provided
    InvalidConfig,
    /// Resource not available
    ResourceUnavailable,
}

/// SPI-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiError {
    /// Transfer failed
    TransferFailed,
    /// Timeout occurred
    Timeout,
    /// Overrun error
    Overrun,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Invalid pin number
    InvalidPin,
    /// Invalid mode for operation
    InvalidMode,
    /// Underlying pin driver reported a failure
    HardwareError,
}

/// Interrupt-line-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrqError {
    /// Edge sensing was already configured; it is set up exactly once
    AlreadyConfigured,
    /// Operation requires a configured line
    NotConfigured,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Spi(e) => write!(f, "SPI error: {:?}", e),
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::Irq(e) => write!(f, "interrupt error: {:?}", e),
            PlatformError::InitializationFailed => write!(f, "Platform initialization failed"),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
            PlatformError::ResourceUnavailable => write!(f, "Resource not available"),
        }
    }
}
