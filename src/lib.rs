#![cfg_attr(not(test), no_std)]

//! max3421-bridge - hardware transport for a SPI-attached USB host controller
//!
//! This library bridges a MAX3421E USB host controller chip (reachable only
//! through SPI and a single interrupt line) to an upper-layer USB host
//! protocol stack. It owns the low-frequency clock bring-up, the manually
//! driven chip-select line, blocking register transfers on the SPI bus, and
//! the translation of falling edges on the interrupt line into calls into
//! the host stack's interrupt-service entry point.

// Platform abstraction layer: hardware traits, mock implementations for
// host tests, and the Feather nRF52840 board implementation.
pub mod platform;

// The MAX3421E bridge itself, plus the traits it exposes to the host stack.
pub mod devices;

// Ambient services: logging macros and cross-context state sharing.
pub mod core;
