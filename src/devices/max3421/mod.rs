//! MAX3421E SPI transport and interrupt bridge
//!
//! The MAX3421E implements USB host electrical and protocol logic behind a
//! plain register file, reachable only over SPI plus one interrupt output.
//! This module owns that seam: the manually driven chip-select line, atomic
//! blocking register transfers, the falling-edge interrupt routing, and the
//! ordered bring-up that hands the chip to a host protocol stack.

pub mod bringup;
pub mod chip_select;
pub mod interrupt;
pub mod registers;
pub mod transport;

pub use bringup::{bring_up, BridgeConfig, Max3421Bridge};
pub use chip_select::ChipSelect;
pub use interrupt::{EdgeRouter, InterruptBridge};
pub use transport::{SpiTransport, TransferRequest};
