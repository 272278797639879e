//! Edge-sensing interrupt line trait
//!
//! This module defines the interface for the single edge-triggered interrupt
//! input the transport chip drives, and the handler contract edges are
//! delivered through.

use crate::platform::Result;

/// Signal edge direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Low-to-high transition
    Rising,
    /// High-to-low transition
    Falling,
}

/// Receiver for edge events, invoked from interrupt context.
///
/// Implementations are bound callback objects: they capture whatever state
/// they need at construction and take `&self`, so any mutation goes through
/// interrupt-safe interior mutability. The `Sync` bound is what allows a
/// handler to be registered with a hardware vector.
pub trait EdgeHandler: Sync {
    /// Called for every sensed edge, with the pin it occurred on and its
    /// direction. Runs in interrupt context; must not block.
    fn on_edge(&self, pin: u8, edge: Edge);
}

/// Edge-sensing interrupt line
///
/// Platform implementations own one input pin and its interrupt-controller
/// plumbing.
///
/// # Masking discipline
///
/// `set_masked` must gate delivery at the interrupt controller (e.g. the
/// NVIC enable bit), never by tearing down the edge-sensing trigger itself.
/// Reconfiguring the trigger clears the controller's latched pending state,
/// so an edge that arrives during a masked window would be lost and the
/// consumer would stall waiting for a notification that never comes.
/// Controller-level masking keeps the latch intact and the pending edge is
/// serviced as soon as the line is unmasked.
pub trait IrqInterface {
    /// Configure edge sensing for `trigger` and attach `handler`.
    ///
    /// Called exactly once; the sense configuration is never repeated or
    /// reversed during normal operation.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Irq(IrqError::AlreadyConfigured)` on a
    /// repeated call.
    fn configure(&mut self, trigger: Edge, handler: &'static dyn EdgeHandler) -> Result<()>;

    /// Mask or unmask delivery at the interrupt controller.
    ///
    /// Unmasking with an edge latched delivers that edge immediately.
    fn set_masked(&mut self, masked: bool);

    /// Whether delivery is currently masked.
    fn is_masked(&self) -> bool;
}
