//! Interrupt bridge
//!
//! Routes the chip's falling-edge interrupt output into the host stack's
//! interrupt-service entry point. Edge sensing is configured exactly once;
//! runtime enable/disable only ever toggles the controller-level mask, so a
//! latched edge survives a disabled window and is serviced on re-enable.

use crate::devices::traits::InterruptEntry;
use crate::platform::error::IrqError;
use crate::platform::{Edge, EdgeHandler, IrqInterface, PlatformError, Result};

/// Bound edge callback: filters raw edge events down to the one pin and
/// direction the chip drives, then enters the host stack.
///
/// Runs in interrupt context, so the stack is reached through its `Sync`
/// interrupt entry and told `in_isr = true`.
pub struct EdgeRouter<E: InterruptEntry> {
    pin: u8,
    port: u8,
    entry: E,
}

impl<E: InterruptEntry> EdgeRouter<E> {
    /// Route falling edges on `pin` into `entry` for root hub `port`.
    pub fn new(pin: u8, port: u8, entry: E) -> Self {
        Self { pin, port, entry }
    }
}

impl<E: InterruptEntry> EdgeHandler for EdgeRouter<E> {
    fn on_edge(&self, pin: u8, edge: Edge) {
        // Spurious events (shared trigger hardware, wrong direction) are
        // discarded, not errors.
        if edge != Edge::Falling {
            return;
        }
        if pin != self.pin {
            return;
        }
        self.entry.usb_int(self.port, true);
    }
}

/// Enable/disable state machine over an edge-sensing interrupt line.
pub struct InterruptBridge<I: IrqInterface> {
    line: I,
    configured: bool,
    enabled: bool,
}

impl<I: IrqInterface> InterruptBridge<I> {
    /// Wrap an unconfigured interrupt line.
    pub fn new(line: I) -> Self {
        Self {
            line,
            configured: false,
            enabled: false,
        }
    }

    /// One-time setup: falling-edge sensing with `handler` attached, then
    /// delivery enabled.
    ///
    /// # Errors
    ///
    /// `PlatformError::Irq(IrqError::AlreadyConfigured)` if called again.
    pub fn configure(&mut self, handler: &'static dyn EdgeHandler) -> Result<()> {
        if self.configured {
            return Err(PlatformError::Irq(IrqError::AlreadyConfigured));
        }
        self.line.configure(Edge::Falling, handler)?;
        self.configured = true;
        self.set_enabled(true);
        Ok(())
    }

    /// Gate delivery at the interrupt controller.
    ///
    /// Never touches the edge-sensing configuration: tearing the trigger
    /// down would clear the latched pending state, and an edge the chip
    /// raised while disabled would be lost instead of serviced on the next
    /// enable.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.line.set_masked(!enabled);
        self.enabled = enabled;
    }

    /// Whether delivery is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The underlying interrupt line.
    pub fn line(&self) -> &I {
        &self.line
    }

    /// Mutable access to the underlying interrupt line.
    pub fn line_mut(&mut self) -> &mut I {
        &mut self.line
    }
}
