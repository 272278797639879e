//! USB host stack contracts
//!
//! The bridge and the USB host protocol stack meet at three narrow
//! interfaces. `HostBus` is what the bridge offers the stack: interrupt
//! gating, chip-select control, and raw SPI exchanges. `HostController` and
//! `InterruptEntry` are what the stack offers the bridge: initialization,
//! the task-processing entry the polling loop drives, and the
//! interrupt-service entry the edge router calls. The stack never inspects
//! bridge internals and the bridge never interprets USB semantics.

use crate::platform::Result;

/// Notification surfaced by the host stack after it has processed a
/// completed transfer sequence. Transient; never stored by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// A device was enumerated and is usable
    DeviceMounted {
        /// Device address assigned by the stack
        address: u8,
    },
    /// A device was unplugged or failed
    DeviceUnmounted {
        /// Device address the stack had assigned
        address: u8,
    },
    /// A class interface on a mounted device became ready
    InterfaceMounted {
        /// Stack-assigned interface index
        index: u8,
    },
    /// A class interface went away
    InterfaceUnmounted {
        /// Stack-assigned interface index
        index: u8,
    },
    /// A class interface has received data ready to be read
    DataReceived {
        /// Stack-assigned interface index
        index: u8,
    },
}

/// Consumer of [`HostEvent`] notifications.
pub trait EventSink {
    /// Handle one event.
    fn on_event(&mut self, event: HostEvent);
}

/// Any `FnMut(HostEvent)` closure works as an event sink.
impl<F: FnMut(HostEvent)> EventSink for F {
    fn on_event(&mut self, event: HostEvent) {
        self(event)
    }
}

/// Hardware access the bridge exposes to the host stack.
///
/// `port` identifies the root hub port the stack is addressing; a bridge
/// serves exactly one chip and ignores requests for other ports.
pub trait HostBus {
    /// Enable or disable delivery of the chip's interrupt.
    ///
    /// Disabling masks delivery at the interrupt controller; an edge that
    /// arrives while disabled is latched and serviced on re-enable.
    fn interrupt_control(&mut self, port: u8, enabled: bool);

    /// Drive the chip-select line. `active` asserts it (physical low).
    fn chip_select_control(&mut self, port: u8, active: bool);

    /// Perform one blocking SPI exchange.
    ///
    /// Either buffer may be absent for a write-only or read-only exchange;
    /// at least one must be present and, when both are, their lengths must
    /// match. Returns `false` on a bus error or a rejected request; there
    /// is no partial-result state.
    fn spi_transfer(&mut self, port: u8, write: Option<&[u8]>, read: Option<&mut [u8]>) -> bool;
}

/// The host stack as driven by the bring-up sequence and the polling loop.
pub trait HostController {
    /// One-time stack initialization, run after the hardware bring-up.
    ///
    /// # Errors
    ///
    /// An error here is fatal; the system must not continue on a
    /// half-initialized stack.
    fn init(&mut self, bus: &mut dyn HostBus) -> Result<()>;

    /// One iteration of the stack's task processing. Called repeatedly from
    /// the polling loop; runs to completion, emitting any notifications
    /// through `events`.
    fn task(&mut self, bus: &mut dyn HostBus, events: &mut dyn EventSink);

    /// The stack's interrupt-service entry point.
    ///
    /// `in_isr` tells the stack whether it is being called from interrupt
    /// context, where it must avoid re-entrant scheduling.
    fn int_handler(&mut self, port: u8, in_isr: bool);
}

/// `Sync` facade over [`HostController::int_handler`] for use from
/// interrupt context.
///
/// The edge router holds one of these; a stack shared through
/// `EmbassyState` gets this for free (see `core::traits::sync`).
pub trait InterruptEntry: Sync {
    /// Forward to the stack's interrupt-service entry point.
    fn usb_int(&self, port: u8, in_isr: bool);
}

impl<T: InterruptEntry + ?Sized> InterruptEntry for &T {
    fn usb_int(&self, port: u8, in_isr: bool) {
        (**self).usb_int(port, in_isr)
    }
}
