//! Device-facing trait contracts

pub mod usb_host;

pub use usb_host::{EventSink, HostBus, HostController, HostEvent, InterruptEntry};
