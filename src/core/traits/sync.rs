//! Synchronized state abstraction traits for platform-agnostic state access.
//!
//! This module provides the `SharedState` trait that abstracts over different
//! synchronization mechanisms (Embassy Mutex, RefCell for tests) so the same
//! object can be driven from the polling loop and from interrupt context.

/// Platform-agnostic synchronized state access.
///
/// This trait abstracts over different synchronization mechanisms:
/// - `EmbassyState<T>` for embedded targets using Embassy's critical-section Mutex
/// - `MockState<T>` for host testing using RefCell (single-threaded)
pub trait SharedState<T> {
    /// Access state immutably.
    ///
    /// The provided closure receives an immutable reference to the inner state.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably.
    ///
    /// The provided closure receives a mutable reference to the inner state.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

// ============================================================================
// Embassy Implementation
// ============================================================================

#[cfg(feature = "embassy")]
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

/// Embassy-based synchronized state using critical-section Mutex.
///
/// The critical section makes access atomic even against interrupt handlers
/// on the same core, so a host stack held in an `EmbassyState` can be driven
/// both by the polling loop and by the interrupt bridge.
#[cfg(feature = "embassy")]
pub struct EmbassyState<T> {
    inner: Mutex<CriticalSectionRawMutex, core::cell::RefCell<T>>,
}

#[cfg(feature = "embassy")]
impl<T> EmbassyState<T> {
    /// Creates a new `EmbassyState` wrapping the given value.
    ///
    /// This is a const fn, allowing static initialization.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(core::cell::RefCell::new(value)),
        }
    }
}

#[cfg(feature = "embassy")]
impl<T> SharedState<T> for EmbassyState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

/// A host stack behind an `EmbassyState` is directly usable as the
/// interrupt-service entry the edge router calls into.
#[cfg(feature = "embassy")]
impl<T> crate::devices::traits::InterruptEntry for EmbassyState<T>
where
    T: crate::devices::traits::HostController + Send,
{
    fn usb_int(&self, port: u8, in_isr: bool) {
        self.with_mut(|stack| stack.int_handler(port, in_isr));
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock synchronized state using RefCell for single-threaded testing.
///
/// # Panics
///
/// Panics if borrowing rules are violated (e.g., calling `with_mut` while
/// `with` is active). This indicates a bug in the test code.
pub struct MockState<T> {
    inner: core::cell::RefCell<T>,
}

impl<T> MockState<T> {
    /// Creates a new `MockState` wrapping the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: core::cell::RefCell::new(value),
        }
    }
}

impl<T> SharedState<T> for MockState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
