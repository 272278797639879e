//! Low-frequency clock interface trait

/// Low-frequency clock control
///
/// The transport chip's interrupt path relies on a running low-frequency
/// clock, so starting it is the very first bring-up step.
pub trait ClockInterface {
    /// Start the low-frequency clock from the internal RC oscillator.
    ///
    /// Stops a clock that is already running first, so the call is
    /// idempotent across warm restarts that skip the power-on reset. The
    /// internal oscillator is selected over a crystal source so the same
    /// code runs on boards without an external LF crystal.
    ///
    /// There is no failure path at this layer; an oscillator that does not
    /// come up is fatal to everything above.
    fn start_lfclk(&mut self);

    /// Whether the low-frequency clock is currently running.
    fn is_lfclk_running(&self) -> bool;
}
