//! Mock interrupt line for testing

use crate::platform::{
    error::{IrqError, PlatformError},
    traits::{Edge, EdgeHandler, IrqInterface},
    Result,
};

/// Mock interrupt line
///
/// Models the controller-level mask with a single latched pending edge,
/// which is what the NVIC pend bit provides on real hardware: an edge that
/// arrives while masked is held, not dropped, and is delivered as soon as
/// the line is unmasked. Reconfiguring edge sensing would clear that latch,
/// so the mock counts sense configurations to let tests prove the mask path
/// never touches them.
pub struct MockIrq {
    trigger: Option<Edge>,
    handler: Option<&'static dyn EdgeHandler>,
    masked: bool,
    pending: Option<(u8, Edge)>,
    sense_configs: usize,
}

impl MockIrq {
    /// Create a new mock line, unconfigured and masked.
    pub fn new() -> Self {
        Self {
            trigger: None,
            handler: None,
            masked: true,
            pending: None,
            sense_configs: 0,
        }
    }

    /// Simulate a hardware edge on `pin`.
    ///
    /// Delivery while masked latches the edge instead; further edges during
    /// the masked window merge into the single latch, as on hardware.
    pub fn raise_edge(&mut self, pin: u8, edge: Edge) {
        if self.masked {
            if self.pending.is_none() {
                self.pending = Some((pin, edge));
            }
        } else if let Some(handler) = self.handler {
            handler.on_edge(pin, edge);
        }
    }

    /// Number of times edge sensing has been configured.
    pub fn sense_config_count(&self) -> usize {
        self.sense_configs
    }

    /// Whether an edge is latched waiting for unmask.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The configured trigger edge, if any.
    pub fn trigger(&self) -> Option<Edge> {
        self.trigger
    }
}

impl Default for MockIrq {
    fn default() -> Self {
        Self::new()
    }
}

impl IrqInterface for MockIrq {
    fn configure(&mut self, trigger: Edge, handler: &'static dyn EdgeHandler) -> Result<()> {
        if self.trigger.is_some() {
            return Err(PlatformError::Irq(IrqError::AlreadyConfigured));
        }
        self.trigger = Some(trigger);
        self.handler = Some(handler);
        self.sense_configs += 1;
        Ok(())
    }

    fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
        if !masked {
            if let (Some((pin, edge)), Some(handler)) = (self.pending.take(), self.handler) {
                handler.on_edge(pin, edge);
            }
        }
    }

    fn is_masked(&self) -> bool {
        self.masked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::vec::Vec;

    struct Recorder {
        calls: Mutex<Vec<(u8, Edge)>>,
    }

    impl Recorder {
        fn leak() -> &'static Self {
            Box::leak(Box::new(Self {
                calls: Mutex::new(Vec::new()),
            }))
        }

        fn calls(&self) -> Vec<(u8, Edge)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl EdgeHandler for Recorder {
        fn on_edge(&self, pin: u8, edge: Edge) {
            self.calls.lock().unwrap().push((pin, edge));
        }
    }

    #[test]
    fn test_configure_is_one_time() {
        let recorder = Recorder::leak();
        let mut irq = MockIrq::new();

        irq.configure(Edge::Falling, recorder).unwrap();
        assert_eq!(
            irq.configure(Edge::Falling, recorder),
            Err(PlatformError::Irq(IrqError::AlreadyConfigured))
        );
        assert_eq!(irq.sense_config_count(), 1);
    }

    #[test]
    fn test_unmasked_edge_is_delivered() {
        let recorder = Recorder::leak();
        let mut irq = MockIrq::new();
        irq.configure(Edge::Falling, recorder).unwrap();
        irq.set_masked(false);

        irq.raise_edge(31, Edge::Falling);
        assert_eq!(recorder.calls(), vec![(31, Edge::Falling)]);
    }

    #[test]
    fn test_masked_edge_is_latched_not_lost() {
        let recorder = Recorder::leak();
        let mut irq = MockIrq::new();
        irq.configure(Edge::Falling, recorder).unwrap();
        irq.set_masked(true);

        irq.raise_edge(31, Edge::Falling);
        assert!(recorder.calls().is_empty());
        assert!(irq.has_pending());

        irq.set_masked(false);
        assert_eq!(recorder.calls(), vec![(31, Edge::Falling)]);
        assert!(!irq.has_pending());
    }

    #[test]
    fn test_latched_edges_merge() {
        let recorder = Recorder::leak();
        let mut irq = MockIrq::new();
        irq.configure(Edge::Falling, recorder).unwrap();
        irq.set_masked(true);

        irq.raise_edge(31, Edge::Falling);
        irq.raise_edge(31, Edge::Falling);

        irq.set_masked(false);
        assert_eq!(recorder.calls().len(), 1);
    }

    #[test]
    fn test_mask_does_not_touch_sense_configuration() {
        let recorder = Recorder::leak();
        let mut irq = MockIrq::new();
        irq.configure(Edge::Falling, recorder).unwrap();

        for _ in 0..3 {
            irq.set_masked(true);
            irq.set_masked(false);
        }
        assert_eq!(irq.sense_config_count(), 1);
        assert_eq!(irq.trigger(), Some(Edge::Falling));
    }
}
