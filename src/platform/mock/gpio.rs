//! Mock GPIO implementation for testing

use crate::platform::traits::{GpioInterface, PinMode, Port};
use heapless::Vec;

/// Upper bound on recorded mode changes per test
const JOURNAL_CAPACITY: usize = 16;

/// Mock GPIO implementation
///
/// Journals every pin mode change for test verification.
#[derive(Debug, Default)]
pub struct MockGpio {
    journal: Vec<(Port, u8, PinMode, bool), JOURNAL_CAPACITY>,
}

impl MockGpio {
    /// Create a new mock GPIO with an empty journal
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `set_pin_mode` call in order: (port, pin, mode, initial level)
    pub fn journal(&self) -> &Vec<(Port, u8, PinMode, bool), JOURNAL_CAPACITY> {
        &self.journal
    }

    /// The most recent mode applied to a pin, if any
    pub fn mode_of(&self, port: Port, pin: u8) -> Option<PinMode> {
        self.journal
            .iter()
            .rev()
            .find(|(p, n, _, _)| *p == port && *n == pin)
            .map(|(_, _, mode, _)| *mode)
    }
}

impl GpioInterface for MockGpio {
    fn set_pin_mode(&mut self, port: Port, pin: u8, mode: PinMode, initial_high: bool) {
        // Overflow would mean a runaway test; drop silently like a full journal
        let _ = self.journal.push((port, pin, mode, initial_high));
    }
}
