//! Mock clock control implementation for testing

use crate::platform::traits::{ClockInterface, PeripheralClock};

/// Mock clock control
///
/// Tracks which peripheral clocks are enabled.
#[derive(Debug, Default)]
pub struct MockClock {
    gpio: bool,
    letimer0: bool,
}

impl MockClock {
    /// Create a new mock clock control with all clocks stopped
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a peripheral clock is currently enabled
    pub fn is_enabled(&self, clock: PeripheralClock) -> bool {
        match clock {
            PeripheralClock::Gpio => self.gpio,
            PeripheralClock::LeTimer0 => self.letimer0,
        }
    }
}

impl ClockInterface for MockClock {
    fn enable(&mut self, clock: PeripheralClock, enabled: bool) {
        match clock {
            PeripheralClock::Gpio => self.gpio = enabled,
            PeripheralClock::LeTimer0 => self.letimer0 = enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_clock_enable() {
        let mut clock = MockClock::new();
        assert!(!clock.is_enabled(PeripheralClock::Gpio));

        clock.enable(PeripheralClock::Gpio, true);
        assert!(clock.is_enabled(PeripheralClock::Gpio));
        assert!(!clock.is_enabled(PeripheralClock::LeTimer0));

        // Re-enabling is idempotent
        clock.enable(PeripheralClock::Gpio, true);
        assert!(clock.is_enabled(PeripheralClock::Gpio));

        clock.enable(PeripheralClock::Gpio, false);
        assert!(!clock.is_enabled(PeripheralClock::Gpio));
    }
}
