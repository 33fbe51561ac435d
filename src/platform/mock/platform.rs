//! Mock Platform implementation for testing

use crate::platform::traits::Platform;
use crate::platform::Result;

use super::{MockClock, MockGpio, MockLeTimer};

/// Low-frequency tick base the mock reports, matching the real hardware
const LF_CLOCK_HZ: u32 = 32_768;

/// Mock Platform implementation
///
/// Aggregates the recording mocks for hardware-free testing.
///
/// # Example
///
/// ```
/// use gecko_toggle::platform::mock::MockPlatform;
/// use gecko_toggle::platform::{ClockInterface, PeripheralClock, Platform};
///
/// let mut platform = MockPlatform::new();
/// platform.clock_mut().enable(PeripheralClock::Gpio, true);
/// assert!(platform.clock().is_enabled(PeripheralClock::Gpio));
/// ```
#[derive(Debug, Default)]
pub struct MockPlatform {
    clock: MockClock,
    gpio: MockGpio,
    letimer: MockLeTimer,
}

impl MockPlatform {
    /// Create a new mock platform with all peripherals in reset state
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect the clock control mock
    pub fn clock(&self) -> &MockClock {
        &self.clock
    }

    /// Inspect the GPIO mock
    pub fn gpio(&self) -> &MockGpio {
        &self.gpio
    }

    /// Inspect the timer mock
    pub fn letimer(&self) -> &MockLeTimer {
        &self.letimer
    }
}

impl Platform for MockPlatform {
    type Clock = MockClock;
    type Gpio = MockGpio;
    type LeTimer = MockLeTimer;

    fn init() -> Result<Self> {
        Ok(Self::new())
    }

    fn low_energy_clock_hz(&self) -> u32 {
        LF_CLOCK_HZ
    }

    fn clock_mut(&mut self) -> &mut Self::Clock {
        &mut self.clock
    }

    fn gpio_mut(&mut self) -> &mut Self::Gpio {
        &mut self.gpio
    }

    fn letimer_mut(&mut self) -> &mut Self::LeTimer {
        &mut self.letimer
    }
}
