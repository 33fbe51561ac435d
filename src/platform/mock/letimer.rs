//! Mock low-energy timer implementation for testing

use crate::platform::traits::{CompareChannel, LeTimerConfig, LeTimerInterface, OutputModule};

/// Mock low-energy timer
///
/// Holds the register-visible state (route, compare, repeat, applied
/// configuration) and counts every write so tests can assert that rejected
/// requests mutate nothing.
#[derive(Debug, Default)]
pub struct MockLeTimer {
    route: u32,
    compare: [u16; 2],
    repeat: [u8; 2],
    config: Option<LeTimerConfig>,
    writes: u32,
}

impl MockLeTimer {
    /// Create a new mock timer in its reset state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current route register value
    pub fn route(&self) -> u32 {
        self.route
    }

    /// Current value of a compare channel
    pub fn compare(&self, channel: CompareChannel) -> u16 {
        self.compare[channel.index()]
    }

    /// Current value of a module's repeat register
    pub fn repeat(&self, module: OutputModule) -> u8 {
        self.repeat[module.index()]
    }

    /// Configuration applied by the last `init_and_start`, if any
    pub fn config(&self) -> Option<&LeTimerConfig> {
        self.config.as_ref()
    }

    /// Number of register writes issued so far
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    /// Preload the route register without counting a write
    ///
    /// Simulates configuration left behind by an earlier firmware stage.
    pub fn seed_route(&mut self, route: u32) {
        self.route = route;
    }
}

impl LeTimerInterface for MockLeTimer {
    fn route(&self) -> u32 {
        self.route
    }

    fn set_route(&mut self, route: u32) {
        self.route = route;
        self.writes += 1;
    }

    fn set_compare(&mut self, channel: CompareChannel, ticks: u16) {
        self.compare[channel.index()] = ticks;
        self.writes += 1;
    }

    fn set_repeat(&mut self, module: OutputModule, count: u8) {
        self.repeat[module.index()] = count;
        self.writes += 1;
    }

    fn init_and_start(&mut self, config: &LeTimerConfig) {
        self.config = Some(*config);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_letimer_records_writes() {
        let mut timer = MockLeTimer::new();
        assert_eq!(timer.write_count(), 0);
        assert_eq!(timer.config(), None);

        timer.set_route(0x103);
        timer.set_compare(CompareChannel::Comp0, 32_768);
        timer.set_repeat(OutputModule::Out1, 1);
        timer.init_and_start(&LeTimerConfig::default());

        assert_eq!(timer.route(), 0x103);
        assert_eq!(timer.compare(CompareChannel::Comp0), 32_768);
        assert_eq!(timer.compare(CompareChannel::Comp1), 0);
        assert_eq!(timer.repeat(OutputModule::Out1), 1);
        assert_eq!(timer.repeat(OutputModule::Out0), 0);
        assert_eq!(timer.config(), Some(&LeTimerConfig::default()));
        assert_eq!(timer.write_count(), 4);
    }

    #[test]
    fn test_mock_letimer_seed_route_counts_nothing() {
        let mut timer = MockLeTimer::new();
        timer.seed_route(0x2);
        assert_eq!(timer.route(), 0x2);
        assert_eq!(timer.write_count(), 0);
    }
}
