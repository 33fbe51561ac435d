//! Root platform trait
//!
//! This module defines the root Platform trait that aggregates the peripheral
//! interfaces consumed by the toggle configurator.

use super::{ClockInterface, GpioInterface, LeTimerInterface};
use crate::platform::Result;

/// Root platform trait
///
/// Platform implementations provide concrete types for each peripheral
/// interface via associated types, enabling compile-time dispatch: the
/// configurator is generic over `Platform` and monomorphizes down to direct
/// register writes on hardware.
pub trait Platform: Sized {
    /// Clock control peripheral type
    type Clock: ClockInterface;

    /// GPIO peripheral type
    type Gpio: GpioInterface;

    /// Low-energy timer peripheral type
    type LeTimer: LeTimerInterface;

    /// Initialize the platform
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InitializationFailed` if the platform cannot
    /// be constructed (e.g. the hardware register set is already owned).
    fn init() -> Result<Self>;

    /// Frequency of the low-energy clock driving the timer, in Hz
    ///
    /// Used to convert a millisecond period into a tick count.
    fn low_energy_clock_hz(&self) -> u32;

    /// Get mutable clock control instance
    fn clock_mut(&mut self) -> &mut Self::Clock;

    /// Get mutable GPIO instance
    fn gpio_mut(&mut self) -> &mut Self::Gpio;

    /// Get mutable low-energy timer instance
    fn letimer_mut(&mut self) -> &mut Self::LeTimer;
}
