//! EFM32GG Platform implementation

use core::sync::atomic::{AtomicBool, Ordering};

use crate::platform::error::PlatformError;
use crate::platform::traits::Platform;
use crate::platform::Result;

use super::clock::LFRCO_HZ;
use super::{Efm32ggClock, Efm32ggGpio, Efm32ggLeTimer};

/// One live owner of the register set per reset cycle
static TAKEN: AtomicBool = AtomicBool::new(false);

/// EFM32GG Platform implementation
///
/// Aggregates the CMU, GPIO and LETIMER0 register implementations. `init()`
/// hands out the peripherals exactly once; the route read-modify-write done
/// by consumers is not atomic, so a second owner could corrupt it.
pub struct Efm32ggPlatform {
    clock: Efm32ggClock,
    gpio: Efm32ggGpio,
    letimer: Efm32ggLeTimer,
}

impl Platform for Efm32ggPlatform {
    type Clock = Efm32ggClock;
    type Gpio = Efm32ggGpio;
    type LeTimer = Efm32ggLeTimer;

    fn init() -> Result<Self> {
        if TAKEN
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(PlatformError::InitializationFailed);
        }

        Ok(Self {
            clock: Efm32ggClock::new(),
            gpio: Efm32ggGpio::new(),
            letimer: Efm32ggLeTimer::new(),
        })
    }

    fn low_energy_clock_hz(&self) -> u32 {
        LFRCO_HZ
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
