//! EFM32GG clock-management unit (CMU)
//!
//! Gates the peripheral clocks the library needs. Enabling the low-energy
//! timer clock also brings up the 32768 Hz LFRCO and selects it as the LFA
//! branch source, so a caller gets a counting timer out of a single enable.

use core::ptr::{read_volatile, write_volatile};

use crate::platform::traits::{ClockInterface, PeripheralClock};

const CMU_BASE: u32 = 0x400C_8000;

const CMU_OSCENCMD: *mut u32 = (CMU_BASE + 0x020) as *mut u32;
const CMU_LFCLKSEL: *mut u32 = (CMU_BASE + 0x028) as *mut u32;
const CMU_STATUS: *mut u32 = (CMU_BASE + 0x02C) as *mut u32;
const CMU_HFCORECLKEN0: *mut u32 = (CMU_BASE + 0x040) as *mut u32;
const CMU_HFPERCLKEN0: *mut u32 = (CMU_BASE + 0x044) as *mut u32;
const CMU_LFACLKEN0: *mut u32 = (CMU_BASE + 0x058) as *mut u32;

const OSCENCMD_LFRCOEN: u32 = 1 << 6;
const STATUS_LFRCORDY: u32 = 1 << 7;

// LFA source-select field, [1:0]
const LFCLKSEL_LFA_MASK: u32 = 0x3;
const LFCLKSEL_LFA_LFRCO: u32 = 0x1;

// Low-energy peripheral interface clock
const HFCORECLKEN0_LE: u32 = 1 << 2;
const HFPERCLKEN0_GPIO: u32 = 1 << 13;
const LFACLKEN0_LETIMER0: u32 = 1 << 1;

/// Frequency of the LFRCO feeding the LFA branch
pub const LFRCO_HZ: u32 = 32_768;

/// CMU register access
///
/// Construct via `Efm32ggPlatform::init()`; the platform owns the register
/// set.
pub struct Efm32ggClock {
    _private: (),
}

impl Efm32ggClock {
    pub(super) fn new() -> Self {
        Self { _private: () }
    }

    fn update(&mut self, reg: *mut u32, mask: u32, set: bool) {
        unsafe {
            let value = read_volatile(reg);
            let value = if set { value | mask } else { value & !mask };
            write_volatile(reg, value);
        }
    }

    /// Start the LFRCO and route it to the LFA branch.
    ///
    /// Safe to repeat: a running oscillator reports ready immediately.
    fn bring_up_lfa(&mut self) {
        unsafe {
            write_volatile(CMU_OSCENCMD, OSCENCMD_LFRCOEN);
            while read_volatile(CMU_STATUS) & STATUS_LFRCORDY == 0 {}

            let sel = read_volatile(CMU_LFCLKSEL) & !LFCLKSEL_LFA_MASK;
            write_volatile(CMU_LFCLKSEL, sel | LFCLKSEL_LFA_LFRCO);
        }
    }
}

impl ClockInterface for Efm32ggClock {
    fn enable(&mut self, clock: PeripheralClock, enabled: bool) {
        match clock {
            PeripheralClock::Gpio => {
                self.update(CMU_HFPERCLKEN0, HFPERCLKEN0_GPIO, enabled);
            }
            PeripheralClock::LeTimer0 => {
                if enabled {
                    // The LE interface clock and a ready LFA source must be up
                    // before the timer's own gate opens.
                    self.update(CMU_HFCORECLKEN0, HFCORECLKEN0_LE, true);
                    self.bring_up_lfa();
                }
                self.update(CMU_LFACLKEN0, LFACLKEN0_LETIMER0, enabled);
            }
        }
    }
}
