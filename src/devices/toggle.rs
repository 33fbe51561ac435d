//! LETIMER square-wave pin output
//!
//! This module programs the low-energy timer to toggle one of its routable
//! output pins at a fixed period. The timer counts down from a compare value
//! derived from the requested period and inverts the pin on every underflow,
//! so a period of `p` milliseconds yields a square wave with a full cycle of
//! `2 * p` milliseconds. Once started the timer free-runs; there is no stop
//! or reconfigure path here.
//!
//! ## Example
//!
//! ```no_run
//! use gecko_toggle::devices::{pins::PinName, toggle};
//! use gecko_toggle::platform::Platform;
//!
//! fn blink<P: Platform>(platform: &mut P) {
//!     // PD6 inverts every second
//!     toggle::start(platform, PinName::PD6, 1000).unwrap();
//! }
//! ```
//!
//! Calling `start` again reprograms the timer: a pin on the other output
//! module adds a second output, a pin on the same module replaces the first.
//! The route register has a single location field shared by both modules, so
//! two simultaneously active outputs only drive the documented pins when
//! their locations coincide (PD6+PD7, PB11+PB12, PF0+PF1, PC4+PC5).

use crate::devices::pins::PinName;
use crate::platform::{
    traits::route, ClockInterface, CompareChannel, GpioInterface, LeTimerConfig, LeTimerInterface,
    OutputModule, PeripheralClock, PinMode, Platform, RepeatMode, UnderflowAction,
};
use crate::{log_debug, log_warn};
use core::fmt;

/// Largest tick count the 16-bit compare register can hold
pub const MAX_TICKS: u32 = 0xFFFF;

/// Configuration rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "efm32gg", derive(defmt::Format))]
pub enum ToggleError {
    /// Requested period does not fit the 16-bit compare register
    PeriodTooLong,
    /// Pin has no timer output route
    UnsupportedPin,
}

impl fmt::Display for ToggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleError::PeriodTooLong => write!(f, "period does not fit the compare register"),
            ToggleError::UnsupportedPin => write!(f, "pin has no timer output route"),
        }
    }
}

/// One row of the pin-to-route table
struct PinRoute {
    pin: PinName,
    module: OutputModule,
    location: u8,
}

/// Which pins the timer outputs can be routed to, and how.
///
/// Hand-authored from the datasheet's alternate-function table. Each location
/// wires one pin to each module; the pairing within a location matters to
/// callers that want both outputs active at once (see module docs).
static PIN_ROUTES: [PinRoute; 8] = [
    PinRoute { pin: PinName::PB11, module: OutputModule::Out0, location: 1 },
    PinRoute { pin: PinName::PB12, module: OutputModule::Out1, location: 1 },
    PinRoute { pin: PinName::PC4, module: OutputModule::Out0, location: 3 },
    PinRoute { pin: PinName::PC5, module: OutputModule::Out1, location: 3 },
    PinRoute { pin: PinName::PD6, module: OutputModule::Out0, location: 0 },
    PinRoute { pin: PinName::PD7, module: OutputModule::Out1, location: 0 },
    PinRoute { pin: PinName::PF0, module: OutputModule::Out0, location: 2 },
    PinRoute { pin: PinName::PF1, module: OutputModule::Out1, location: 2 },
];

/// Free-running toggle configuration: count immediately (also during debug
/// halt), reload from compare channel 0 on underflow, invert both outputs,
/// idle level low, no RTC triggers, no buffered reload.
const TOGGLE_INIT: LeTimerConfig = LeTimerConfig {
    enable: true,
    debug_run: true,
    rtc_comp0_enable: false,
    rtc_comp1_enable: false,
    comp0_top: true,
    buf_top: false,
    out0_polarity: false,
    out1_polarity: false,
    underflow_action0: UnderflowAction::Toggle,
    underflow_action1: UnderflowAction::Toggle,
    repeat_mode: RepeatMode::Free,
};

/// Convert a millisecond period into low-frequency timer ticks.
///
/// Truncating integer division; the widening to u64 keeps an oversized
/// period from wrapping below the 16-bit bound.
fn ticks_for_period(period_ms: u32, lf_hz: u32) -> Option<u16> {
    let ticks = u64::from(period_ms) * u64::from(lf_hz) / 1000;
    if ticks > u64::from(MAX_TICKS) {
        return None;
    }
    Some(ticks as u16)
}

fn lookup(pin: PinName) -> Option<&'static PinRoute> {
    PIN_ROUTES.iter().find(|entry| entry.pin == pin)
}

/// Start toggling `pin` every `period_ms` milliseconds.
///
/// Validates the period and the pin before touching any hardware: a rejected
/// call issues no clock enables and no register writes.
///
/// # Arguments
///
/// * `platform` - Platform providing clock, GPIO and timer access
/// * `pin` - Pin to toggle; must be one of the eight routable outputs
/// * `period_ms` - Time between inversions, in milliseconds. 0 is accepted
///   and toggles on every timer tick, the fastest rate the hardware offers.
///
/// # Errors
///
/// Returns `ToggleError::PeriodTooLong` if the computed tick count exceeds
/// the 16-bit compare register.
/// Returns `ToggleError::UnsupportedPin` if the pin has no timer route.
pub fn start<P: Platform>(
    platform: &mut P,
    pin: PinName,
    period_ms: u32,
) -> Result<(), ToggleError> {
    let Some(ticks) = ticks_for_period(period_ms, platform.low_energy_clock_hz()) else {
        log_warn!("toggle: {} ms does not fit the compare register", period_ms);
        return Err(ToggleError::PeriodTooLong);
    };
    let Some(entry) = lookup(pin) else {
        log_warn!("toggle: pin has no timer output route");
        return Err(ToggleError::UnsupportedPin);
    };

    platform.clock_mut().enable(PeripheralClock::LeTimer0, true);
    platform.clock_mut().enable(PeripheralClock::Gpio, true);

    // Push-pull at level low hands the pin to the timer's output driver.
    platform
        .gpio_mut()
        .set_pin_mode(pin.port(), pin.number(), PinMode::OutputPushPull, false);

    let letimer = platform.letimer_mut();

    // Keep the other module's enable bit, drop everything else (including the
    // old location), then merge in this pin's route.
    let merged = (letimer.route() & route::OUT_PEN_MASK)
        | entry.module.pen_bit()
        | route::location(entry.location);
    letimer.set_route(merged);

    // Both channels carry the same comparator value; channel 0 doubles as the
    // reload (top) value via `comp0_top`.
    letimer.set_compare(CompareChannel::Comp0, ticks);
    letimer.set_compare(CompareChannel::Comp1, ticks);

    // A repeat count of 0 suppresses toggling even while the counter runs.
    letimer.set_repeat(entry.module, 1);

    letimer.init_and_start(&TOGGLE_INIT);

    log_debug!(
        "toggle: {} ms -> {} ticks on output {}",
        period_ms,
        ticks,
        entry.module.index()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockPlatform;
    use crate::platform::{Platform, Port};

    const LF_HZ: u32 = 32_768;

    fn platform() -> MockPlatform {
        MockPlatform::init().unwrap()
    }

    /// Register-visible outcome of a configuration run
    fn snapshot(p: &MockPlatform) -> (u32, u16, u16, [u8; 2], Option<LeTimerConfig>) {
        (
            p.letimer().route(),
            p.letimer().compare(CompareChannel::Comp0),
            p.letimer().compare(CompareChannel::Comp1),
            [
                p.letimer().repeat(OutputModule::Out0),
                p.letimer().repeat(OutputModule::Out1),
            ],
            p.letimer().config().copied(),
        )
    }

    #[test]
    fn test_ticks_conversion() {
        // 1 s at 32768 Hz is exactly the base frequency
        assert_eq!(ticks_for_period(1000, LF_HZ), Some(32_768));
        // Degenerate period: toggle on every tick
        assert_eq!(ticks_for_period(0, LF_HZ), Some(0));
        // Truncating division
        assert_eq!(ticks_for_period(1, LF_HZ), Some(32));
        // Longest representable period
        assert_eq!(ticks_for_period(1999, LF_HZ), Some(65_503));
        // 2000 ms is exactly one past the register (65536)
        assert_eq!(ticks_for_period(2000, LF_HZ), None);
        assert_eq!(ticks_for_period(2001, LF_HZ), None);
        // Far out of range must not wrap back into bounds (u32 math would)
        assert_eq!(ticks_for_period(u32::MAX, LF_HZ), None);
        assert_eq!(ticks_for_period(131_073, LF_HZ), None);
    }

    #[test]
    fn test_route_table_pairs_modules_per_location() {
        for loc in 0u8..4 {
            let at_loc: heapless::Vec<_, 8> = PIN_ROUTES
                .iter()
                .filter(|e| e.location == loc)
                .map(|e| e.module)
                .collect();
            assert_eq!(at_loc.len(), 2, "location {} must route both modules", loc);
            assert!(at_loc.contains(&OutputModule::Out0));
            assert!(at_loc.contains(&OutputModule::Out1));
        }
    }

    #[test]
    fn test_supported_pin_programs_timer() {
        let mut p = platform();
        toggle_ok(&mut p, PinName::PD6, 1000);

        assert_eq!(
            p.letimer().route(),
            route::OUT0_PEN | route::location(0),
            "PD6 is module 0 at location 0"
        );
        assert_eq!(p.letimer().compare(CompareChannel::Comp0), 32_768);
        assert_eq!(p.letimer().compare(CompareChannel::Comp1), 32_768);
        assert_eq!(p.letimer().repeat(OutputModule::Out0), 1);
        assert_eq!(p.letimer().repeat(OutputModule::Out1), 0);
        assert_eq!(p.letimer().config(), Some(&super::TOGGLE_INIT));

        assert!(p.clock().is_enabled(PeripheralClock::LeTimer0));
        assert!(p.clock().is_enabled(PeripheralClock::Gpio));
        assert_eq!(
            p.gpio().journal().as_slice(),
            &[(Port::D, 6, PinMode::OutputPushPull, false)]
        );
    }

    #[test]
    fn test_every_supported_pin_sets_its_module() {
        for entry in &PIN_ROUTES {
            let mut p = platform();
            toggle_ok(&mut p, entry.pin, 500);

            let r = p.letimer().route();
            assert_eq!(r & route::OUT_PEN_MASK, entry.module.pen_bit());
            assert_eq!(r >> route::LOCATION_SHIFT, u32::from(entry.location));
            assert_eq!(p.letimer().repeat(entry.module), 1);
            assert_eq!(
                p.gpio().journal().as_slice(),
                &[(
                    entry.pin.port(),
                    entry.pin.number(),
                    PinMode::OutputPushPull,
                    false
                )]
            );
        }
    }

    #[test]
    fn test_zero_period_is_accepted() {
        let mut p = platform();
        toggle_ok(&mut p, PinName::PF0, 0);
        assert_eq!(p.letimer().compare(CompareChannel::Comp0), 0);
        assert_eq!(p.letimer().config(), Some(&super::TOGGLE_INIT));
    }

    #[test]
    fn test_period_too_long_rejected_without_writes() {
        let mut p = platform();
        assert_eq!(
            start(&mut p, PinName::PD6, 2001),
            Err(ToggleError::PeriodTooLong)
        );
        assert_untouched(&p);
    }

    #[test]
    fn test_unsupported_pin_rejected_without_writes() {
        let mut p = platform();
        // PA0 is a real pin, just not a timer output
        assert_eq!(
            start(&mut p, PinName::PA0, 1000),
            Err(ToggleError::UnsupportedPin)
        );
        assert_untouched(&p);

        // Rejection is uniform: the period bound is checked first, but a bad
        // pin with a bad period still mutates nothing
        assert_eq!(
            start(&mut p, PinName::PE15, 500),
            Err(ToggleError::UnsupportedPin)
        );
        assert_untouched(&p);
    }

    #[test]
    fn test_other_module_enable_bit_is_preserved() {
        let mut p = platform();
        // Pretend module 1 was routed earlier, at a different location and
        // with stray bits a previous firmware stage left behind
        p.letimer_mut()
            .seed_route(route::OUT1_PEN | route::location(2) | 0xF000);

        toggle_ok(&mut p, PinName::PD6, 100);

        let r = p.letimer().route();
        assert!(r & route::OUT1_PEN != 0, "module 1 enable must survive");
        assert!(r & route::OUT0_PEN != 0);
        // The shared location field and the stray bits are dropped by the mask
        assert_eq!(r, route::OUT_PEN_MASK | route::location(0));
    }

    #[test]
    fn test_repeat_call_is_idempotent() {
        let mut once = platform();
        toggle_ok(&mut once, PinName::PC4, 250);

        let mut twice = platform();
        toggle_ok(&mut twice, PinName::PC4, 250);
        toggle_ok(&mut twice, PinName::PC4, 250);

        assert_eq!(snapshot(&once), snapshot(&twice));
    }

    #[test]
    fn test_two_modules_coexist() {
        let mut p = platform();
        toggle_ok(&mut p, PinName::PD6, 1000);
        toggle_ok(&mut p, PinName::PD7, 1000);

        let r = p.letimer().route();
        assert_eq!(r & route::OUT_PEN_MASK, route::OUT_PEN_MASK);
        assert_eq!(r >> route::LOCATION_SHIFT, 0);
        assert_eq!(p.letimer().repeat(OutputModule::Out0), 1);
        assert_eq!(p.letimer().repeat(OutputModule::Out1), 1);
    }

    #[test]
    fn test_same_module_overwrites() {
        let mut p = platform();
        toggle_ok(&mut p, PinName::PD6, 1000);
        toggle_ok(&mut p, PinName::PC4, 500);

        // Second call re-routes module 0 to location 3 and reprograms the
        // shared comparators; nothing of the first configuration remains
        let r = p.letimer().route();
        assert_eq!(r, route::OUT0_PEN | route::location(3));
        assert_eq!(p.letimer().compare(CompareChannel::Comp0), 16_384);
        assert_eq!(p.letimer().compare(CompareChannel::Comp1), 16_384);
    }

    fn toggle_ok(p: &mut MockPlatform, pin: PinName, period_ms: u32) {
        start(p, pin, period_ms).unwrap();
    }

    fn assert_untouched(p: &MockPlatform) {
        assert_eq!(p.letimer().write_count(), 0, "no timer register writes");
        assert!(p.gpio().journal().is_empty(), "no pin mode changes");
        assert!(!p.clock().is_enabled(PeripheralClock::LeTimer0));
        assert!(!p.clock().is_enabled(PeripheralClock::Gpio));
    }
}
