#![cfg_attr(feature = "efm32gg", no_std)]
#![cfg_attr(feature = "efm32gg", no_main)]

// On-target test harness; host test runs exercise the mock platform in the
// unit tests instead.
#[cfg(not(feature = "efm32gg"))]
fn main() {}

#[cfg(feature = "efm32gg")]
use defmt_rtt as _;
#[cfg(feature = "efm32gg")]
use panic_halt as _;

#[cfg(feature = "efm32gg")]
#[defmt_test::tests]
mod tests {
    use defmt::{assert, assert_eq};
    use gecko_toggle::devices::{pins::PinName, toggle};
    use gecko_toggle::platform::efm32gg::Efm32ggPlatform;
    use gecko_toggle::platform::{LeTimerInterface, Platform};

    #[init]
    fn init() -> Efm32ggPlatform {
        Efm32ggPlatform::init().unwrap()
    }

    #[test]
    fn rejects_pin_without_route(platform: &mut Efm32ggPlatform) {
        assert!(toggle::start(platform, PinName::PA0, 1000).is_err());
    }

    #[test]
    fn rejects_overlong_period(platform: &mut Efm32ggPlatform) {
        assert!(toggle::start(platform, PinName::PD6, 2001).is_err());
    }

    #[test]
    fn routes_and_starts_pd6(platform: &mut Efm32ggPlatform) {
        toggle::start(platform, PinName::PD6, 1000).unwrap();
        // OUT0 enabled at location 0
        assert_eq!(platform.letimer_mut().route(), 0x1);
    }
}
