//! Blink PD6 at 0.5 Hz without waking the CPU
//!
//! The low-energy timer drives the pin entirely in hardware; after
//! configuration the core has nothing left to do and sleeps.
//!
//! Run with:
//! cargo run --example blink --features efm32gg --target thumbv7m-none-eabi

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt_rtt as _;
use panic_halt as _;

use gecko_toggle::devices::{pins::PinName, toggle};
use gecko_toggle::log_info;
use gecko_toggle::platform::efm32gg::Efm32ggPlatform;
use gecko_toggle::platform::Platform;

#[entry]
fn main() -> ! {
    let mut platform = Efm32ggPlatform::init().unwrap();

    toggle::start(&mut platform, PinName::PD6, 1000).unwrap();
    log_info!("PD6 toggling every 1000 ms");

    loop {
        cortex_m::asm::wfi();
    }
}
