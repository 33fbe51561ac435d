//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod clock;
pub mod gpio;
pub mod letimer;
pub mod platform;

// Re-export trait interfaces
pub use clock::{ClockInterface, PeripheralClock};
pub use gpio::{GpioInterface, PinMode, Port};
pub use letimer::{
    route, CompareChannel, LeTimerConfig, LeTimerInterface, OutputModule, RepeatMode,
    UnderflowAction,
};
pub use platform::Platform;
