//! Platform abstraction layer
//!
//! This module provides hardware abstraction over the three peripherals the
//! toggle configurator consumes: the clock-management unit, the GPIO block
//! and the low-energy timer. All platform-specific code is isolated here.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "efm32gg")]
pub mod efm32gg;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{
    ClockInterface, CompareChannel, GpioInterface, LeTimerConfig, LeTimerInterface, OutputModule,
    PeripheralClock, PinMode, Platform, Port, RepeatMode, UnderflowAction,
};
