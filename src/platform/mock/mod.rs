//! Mock platform implementation for testing
//!
//! This module provides mock implementations of the platform traits that can
//! be used for unit testing without requiring actual hardware. Each mock
//! records what was written to it so tests can assert both the final register
//! state and the no-mutation-on-rejection property.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled

#![cfg(any(test, feature = "mock"))]

mod clock;
mod gpio;
mod letimer;
mod platform;

pub use clock::MockClock;
pub use gpio::MockGpio;
pub use letimer::MockLeTimer;
pub use platform::MockPlatform;
