//! Platform error types
//!
//! This module defines error types for platform construction. Register access
//! itself is infallible by contract: a write either lands or the part is
//! beyond software recovery, so the peripheral traits return plain values.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "efm32gg", derive(defmt::Format))]
pub enum PlatformError {
    /// Platform initialization failed (e.g. the register set is already owned)
    InitializationFailed,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::InitializationFailed => write!(f, "Platform initialization failed"),
        }
    }
}
