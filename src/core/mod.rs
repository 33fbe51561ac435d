//! Fundamental infrastructure
//!
//! This module contains infrastructure shared by the rest of the crate,
//! currently the logging abstraction.

pub mod logging;
