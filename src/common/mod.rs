//! Probe common module
//!
//! Include:
//! functionality: I2C adapter functionality bits
//! gpio: gpio consumer flags
//! timing: toggle timing config

/// i2c adapter functionality
pub mod functionality;
/// gpio consumer flags
pub mod gpio;
/// toggle timing
pub mod timing;
