//! Texas Instruments LP8558 backlight test driver
//!
//! A bring-up aid, not a backlight driver. On probe it dumps the brightness,
//! device control and EEPROM registers, toggles the `enable` line off for
//! two seconds and back on, dumps again, switches the line off and refuses
//! the device with `ENODEV` so it never stays bound.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod common;
pub mod error;
pub mod hal;
pub mod registers;
pub(crate) mod chip;

mod probe;

#[cfg(test)]
mod mock;
#[cfg(test)]
mod testlog;

pub use crate::common::{
    functionality::I2cFuncFlags, gpio::GpiodFlags, timing, timing::ProbeTiming,
};
pub use crate::chip::RegisterDump;
pub use crate::error::{Errno, Result};
pub use crate::probe::{DiagnosticReport, Lp8558TestDriver};

/// Module name
pub const LP8558_DRIVER_NAME: &str = "lp8558";
/// Device tree compatible the driver matches
pub const LP8558_OF_COMPATIBLE: &str = "ti,lp8558-test";
/// Module description
pub const LP8558_DRIVER_DESCRIPTION: &str = "Texas Instruments LP8558 Backlight test driver";
/// Module license
pub const LP8558_DRIVER_LICENSE: &str = "GPL";
/// GPIO consumer id of the backlight enable line
pub const LP8558_ENABLE_CON_ID: &str = "enable";

/// Lp8558DriverConfig
#[derive(Debug, Default, Copy, Clone)]
pub struct Lp8558DriverConfig {
    timing: ProbeTiming,
}

impl Lp8558DriverConfig {
    /// Create a Config
    pub fn new(timing: ProbeTiming) -> Self {
        Self { timing }
    }
}
