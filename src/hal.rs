//! Host interfaces the probe runs against
//!
//! The kernel glue implements these on `i2c_client`, `gpio_desc` and
//! `msleep`. Tests implement them with recording mocks.

use core::fmt;

use log::Level;

use crate::common::functionality::I2cFuncFlags;
use crate::common::gpio::GpiodFlags;
use crate::error::Result;

/// An SMBus client on an adapter
pub trait SmbusClient {
    /// return adapter functionality
    fn get_functionality(&self) -> I2cFuncFlags;

    /// True if the adapter supports every bit in `func`
    fn check_functionality(&self, func: I2cFuncFlags) -> bool {
        self.get_functionality().contains(func)
    }

    /// SMBus read byte data at `command`
    fn read_byte_data(&mut self, command: u8) -> Result<u8>;

    /// Log a message against this client's device
    ///
    /// Hosts that can name the device, like `dev_err` does in the kernel,
    /// override this so output from several chips stays apart.
    fn dev_log(&self, level: Level, args: fmt::Arguments<'_>) {
        log::log!(level, "{}", args);
    }
}

/// Error level [`SmbusClient::dev_log`]
macro_rules! dev_err {
    ($dev:expr, $($arg:tt)+) => {
        $crate::hal::SmbusClient::dev_log($dev, ::log::Level::Error, format_args!($($arg)+))
    };
}

/// Debug level [`SmbusClient::dev_log`]
macro_rules! dev_dbg {
    ($dev:expr, $($arg:tt)+) => {
        $crate::hal::SmbusClient::dev_log($dev, ::log::Level::Debug, format_args!($($arg)+))
    };
}

pub(crate) use {dev_dbg, dev_err};

/// A requested GPIO line
///
/// The line is released when the handle is dropped, so every return path of
/// the owner gives it back.
pub trait GpioDesc {
    /// Set the logical value, may sleep
    fn set_value_cansleep(&mut self, value: bool);
}

/// Resolves named GPIO lines from the device's firmware description
pub trait GpioConsumer {
    /// Handle type
    type Desc: GpioDesc;

    /// Request the line `con_id` with `flags`
    fn get(&mut self, con_id: &str, flags: GpiodFlags) -> Result<Self::Desc>;
}

/// Blocking millisecond delay
pub trait DelayMs {
    /// Sleep at least `ms` milliseconds
    fn msleep(&mut self, ms: u32);
}

/// [`DelayMs`] backed by `std::thread::sleep`
#[cfg(any(test, feature = "std"))]
#[derive(Debug, Default, Copy, Clone)]
pub struct StdDelay;

#[cfg(any(test, feature = "std"))]
impl DelayMs for StdDelay {
    fn msleep(&mut self, ms: u32) {
        // thread::sleep never returns early
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
