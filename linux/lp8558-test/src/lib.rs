// SPDX-License-Identifier: GPL-2.0

//! Rust LP8558 backlight test driver
//!
//! Glue between the i2c core and `lp8558_test`. The OF table is handed to the
//! i2c core for matching but not exported as a module alias, so a device tree
//! node alone never autoloads this module. Load it by hand during bring-up.

use core::fmt;

use kernel::{bindings, device, device::Core, device_id::IdArray, i2c, of, prelude::*, str::CString};
use lp8558_test::hal::{DelayMs, GpioConsumer, GpioDesc, SmbusClient};
use lp8558_test::{Errno, GpiodFlags, I2cFuncFlags, Lp8558DriverConfig, Lp8558TestDriver};

type DumpResult<T> = core::result::Result<T, Errno>;

struct Lp8558Driver;

const LP8558_OF_COMPATIBLE: &CStr = c"ti,lp8558-test";

// No `module_device_table!`: the driver must not autoload.
const OF_TABLE: IdArray<of::DeviceId, <Lp8558Driver as i2c::Driver>::IdInfo, 1> =
    IdArray::new([(of::DeviceId::new(LP8558_OF_COMPATIBLE), ())]);

fn to_kernel_error(errno: Errno) -> Error {
    Error::from_errno(errno.to_errno())
}

fn from_kernel_error(err: Error) -> Errno {
    Errno::from_errno(err.to_errno())
}

struct KernelClient<'a> {
    dev: &'a device::Device<Core>,
    raw: *mut bindings::i2c_client,
}

impl SmbusClient for KernelClient<'_> {
    fn get_functionality(&self) -> I2cFuncFlags {
        // SAFETY: the client and its adapter are valid for the probe call.
        let func = unsafe { bindings::i2c_get_functionality((*self.raw).adapter) };
        I2cFuncFlags::from_bits_truncate(func)
    }

    fn read_byte_data(&mut self, command: u8) -> DumpResult<u8> {
        // SAFETY: the client is valid for the probe call.
        let ret = unsafe { bindings::i2c_smbus_read_byte_data(self.raw, command) };
        if ret < 0 {
            return Err(Errno::from_errno(ret));
        }
        Ok(ret as u8)
    }

    fn dev_log(&self, level: log::Level, args: fmt::Arguments<'_>) {
        match level {
            log::Level::Error => dev_err!(self.dev, "{}\n", args),
            log::Level::Warn => dev_warn!(self.dev, "{}\n", args),
            log::Level::Info => dev_info!(self.dev, "{}\n", args),
            _ => dev_dbg!(self.dev, "{}\n", args),
        }
    }
}

struct KernelGpio(*mut bindings::device);

impl GpioConsumer for KernelGpio {
    type Desc = KernelGpioDesc;

    fn get(&mut self, con_id: &str, flags: GpiodFlags) -> DumpResult<KernelGpioDesc> {
        let con_id = CString::try_from_fmt(fmt!("{con_id}")).map_err(from_kernel_error)?;
        // SAFETY: the device is valid for the probe call and `con_id` is NUL terminated.
        let desc = unsafe { bindings::gpiod_get(self.0, con_id.as_char_ptr(), flags.bits()) };
        let desc = kernel::error::from_err_ptr(desc).map_err(from_kernel_error)?;
        Ok(KernelGpioDesc(desc))
    }
}

/// Owned `gpio_desc`, put on drop
struct KernelGpioDesc(*mut bindings::gpio_desc);

impl GpioDesc for KernelGpioDesc {
    fn set_value_cansleep(&mut self, value: bool) {
        // SAFETY: `self.0` came from a successful `gpiod_get`.
        unsafe { bindings::gpiod_set_value_cansleep(self.0, value.into()) };
    }
}

impl Drop for KernelGpioDesc {
    fn drop(&mut self) {
        // SAFETY: `self.0` came from a successful `gpiod_get` and is put once.
        unsafe { bindings::gpiod_put(self.0) };
    }
}

struct KernelDelay;

impl DelayMs for KernelDelay {
    fn msleep(&mut self, ms: u32) {
        // SAFETY: probe runs in process context.
        unsafe { bindings::msleep(ms) };
    }
}

impl i2c::Driver for Lp8558Driver {
    type IdInfo = ();

    const OF_ID_TABLE: Option<of::IdTable<Self::IdInfo>> = Some(&OF_TABLE);

    fn probe(
        idev: &i2c::I2cClient<Core>,
        _info: Option<&Self::IdInfo>,
    ) -> impl PinInit<Self, Error> {
        let dev = idev.as_ref();
        let mut client = KernelClient {
            dev,
            // SAFETY: `dev` is the device embedded in `idev`.
            raw: unsafe { bindings::i2c_verify_client(dev.as_raw()) },
        };
        let driver = Lp8558TestDriver::new(Lp8558DriverConfig::default());

        match driver.probe_and_detach(&mut client, &mut KernelGpio(dev.as_raw()), &mut KernelDelay) {
            Ok(()) => Ok(Self),
            Err(errno) => Err(to_kernel_error(errno)),
        }
    }
}

#[kunit_tests(lp8558_test_glue)]
mod tests {
    use super::*;

    #[test]
    fn of_table_matches_compatible() {
        assert_eq!(
            LP8558_OF_COMPATIBLE.to_bytes(),
            lp8558_test::LP8558_OF_COMPATIBLE.as_bytes()
        );
    }
}

kernel::module_i2c_driver! {
    type: Lp8558Driver,
    name: "lp8558",
    authors: ["Guoweikang"],
    description: "Texas Instruments LP8558 Backlight test driver",
    license: "GPL",
}
